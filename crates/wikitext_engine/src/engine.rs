use crate::convert::{MarkupConverter, WikiTextConverter};

/// Stateful wrapper around [`WikiTextConverter`] exposing the platform's
/// read/clear accessors for extracted categories. The list is retained until
/// the next parse on the same instance or an explicit clear. One instance
/// per caller: `parse` takes `&mut self`, so reading the side-channel while
/// another parse is in flight on the same instance cannot compile.
#[derive(Debug, Default)]
pub struct WikiEngine {
    converter: WikiTextConverter,
    extracted_categories: Vec<String>,
}

impl WikiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `markup` to sanitized HTML, storing the categories it
    /// carried for later retrieval.
    pub fn parse(&mut self, markup: &str) -> String {
        let output = self.converter.to_html(markup);
        self.extracted_categories = output.categories;
        output.html
    }

    /// Categories extracted by the most recent [`parse`](Self::parse) call,
    /// in first-seen order.
    pub fn extracted_categories(&self) -> &[String] {
        &self.extracted_categories
    }

    /// Resets the stored category list.
    pub fn clear_extracted_categories(&mut self) {
        self.extracted_categories.clear();
    }
}
