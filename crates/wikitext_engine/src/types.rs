use std::fmt;

use serde::Serialize;

/// Result of one conversion call: sanitized HTML plus the categories
/// extracted from the source markup, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    pub html: String,
    pub categories: Vec<String>,
}

impl ConversionOutput {
    pub(crate) fn empty() -> Self {
        Self {
            html: String::new(),
            categories: Vec::new(),
        }
    }
}

/// Pipeline stages, in execution order. The order is part of the engine's
/// contract: stage output feeds the next stage's grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Categories,
    Headings,
    InlineFormatting,
    Lists,
    Links,
    Tables,
    Templates,
    CodeBlocks,
    Paragraphs,
    Sanitize,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Categories => "categories",
            Stage::Headings => "headings",
            Stage::InlineFormatting => "inline-formatting",
            Stage::Lists => "lists",
            Stage::Links => "links",
            Stage::Tables => "tables",
            Stage::Templates => "templates",
            Stage::CodeBlocks => "code-blocks",
            Stage::Paragraphs => "paragraphs",
            Stage::Sanitize => "sanitize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
