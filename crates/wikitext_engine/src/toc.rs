use scraper::{Html, Selector};
use serde::Serialize;

/// One table-of-contents row, derived from a rendered heading element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub level: u8,
    pub title: String,
}

/// Scans rendered HTML for heading elements in document order, assigning
/// sequential ids.
pub fn generate_toc(html: &str) -> Vec<TocEntry> {
    let Ok(selector) = Selector::parse("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&selector)
        .enumerate()
        .map(|(index, heading)| {
            let level = heading
                .value()
                .name()
                .trim_start_matches('h')
                .parse()
                .unwrap_or(1);
            TocEntry {
                id: format!("heading-{index}"),
                level,
                title: heading.text().collect::<String>().trim().to_string(),
            }
        })
        .collect()
}
