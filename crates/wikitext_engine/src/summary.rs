use scraper::Html;

pub const DEFAULT_SUMMARY_CHARS: usize = 200;

/// Plain-text summary of rendered HTML: the text content, truncated to
/// `max_chars` characters with a trailing ellipsis when over.
pub fn extract_summary(html: &str, max_chars: usize) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut summary: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    summary.push_str("...");
    summary
}
