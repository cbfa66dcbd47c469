use crate::scan;

/// Extracts `[[Category:Name]]` / `[[分类:Name]]` markers, keyword matched
/// case-insensitively, with an optional `|sort-key` that is recognized and
/// discarded. Markers are metadata and are always removed from the text.
///
/// Returns the cleaned text and the category names in first-seen order,
/// trimmed, deduplicated by exact (case-sensitive) match. A marker with an
/// empty name is removed but contributes no entry.
pub fn extract_categories(text: &str) -> (String, Vec<String>) {
    let mut categories: Vec<String> = Vec::new();
    let cleaned = scan::rewrite(text, "[[", |s| {
        let (consumed, name) = parse_marker(s)?;
        let name = name.trim();
        if !name.is_empty() && !categories.iter().any(|c| c == name) {
            categories.push(name.to_string());
        }
        Some((consumed, String::new()))
    });
    (cleaned, categories)
}

fn parse_marker(s: &str) -> Option<(usize, &str)> {
    let body = s.get(2..)?;
    let rest = strip_keyword(body)?;
    let prefix_len = s.len() - rest.len();

    // Name runs to the first `|` or `]`; a lone `]` cannot close a marker.
    let (name_end, delim) = rest
        .char_indices()
        .find(|&(_, ch)| ch == '|' || ch == ']')?;
    let name = &rest[..name_end];

    let close = if delim == '|' {
        let sort_key = rest[name_end + 1..].find(']')?;
        name_end + 1 + sort_key
    } else {
        name_end
    };
    if !rest[close..].starts_with("]]") {
        return None;
    }
    Some((prefix_len + close + 2, name))
}

fn strip_keyword(s: &str) -> Option<&str> {
    const KEYWORD: &str = "category:";
    if let Some(head) = s.get(..KEYWORD.len()) {
        if head.eq_ignore_ascii_case(KEYWORD) {
            return Some(&s[KEYWORD.len()..]);
        }
    }
    s.strip_prefix("分类:")
}
