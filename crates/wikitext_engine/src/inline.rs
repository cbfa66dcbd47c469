use crate::scan;

/// Inline formatting, applied in this order: `'''bold'''`, `''italic''`,
/// `~~~~~underline~~~~~`, `----strike----`. Bold runs first because its
/// delimiter contains the italic delimiter as a substring. `<sup>` and
/// `<sub>` need no rewriting here: they pass through untouched and the
/// sanitizer allowlist admits them.
pub fn format_inline(text: &str) -> String {
    let text = pair_spans(text, "'''", "strong");
    let text = pair_spans(&text, "''", "em");
    let text = pair_spans(&text, "~~~~~", "u");
    pair_spans(&text, "----", "s")
}

/// Leftmost-shortest pairing. Spans never cross a line break and never carry
/// empty content; an opener without a usable closer stays literal.
fn pair_spans(text: &str, delim: &str, tag: &str) -> String {
    scan::rewrite(text, delim, |s| {
        let content_start = delim.len();
        let close = find_close(&s[content_start..], delim)?;
        let content = &s[content_start..content_start + close];
        Some((
            content_start + close + delim.len(),
            format!("<{tag}>{content}</{tag}>"),
        ))
    })
}

fn find_close(s: &str, delim: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = s[from..].find(delim) {
        let close = from + rel;
        let content = &s[..close];
        if content.contains('\n') {
            return None;
        }
        if !content.is_empty() {
            return Some(close);
        }
        from = close + 1;
    }
    None
}
