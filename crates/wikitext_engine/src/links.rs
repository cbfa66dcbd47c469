use crate::scan;

/// Link resolution order: piped internal, bare internal, external with
/// display text, bare external. Each narrower form runs first so a longer,
/// more specific match is never consumed by a shorter pattern.
pub fn resolve_links(text: &str) -> String {
    let text = scan::rewrite(text, "[[", parse_internal_piped);
    let text = scan::rewrite(&text, "[[", parse_internal_bare);
    let text = scan::rewrite(&text, "[", parse_external_display);
    scan::rewrite(&text, "[", parse_external_bare)
}

/// `[[Page|Text]]`
fn parse_internal_piped(s: &str) -> Option<(usize, String)> {
    let body = &s[2..];
    let pipe = body.find(['|', ']'])?;
    if pipe == 0 || !body[pipe..].starts_with('|') {
        return None;
    }
    let page = &body[..pipe];
    let after = &body[pipe + 1..];
    let close = after.find(']')?;
    if close == 0 || !after[close..].starts_with("]]") {
        return None;
    }
    let display = &after[..close];
    Some((2 + pipe + 1 + close + 2, internal_anchor(page, display)))
}

/// `[[Page]]`
fn parse_internal_bare(s: &str) -> Option<(usize, String)> {
    let body = &s[2..];
    let close = body.find(']')?;
    if close == 0 || !body[close..].starts_with("]]") {
        return None;
    }
    let page = &body[..close];
    Some((2 + close + 2, internal_anchor(page, page)))
}

/// `[url display text]`
fn parse_external_display(s: &str) -> Option<(usize, String)> {
    let body = &s[1..];
    let (url_end, delim) = body
        .char_indices()
        .find(|&(_, ch)| ch == ']' || ch.is_whitespace())?;
    if url_end == 0 || !delim.is_whitespace() {
        return None;
    }
    let url = &body[..url_end];
    let tail = &body[url_end..];
    let after_ws = tail.trim_start();
    let ws_len = tail.len() - after_ws.len();
    let close = after_ws.find(']')?;
    if close == 0 {
        return None;
    }
    let display = &after_ws[..close];
    Some((
        1 + url_end + ws_len + close + 1,
        external_anchor(url, display),
    ))
}

/// `[url]`
fn parse_external_bare(s: &str) -> Option<(usize, String)> {
    let body = &s[1..];
    let mut end = None;
    for (i, ch) in body.char_indices() {
        if ch == ']' {
            end = Some(i);
            break;
        }
        if ch.is_whitespace() {
            return None;
        }
    }
    let end = end?;
    if end == 0 {
        return None;
    }
    let url = &body[..end];
    Some((1 + end + 1, external_anchor(url, url)))
}

fn internal_anchor(page: &str, display: &str) -> String {
    format!(
        "<a href=\"/wiki/{}\" class=\"wiki-link\" title=\"{}\">{display}</a>",
        urlencoding::encode(page),
        html_escape::encode_double_quoted_attribute(page),
    )
}

fn external_anchor(url: &str, display: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"external-link\" target=\"_blank\" rel=\"noopener noreferrer\">{display}</a>",
        html_escape::encode_double_quoted_attribute(url),
    )
}
