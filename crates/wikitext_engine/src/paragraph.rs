/// Paragraph and line-break composition: a run of blank lines is a paragraph
/// boundary, a single remaining newline becomes `<br>`, non-empty output is
/// wrapped in an enclosing paragraph, and empty paragraphs are dropped.
pub fn compose_paragraphs(text: &str) -> String {
    let mut body = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(nl) = rest.find('\n') {
        body.push_str(&rest[..nl]);
        let after = &rest[nl + 1..];
        // Whitespace run following this newline; a second newline inside it
        // makes the whole run a paragraph boundary.
        let run_len = after.len() - after.trim_start().len();
        match after[..run_len].rfind('\n') {
            Some(last) => {
                body.push_str("</p><p>");
                rest = &after[last + 1..];
            }
            None => {
                body.push_str("<br>");
                rest = after;
            }
        }
    }
    body.push_str(rest);

    let wrapped = if body.trim().is_empty() {
        body
    } else {
        format!("<p>{body}</p>")
    };
    drop_empty_paragraphs(&wrapped)
}

fn drop_empty_paragraphs(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<p>") {
        let after = &rest[start + 3..];
        if let Some(tail) = after.trim_start().strip_prefix("</p>") {
            out.push_str(&rest[..start]);
            rest = tail;
        } else {
            out.push_str(&rest[..start + 3]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
