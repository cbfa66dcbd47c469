const NOWIKI_OPEN: &str = "<nowiki>";
const NOWIKI_CLOSE: &str = "</nowiki>";
const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

/// Verbatim regions: `<nowiki>` spans render as escaped `<pre><code>`,
/// `<pre>` spans as escaped `<pre>`. A single left-to-right scan handles
/// whichever opener comes first, so the output of one region is never
/// reprocessed as another. An unterminated region stays literal.
pub fn escape_code_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let nowiki = rest.find(NOWIKI_OPEN);
        let pre = rest.find(PRE_OPEN);
        let (start, open, close, wrap_code) = match (nowiki, pre) {
            (Some(n), Some(p)) if n <= p => (n, NOWIKI_OPEN, NOWIKI_CLOSE, true),
            (Some(n), None) => (n, NOWIKI_OPEN, NOWIKI_CLOSE, true),
            (_, Some(p)) => (p, PRE_OPEN, PRE_CLOSE, false),
            (None, None) => break,
        };
        let content_start = start + open.len();
        match rest[content_start..].find(close) {
            Some(rel) => {
                let content = &rest[content_start..content_start + rel];
                out.push_str(&rest[..start]);
                if wrap_code {
                    out.push_str("<pre><code>");
                    out.push_str(&html_escape::encode_text(content));
                    out.push_str("</code></pre>");
                } else {
                    out.push_str("<pre>");
                    out.push_str(&html_escape::encode_text(content));
                    out.push_str("</pre>");
                }
                rest = &rest[content_start + rel + close.len()..];
            }
            None => {
                out.push_str(&rest[..content_start]);
                rest = &rest[content_start..];
            }
        }
    }
    out.push_str(rest);
    out
}
