/// Rewrites every parseable occurrence of `opener` in `text`.
///
/// `parse` receives the text starting at an opener and returns the number of
/// bytes to consume plus the replacement, or `None` to leave the opener as
/// literal text. On `None` the scan advances a single character, so a later
/// overlapping candidate is still considered. Linear in the input; no
/// backtracking.
pub(crate) fn rewrite<F>(text: &str, opener: &str, mut parse: F) -> String
where
    F: FnMut(&str) -> Option<(usize, String)>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(opener) {
        match parse(&rest[start..]) {
            Some((consumed, replacement)) => {
                out.push_str(&rest[..start]);
                out.push_str(&replacement);
                rest = &rest[start + consumed..];
            }
            None => {
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}
