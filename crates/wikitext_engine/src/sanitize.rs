use std::collections::{HashMap, HashSet};

/// Elements the engine may emit. Anything else is removed, not escaped.
const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6",
    "p", "br", "div", "span",
    "strong", "b", "em", "i", "u", "s",
    "ul", "ol", "li",
    "a", "img",
    "table", "thead", "tbody", "tr", "th", "td",
    "blockquote", "pre", "code",
    "sub", "sup",
    "hr",
];

/// Attributes permitted on any allowed element.
const GENERIC_ATTRIBUTES: &[&str] = &["class", "id", "style", "title"];

/// Allowlist filter over the assembled HTML. This is the engine's security
/// boundary and always runs last; rejected elements and attributes are
/// dropped silently, never surfaced as errors.
pub fn sanitize_html(html: &str) -> String {
    let mut tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    tag_attributes.insert("a", ["href", "target", "rel"].into_iter().collect());
    tag_attributes.insert("img", ["src", "alt"].into_iter().collect());
    tag_attributes.insert("th", ["colspan", "rowspan"].into_iter().collect());
    tag_attributes.insert("td", ["colspan", "rowspan"].into_iter().collect());

    ammonia::Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(GENERIC_ATTRIBUTES.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .link_rel(None)
        .clean(html)
        .to_string()
}
