use pretty_assertions::assert_eq;
use wikitext_engine::sanitize_html;

#[test]
fn sanitization_is_idempotent() {
    let raw = "<p class=\"x\" onclick=\"evil()\">hi<script>alert(1)</script></p><h2>ok</h2>";
    let once = sanitize_html(raw);
    let twice = sanitize_html(&once);
    assert_eq!(once, twice);
}

#[test]
fn script_elements_are_removed_with_their_content() {
    let cleaned = sanitize_html("<p>keep</p><script>alert(1)</script>");
    assert!(cleaned.contains("keep"));
    assert!(!cleaned.contains("script"));
    assert!(!cleaned.contains("alert"));
}

#[test]
fn event_handler_attributes_are_dropped() {
    let cleaned = sanitize_html("<div onclick=\"x()\" class=\"box\">ok</div>");
    assert!(!cleaned.contains("onclick"));
    assert!(cleaned.contains("class=\"box\""));
    assert!(cleaned.contains("ok"));
}

#[test]
fn disallowed_elements_vanish_while_siblings_survive() {
    let cleaned = sanitize_html("<iframe src=\"http://x\"></iframe><em>fine</em>");
    assert!(!cleaned.contains("iframe"));
    assert!(cleaned.contains("<em>fine</em>"));
}

#[test]
fn javascript_urls_are_stripped_from_links() {
    let cleaned = sanitize_html("<a href=\"javascript:alert(1)\">x</a>");
    assert!(!cleaned.contains("javascript"));
    assert!(cleaned.contains("x"));
}

#[test]
fn wiki_relative_links_pass_through() {
    let cleaned = sanitize_html("<a href=\"/wiki/Main%20Page\" title=\"Main Page\">Main Page</a>");
    assert!(cleaned.contains("href=\"/wiki/Main%20Page\""));
    assert!(cleaned.contains("title=\"Main Page\""));
}

#[test]
fn explicit_rel_and_target_are_preserved() {
    let cleaned = sanitize_html(
        "<a href=\"http://x.example\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>",
    );
    assert!(cleaned.contains("target=\"_blank\""));
    assert!(cleaned.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn table_span_attributes_are_kept() {
    let cleaned = sanitize_html("<table><tbody><tr><td colspan=\"2\">x</td></tr></tbody></table>");
    assert!(cleaned.contains("colspan=\"2\""));
}

#[test]
fn stray_markup_is_escaped_not_executed() {
    let cleaned = sanitize_html("<p>2 < 3 & more</p>");
    assert!(cleaned.contains("&lt; 3"));
    assert!(cleaned.contains("&amp; more"));
}
