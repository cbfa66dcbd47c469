use pretty_assertions::assert_eq;
use wikitext_engine::{escape_code_blocks, expand_templates};

#[test]
fn known_templates_render_styled_callouts() {
    assert_eq!(
        expand_templates("{{info|solar|power}}"),
        "<div class=\"wiki-template info-box\"><div class=\"template-icon\">ℹ️</div><div class=\"template-content\">solar power</div></div>"
    );
    assert!(expand_templates("{{warning|careful}}").contains("warning-box"));
    assert!(expand_templates("{{note|hm}}").contains("note-box"));
}

#[test]
fn template_names_match_case_insensitively() {
    assert!(expand_templates("{{Info|x}}").contains("info-box"));
    assert!(expand_templates("{{WARNING|x}}").contains("warning-box"));
}

#[test]
fn template_without_parameters_renders_an_empty_body() {
    assert_eq!(
        expand_templates("{{info}}"),
        "<div class=\"wiki-template info-box\"><div class=\"template-icon\">ℹ️</div><div class=\"template-content\"></div></div>"
    );
}

#[test]
fn unknown_templates_render_a_visible_placeholder() {
    assert_eq!(
        expand_templates("{{mystery|a}}"),
        "<div class=\"wiki-template\">Template: mystery</div>"
    );
}

#[test]
fn unterminated_templates_stay_literal() {
    assert_eq!(expand_templates("{{info|open"), "{{info|open");
}

#[test]
fn nowiki_regions_are_escaped_into_code_blocks() {
    assert_eq!(
        escape_code_blocks("<nowiki><b>&</b></nowiki>"),
        "<pre><code>&lt;b&gt;&amp;&lt;/b&gt;</code></pre>"
    );
}

#[test]
fn pre_regions_are_escaped_in_place() {
    assert_eq!(
        escape_code_blocks("<pre>x & y</pre>"),
        "<pre>x &amp; y</pre>"
    );
}

#[test]
fn nowiki_output_is_not_reescaped_by_the_pre_rule() {
    assert_eq!(
        escape_code_blocks("<nowiki>a</nowiki><pre>b</pre>"),
        "<pre><code>a</code></pre><pre>b</pre>"
    );
}

#[test]
fn verbatim_newlines_survive_escaping() {
    assert_eq!(
        escape_code_blocks("<pre>line one\nline two</pre>"),
        "<pre>line one\nline two</pre>"
    );
}

#[test]
fn unterminated_regions_stay_literal() {
    assert_eq!(escape_code_blocks("<nowiki>abc"), "<nowiki>abc");
    assert_eq!(escape_code_blocks("<pre>abc"), "<pre>abc");
}
