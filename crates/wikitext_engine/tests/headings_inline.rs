use pretty_assertions::assert_eq;
use wikitext_engine::{format_inline, recognize_headings};

#[test]
fn matching_delimiter_counts_make_headings() {
    assert_eq!(recognize_headings("== Title =="), "<h2>Title</h2>");
    assert_eq!(recognize_headings("= Top ="), "<h1>Top</h1>");
    assert_eq!(
        recognize_headings("====== Deep ======"),
        "<h6>Deep</h6>"
    );
}

#[test]
fn mismatched_delimiter_counts_stay_literal() {
    assert_eq!(recognize_headings("== Title ="), "== Title =");
    assert_eq!(recognize_headings("= Title =="), "= Title ==");
}

#[test]
fn runs_longer_than_six_are_not_headings() {
    assert_eq!(
        recognize_headings("======= Title ======="),
        "======= Title ======="
    );
}

#[test]
fn heading_titles_are_trimmed() {
    assert_eq!(recognize_headings("==   Spaced   =="), "<h2>Spaced</h2>");
}

#[test]
fn empty_titles_stay_literal() {
    assert_eq!(recognize_headings("== =="), "== ==");
    assert_eq!(recognize_headings("===="), "====");
}

#[test]
fn headings_match_per_line_not_per_document() {
    assert_eq!(
        recognize_headings("== A ==\nprose\n=== B ==="),
        "<h2>A</h2>\nprose\n<h3>B</h3>"
    );
}

#[test]
fn bold_and_italic_render_as_strong_and_em() {
    assert_eq!(
        format_inline("'''bold''' and ''italic''"),
        "<strong>bold</strong> and <em>italic</em>"
    );
}

#[test]
fn triple_quotes_are_consumed_before_double() {
    // A bold run must not be mis-split into italics.
    assert_eq!(format_inline("'''b'''"), "<strong>b</strong>");
}

#[test]
fn underline_and_strike_delimiters() {
    assert_eq!(format_inline("~~~~~u~~~~~"), "<u>u</u>");
    assert_eq!(format_inline("----gone----"), "<s>gone</s>");
}

#[test]
fn odd_delimiter_runs_pair_first_with_second() {
    // Canonical resolution of the dangling-marker ambiguity: the third
    // marker has no partner and stays literal.
    assert_eq!(
        format_inline("'''a'''b'''c'''"),
        "<strong>a</strong>b<strong>c</strong>"
    );
    assert_eq!(format_inline("'''a'''b'''c"), "<strong>a</strong>b'''c");
}

#[test]
fn bold_italic_overlap_has_a_fixed_resolution() {
    assert_eq!(
        format_inline("'''''x'''''"),
        "<strong><em>x</strong></em>"
    );
}

#[test]
fn spans_do_not_cross_line_breaks() {
    assert_eq!(format_inline("'''a\nb'''"), "'''a\nb'''");
}

#[test]
fn sup_and_sub_pass_through_unchanged() {
    assert_eq!(
        format_inline("E = mc<sup>2</sup> and H<sub>2</sub>O"),
        "E = mc<sup>2</sup> and H<sub>2</sub>O"
    );
}
