use engine_logging::engine_debug;

use crate::types::{ConversionOutput, Stage};
use crate::{
    categories, codeblock, headings, inline, links, lists, paragraph, sanitize, tables, templates,
};

/// Seam for markup-to-HTML conversion.
pub trait MarkupConverter: Send + Sync {
    fn to_html(&self, markup: &str) -> ConversionOutput;
}

/// Staged wikitext converter. Stages run in a fixed order; each stage's
/// output is the next stage's input and the sanitizer is always last, after
/// which no further string surgery occurs. Total for any input: malformed
/// markup degrades to literal text, never to an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct WikiTextConverter;

impl MarkupConverter for WikiTextConverter {
    fn to_html(&self, markup: &str) -> ConversionOutput {
        if markup.is_empty() {
            return ConversionOutput::empty();
        }

        engine_logging::set_active_stage(Stage::Categories.name());
        let (text, categories) = categories::extract_categories(markup);

        let text = run_stage(Stage::Headings, &text, headings::recognize_headings);
        let text = run_stage(Stage::InlineFormatting, &text, inline::format_inline);
        let text = run_stage(Stage::Lists, &text, lists::build_lists);
        let text = run_stage(Stage::Links, &text, links::resolve_links);
        let text = run_stage(Stage::Tables, &text, tables::build_tables);
        let text = run_stage(Stage::Templates, &text, templates::expand_templates);
        let text = run_stage(Stage::CodeBlocks, &text, codeblock::escape_code_blocks);
        let text = run_stage(Stage::Paragraphs, &text, paragraph::compose_paragraphs);
        let html = run_stage(Stage::Sanitize, &text, sanitize::sanitize_html);
        engine_logging::set_active_stage("idle");

        ConversionOutput { html, categories }
    }
}

fn run_stage(stage: Stage, input: &str, run: fn(&str) -> String) -> String {
    engine_logging::set_active_stage(stage.name());
    let output = run(input);
    engine_debug!("{} bytes in, {} bytes out", input.len(), output.len());
    output
}
