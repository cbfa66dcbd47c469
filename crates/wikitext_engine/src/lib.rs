//! Wikitext engine: staged markup-to-HTML conversion pipeline.
mod convert;
mod engine;
mod categories;
mod headings;
mod inline;
mod lists;
mod links;
mod tables;
mod templates;
mod codeblock;
mod paragraph;
mod sanitize;
mod scan;
mod summary;
mod toc;
mod types;

pub use categories::extract_categories;
pub use codeblock::escape_code_blocks;
pub use convert::{MarkupConverter, WikiTextConverter};
pub use engine::WikiEngine;
pub use headings::recognize_headings;
pub use inline::format_inline;
pub use links::resolve_links;
pub use lists::build_lists;
pub use paragraph::compose_paragraphs;
pub use sanitize::sanitize_html;
pub use summary::{extract_summary, DEFAULT_SUMMARY_CHARS};
pub use tables::build_tables;
pub use templates::expand_templates;
pub use toc::{generate_toc, TocEntry};
pub use types::{ConversionOutput, Stage};
