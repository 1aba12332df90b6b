//! Display blocks for a formatted report

use serde::Serialize;

use super::fields::render_body;
use super::sections::{split_sections, Section};

/// One call to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DisplayBlock {
    /// Markdown to render as-is
    Markdown(String),
    /// Section title
    Header(String),
    /// Horizontal rule closing a section
    Separator,
}

/// Split and render a report into display blocks
pub fn format_report(doc: &str) -> Vec<DisplayBlock> {
    format_sections(&split_sections(doc))
}

/// Render already split sections into display blocks
///
/// The preamble is shown verbatim without field rewriting. Each section
/// yields its header, its rendered body when non-empty, and a separator.
pub fn format_sections(sections: &[Section]) -> Vec<DisplayBlock> {
    let mut blocks = Vec::with_capacity(sections.len() * 3);

    for section in sections {
        if section.is_preamble() {
            if !section.body.trim().is_empty() {
                blocks.push(DisplayBlock::Markdown(section.body.clone()));
            }
            continue;
        }

        blocks.push(DisplayBlock::Header(section.title.clone()));

        let body = render_body(&section.body);
        if !body.is_empty() {
            blocks.push(DisplayBlock::Markdown(body));
        }

        blocks.push(DisplayBlock::Separator);
    }

    blocks
}
