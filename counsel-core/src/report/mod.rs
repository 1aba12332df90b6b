//! Report formatting
//!
//! The coordinator returns one markdown document with `# ` top-level
//! headings. This module splits it into sections, rewrites the tagged
//! `clause:` / `issue:` / `suggestion:` fields into quote blocks, and turns
//! the result into an ordered list of display blocks.

mod display;
mod fields;
mod sections;

pub use display::{format_report, format_sections, DisplayBlock};
pub use fields::{render_body, FieldKind};
pub use sections::{join_sections, split_sections, Section};
