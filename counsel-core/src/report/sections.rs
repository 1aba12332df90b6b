//! Section splitting for the consolidated report

use std::borrow::Cow;

/// Splits the document into fragments; only headings after a newline count
const SECTION_DELIMITER: &str = "\n# ";

/// Marker that opens a top-level heading
const HEADING_MARKER: &str = "# ";

/// The first heading of the manager template
const FIRST_SECTION_TITLE: &str = "Executive Summary";

/// A titled section of the report, or the untitled preamble before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the `#` marker
    pub title: String,
    /// Text under the heading, trimmed (verbatim for the preamble)
    pub body: String,
    preamble: bool,
}

impl Section {
    /// Create a section opened by a heading
    pub fn heading(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            preamble: false,
        }
    }

    /// Create the untitled leading text of a document
    pub fn preamble(body: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            body: body.into(),
            preamble: true,
        }
    }

    /// Whether this is leading text rather than a headed section
    pub fn is_preamble(&self) -> bool {
        self.preamble
    }

    /// Markdown for this section, with the heading marker restored
    pub fn to_markdown(&self) -> String {
        if self.preamble {
            self.body.clone()
        } else if self.body.is_empty() {
            format!("{}{}", HEADING_MARKER, self.title)
        } else {
            format!("{}{}\n{}", HEADING_MARKER, self.title, self.body)
        }
    }
}

/// Split a report into sections, in document order
///
/// The document is split on `"\n# "`. The first fragment is a preamble
/// unless it is itself a section: it starts with `# ` or with
/// `Executive Summary` (the heading whose marker was lost to a leading
/// newline-less position). Everything after a preamble is kept verbatim.
pub fn split_sections(doc: &str) -> Vec<Section> {
    doc.split(SECTION_DELIMITER)
        .enumerate()
        .map(|(i, fragment)| {
            if i == 0 {
                if opens_section(fragment) {
                    parse_section(&normalize_first(fragment))
                } else {
                    Section::preamble(fragment)
                }
            } else {
                parse_section(&format!("{}{}", HEADING_MARKER, fragment))
            }
        })
        .collect()
}

/// Rebuild a document from sections
///
/// `split_sections(&join_sections(s))` yields the same boundaries as `s`.
pub fn join_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(Section::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

fn opens_section(fragment: &str) -> bool {
    fragment.starts_with(HEADING_MARKER) || fragment.starts_with(FIRST_SECTION_TITLE)
}

fn normalize_first(fragment: &str) -> Cow<'_, str> {
    if fragment.starts_with(HEADING_MARKER) {
        Cow::Borrowed(fragment)
    } else {
        Cow::Owned(format!("{}{}", HEADING_MARKER, fragment))
    }
}

/// Parse `# Title\nbody...` into a section
fn parse_section(fragment: &str) -> Section {
    let (title_line, rest) = fragment.split_once('\n').unwrap_or((fragment, ""));
    let title = title_line.trim().trim_start_matches('#').trim();

    Section::heading(title, rest.trim())
}
