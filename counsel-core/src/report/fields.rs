//! Tagged field rewriting
//!
//! Rewrites `keyword: [content]` spans into an italic label followed by a
//! quoted line. Content may span lines and closes at the first `]` that is
//! not escaped with a backslash; brackets do not nest.

use std::sync::LazyLock;

use regex::Regex;

/// Kinds of tagged fields, in the order they are rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Quoted contract clause
    Clause,
    /// Negotiation alternative
    Suggestion,
    /// Legal concern
    Issue,
}

impl FieldKind {
    /// Rewrite order applied by [`render_body`]
    pub const ORDER: [FieldKind; 3] = [FieldKind::Clause, FieldKind::Suggestion, FieldKind::Issue];

    /// Keyword as written by the manager agent
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldKind::Clause => "clause",
            FieldKind::Suggestion => "suggestion",
            FieldKind::Issue => "issue",
        }
    }

    /// Label shown in the rendered block
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Clause => "Clause",
            FieldKind::Suggestion => "Suggestion",
            FieldKind::Issue => "Issue",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FieldKind::Clause => &CLAUSE_RE,
            FieldKind::Suggestion => &SUGGESTION_RE,
            FieldKind::Issue => &ISSUE_RE,
        }
    }

    fn replacement(&self) -> String {
        format!("*{}:*\n> ${{1}}", self.label())
    }
}

static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| field_regex(FieldKind::Clause));
static SUGGESTION_RE: LazyLock<Regex> = LazyLock::new(|| field_regex(FieldKind::Suggestion));
static ISSUE_RE: LazyLock<Regex> = LazyLock::new(|| field_regex(FieldKind::Issue));

/// `keyword:`, optional whitespace, then `[...]` up to the first unescaped `]`
fn field_regex(kind: FieldKind) -> Regex {
    let pattern = format!(r"(?is){}:\s*\[((?:\\.|[^\]\\])*)\]", kind.keyword());
    Regex::new(&pattern).expect("field pattern is valid")
}

/// Rewrite tagged fields of a section body for display
///
/// Returns an empty string for a whitespace-only body. Text outside the
/// matched spans is left untouched.
pub fn render_body(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    let mut rendered = body.to_string();
    for kind in FieldKind::ORDER {
        rendered = kind
            .pattern()
            .replace_all(&rendered, kind.replacement().as_str())
            .into_owned();
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_and_issue() {
        let rendered = render_body("clause: [Payment due in 30 days]\nissue: [No late-fee clause]");
        assert_eq!(
            rendered,
            "*Clause:*\n> Payment due in 30 days\n*Issue:*\n> No late-fee clause"
        );
    }

    #[test]
    fn test_suggestion() {
        let rendered = render_body("clause: [Termination at will]\nsuggestion: [Add 60-day notice]");
        assert!(rendered.contains("*Clause:*\n> Termination at will"));
        assert!(rendered.contains("*Suggestion:*\n> Add 60-day notice"));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let rendered = render_body("CLAUSE: [a]\nIssue:[b]\nSuGgEsTiOn:   [c]");
        assert_eq!(rendered, "*Clause:*\n> a\n*Issue:*\n> b\n*Suggestion:*\n> c");
    }

    #[test]
    fn test_multiline_content() {
        let rendered = render_body("clause: [Article 4.\nThe tenant shall pay.]\nafter");
        assert_eq!(rendered, "*Clause:*\n> Article 4.\nThe tenant shall pay.\nafter");
    }

    #[test]
    fn test_whitespace_between_colon_and_bracket() {
        let rendered = render_body("issue:\n  [Spans a newline]");
        assert_eq!(rendered, "*Issue:*\n> Spans a newline");
    }

    #[test]
    fn test_minimal_match_per_occurrence() {
        let rendered = render_body("clause: [one] and clause: [two]");
        assert_eq!(rendered, "*Clause:*\n> one and *Clause:*\n> two");
    }

    #[test]
    fn test_no_nesting() {
        let rendered = render_body("clause: [see [annex] 2]");
        assert_eq!(rendered, "*Clause:*\n> see [annex 2]");
    }

    #[test]
    fn test_escaped_bracket_does_not_close() {
        let rendered = render_body(r"clause: [Fee of \] 5%] end");
        assert_eq!(rendered, "*Clause:*\n> Fee of \\] 5% end");
    }

    #[test]
    fn test_unclosed_bracket_left_alone() {
        let body = "clause: [never closed";
        assert_eq!(render_body(body), body);
    }

    #[test]
    fn test_text_outside_matches_untouched() {
        let body = "Intro with **bold** and $1 costs.\nclause: [X]\n- list item";
        assert_eq!(
            render_body(body),
            "Intro with **bold** and $1 costs.\n*Clause:*\n> X\n- list item"
        );
    }

    #[test]
    fn test_keyword_without_brackets_untouched() {
        let body = "The main issue: payment terms.";
        assert_eq!(render_body(body), body);
    }

    #[test]
    fn test_idempotent() {
        let once = render_body(
            "clause: [Payment due in 30 days]\nissue: [No late-fee clause]\nsuggestion: [Add fee]",
        );
        let twice = render_body(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_content_with_earlier_keyword_rewritten_on_second_pass() {
        // Issue content exposing a clause span is only rewritten when rendered again
        let once = render_body("issue: [clause: ][y]");
        assert_eq!(once, "*Issue:*\n> clause: [y]");
        assert_eq!(render_body(&once), "*Issue:*\n> *Clause:*\n> y");
    }

    #[test]
    fn test_whitespace_only_body() {
        assert_eq!(render_body(""), "");
        assert_eq!(render_body(" \n\t \n"), "");
    }

    #[test]
    fn test_field_order() {
        assert_eq!(
            FieldKind::ORDER.map(|k| k.keyword()),
            ["clause", "suggestion", "issue"]
        );
    }
}
