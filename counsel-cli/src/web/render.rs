//! HTML rendering for the review page

use counsel_core::{DisplayBlock, NotificationStatus};
use pulldown_cmark::{html, Event, Options, Parser};

const PAGE: &str = include_str!("page.html");

/// Style of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
        }
    }
}

/// Wrap content in the page layout
pub fn page(content: &str) -> String {
    PAGE.replace("{{CONTENT}}", content)
}

/// Render a status message
pub fn notice(kind: NoticeKind, message: &str) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>\n",
        kind.class(),
        escape_html(message)
    )
}

/// Render the notification status of a run
pub fn notification(status: &NotificationStatus) -> String {
    let kind = match status {
        NotificationStatus::Sent => NoticeKind::Success,
        NotificationStatus::Skipped => NoticeKind::Info,
        NotificationStatus::Failed(_) => NoticeKind::Error,
    };
    notice(kind, &status.message())
}

/// Render display blocks in order
pub fn blocks(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            DisplayBlock::Header(title) => {
                out.push_str(&format!("<h2>{}</h2>\n", escape_html(title)));
            }
            DisplayBlock::Markdown(text) => out.push_str(&markdown(text)),
            DisplayBlock::Separator => out.push_str("<hr>\n"),
        }
    }

    out
}

/// Render markdown to HTML
///
/// Raw HTML in the input is emitted as escaped text.
pub fn markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Escape text for use in HTML content and attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_field_quote() {
        let html = markdown("*Clause:*\n> Payment due in 30 days");
        assert!(html.contains("<em>Clause:</em>"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("Payment due in 30 days"));
    }

    #[test]
    fn test_markdown_neutralizes_raw_html() {
        let html = markdown("Before <script>alert(1)</script> after\n\n<div>block</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_blocks_layout() {
        let html = blocks(&[
            DisplayBlock::Header("Legal <Context>".to_string()),
            DisplayBlock::Markdown("Body".to_string()),
            DisplayBlock::Separator,
        ]);
        assert_eq!(
            html,
            "<h2>Legal &lt;Context&gt;</h2>\n<p>Body</p>\n<hr>\n"
        );
    }

    #[test]
    fn test_notification_styles() {
        assert!(notification(&NotificationStatus::Sent).contains("notice success"));
        assert!(notification(&NotificationStatus::Skipped).contains("notice info"));
        let failed = notification(&NotificationStatus::Failed("HTTP <401>".to_string()));
        assert!(failed.contains("notice error"));
        assert!(failed.contains("HTTP &lt;401&gt;"));
    }

    #[test]
    fn test_page_embeds_content_once() {
        let html = page("<p>report</p>");
        assert!(html.contains("<title>AI Contract Reviewer</title>"));
        assert!(html.contains("<p>report</p>"));
        assert!(!html.contains("{{CONTENT}}"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &#39;c&#39;");
    }
}
