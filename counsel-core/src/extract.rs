//! Contract text extraction from PDF bytes

use tracing::{debug, info};

use crate::{Error, Result};

/// Extract the text of every page of a PDF
///
/// Each page that yields text contributes that text followed by a newline.
/// Pages without text contribute nothing. A PDF without any text yields an
/// empty string.
pub fn extract_text(pdf: &[u8]) -> Result<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf)
        .map_err(|e| Error::Extraction(e.to_string()))?;

    let page_count = pages.len();
    let text = join_pages(pages);

    info!(pages = page_count, chars = text.len(), "Extracted contract text");
    Ok(text)
}

/// Concatenate page texts, skipping pages without text
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();

    for (index, page) in pages.into_iter().enumerate() {
        let page = page.as_ref();
        if page.is_empty() {
            debug!(page = index + 1, "Skipping page without text");
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages() {
        let text = join_pages(["Article 1", "Article 2"]);
        assert_eq!(text, "Article 1\nArticle 2\n");
    }

    #[test]
    fn test_empty_pages_contribute_nothing() {
        let text = join_pages(["Page one", "", "Page three"]);
        assert_eq!(text, "Page one\nPage three\n");
    }

    #[test]
    fn test_no_text_is_empty_string() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
        assert_eq!(join_pages(["", ""]), "");
    }

    #[test]
    fn test_invalid_pdf_is_extraction_error() {
        let err = extract_text(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
