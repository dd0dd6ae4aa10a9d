//! PDF text extraction.
//!
//! Page boundaries come from the form-feed characters `pdf-extract` emits
//! between pages. Pages that render to pure whitespace (scanned images,
//! separator pages) are dropped before flattening.

use schreiber_core::text::truncate_chars;

use crate::ExtractError;

/// Hard cap on normalized PDF text, counted in characters.
pub const PDF_TEXT_CAP: usize = 100_000;

/// Extract per-page text from raw PDF bytes.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let pages: Vec<String> = text
        .split('\x0C')
        .map(|page| page.trim().to_string())
        .filter(|page| !page.is_empty())
        .collect();

    Ok(pages)
}

/// Join pages into one bounded document string.
pub fn flatten_pages(pages: &[String]) -> String {
    let joined = pages.join("\n\n");
    truncate_chars(&joined, PDF_TEXT_CAP).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_page_order() {
        let pages = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        assert_eq!(flatten_pages(&pages), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn flatten_of_no_pages_is_empty() {
        assert_eq!(flatten_pages(&[]), "");
    }

    #[test]
    fn flatten_caps_total_length() {
        let pages = vec!["x".repeat(60_000), "y".repeat(60_000)];
        let text = flatten_pages(&pages);
        assert_eq!(text.chars().count(), PDF_TEXT_CAP);
        assert!(text.starts_with('x'));
    }

    #[test]
    fn flatten_is_deterministic() {
        let pages = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(flatten_pages(&pages), flatten_pages(&pages));
    }

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = extract_pages(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
