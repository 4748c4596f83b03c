//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Join per-page texts into one document string.
///
/// Pages are joined in order with newline separators; a page that yielded no
/// extractable text contributes an empty string. Pure, never fails.
pub fn normalize_pages(pages: &[Option<String>]) -> String {
    pages
        .iter()
        .map(|p| p.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// PDF text extractor backed by lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Normalized document text (all pages, newline-joined).
    pub text: String,
    /// Pages with their text, in page order.
    pub pages: Vec<PdfPage>,
}

/// Text from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text; `None` if the page yielded nothing.
    pub text: Option<String>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract text from every page and assemble the normalized document
    /// string.
    ///
    /// A page with no extractable text is recorded as absent and contributes
    /// an empty line; only a document that could not be loaded at all fails.
    /// `max_pages` caps the number of pages read (0 = unlimited).
    pub fn extract_all(&self, max_pages: usize) -> Result<PdfContent> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))?;

        let mut page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        if max_pages > 0 && (max_pages as u32) < page_count {
            debug!("Capping extraction at {} of {} pages", max_pages, page_count);
            page_count = max_pages as u32;
        }

        let mut pages = Vec::with_capacity(page_count as usize);
        for number in 1..=page_count {
            let text = self
                .extract_page_text(number)
                .ok()
                .map(|t| t.trim_end().to_string())
                .filter(|t| !t.trim().is_empty());
            pages.push(PdfPage { number, text });
        }

        let mut text = normalize_pages(
            &pages.iter().map(|p| p.text.clone()).collect::<Vec<_>>(),
        );

        // Some producers emit text streams lopdf cannot decode per page;
        // fall back to whole-document extraction before giving up.
        if text.trim().is_empty() {
            match self.extract_text() {
                Ok(full) if !full.trim().is_empty() => {
                    debug!("Per-page extraction empty, using whole-document text");
                    text = full;
                }
                Ok(_) => {}
                Err(e) => warn!("Whole-document text fallback failed: {}", e),
            }
        }

        debug!("Extracted {} chars from {} pages", text.len(), pages.len());

        Ok(PdfContent { text, pages })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_normalize_pages_joins_with_newlines() {
        let pages = vec![
            Some("page one".to_string()),
            Some("page two".to_string()),
        ];
        assert_eq!(normalize_pages(&pages), "page one\npage two");
    }

    #[test]
    fn test_normalize_pages_substitutes_empty_for_absent() {
        let pages = vec![
            Some("first".to_string()),
            None,
            Some("third".to_string()),
        ];
        assert_eq!(normalize_pages(&pages), "first\n\nthird");
    }

    #[test]
    fn test_normalize_pages_empty_input() {
        assert_eq!(normalize_pages(&[]), "");
        assert_eq!(normalize_pages(&[None, None]), "\n");
    }
}
