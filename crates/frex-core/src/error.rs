//! Error types for the frex-core library.

use thiserror::Error;

/// Main error type for the frex library.
#[derive(Error, Debug)]
pub enum FrexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
///
/// Any of these aborts the document: no record is produced and the failure is
/// surfaced to the caller together with the source identifier.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to invoice field extraction.
///
/// A field whose pattern simply does not match is NOT an error; it is
/// recorded as absent. This enum covers the case where a pattern matched but
/// the captured text cannot be converted to its typed form, which aborts the
/// whole document rather than emitting a wrong value.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Failed to coerce a matched value to its typed form.
    #[error("failed to parse {field}: {value}")]
    Parse {
        field: &'static str,
        value: String,
    },
}

/// Result type for the frex library.
pub type Result<T> = std::result::Result<T, FrexError>;
