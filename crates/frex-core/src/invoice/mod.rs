//! Invoice field extraction module.

mod parser;
pub mod rules;

pub use parser::{FreightInvoiceParser, InvoiceParser};

use tracing::warn;

use crate::error::ExtractionError;
use crate::models::config::FrexConfig;
use crate::models::record::InvoiceRecord;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Run the whole per-document pipeline: load the PDF, normalize its page
/// texts, and parse one record.
///
/// All-or-nothing per document: a decode or coercion failure yields an error
/// and no record, which the caller reports against `source_id` while the rest
/// of the batch continues.
pub fn extract_record(
    data: &[u8],
    source_id: &str,
    config: &FrexConfig,
) -> crate::Result<InvoiceRecord> {
    let mut pdf = PdfExtractor::new();
    pdf.load(data)?;

    let content = pdf.extract_all(config.pdf.max_pages)?;
    if content.text.trim().len() < config.pdf.min_text_length {
        warn!(
            "Document {} yielded only {} characters of text",
            source_id,
            content.text.trim().len()
        );
    }

    let parser = FreightInvoiceParser::new(config.template);
    let record = parser.parse(&content.text, source_id)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrexError;

    #[test]
    fn test_undecodable_bytes_yield_failure_not_record() {
        let config = FrexConfig::default();
        let err = extract_record(b"not a pdf", "DN26693", &config).unwrap_err();
        assert!(matches!(err, FrexError::Pdf(_)));
    }
}
