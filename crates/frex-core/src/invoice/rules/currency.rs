//! Currency code extraction from document text.
//!
//! This is the template A policy. Template B reads the currency from the
//! source identifier instead (see [`crate::ident::currency_from_name`]); the
//! two policies are mutually exclusive and the parser runs exactly one.

use super::patterns::CURRENCY_CODE;
use super::FieldExtractor;

/// Document-text currency extractor.
pub struct CurrencyExtractor;

impl FieldExtractor for CurrencyExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        CURRENCY_CODE
            .captures(text)
            .map(|caps| caps[1].to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_currency_code() {
        assert_eq!(
            CurrencyExtractor.extract("Amount due: 1,521.35 USD"),
            Some("USD".to_string())
        );
        assert_eq!(
            CurrencyExtractor.extract("payable in cad only"),
            Some("CAD".to_string())
        );
    }

    #[test]
    fn test_code_must_be_word_delimited() {
        assert_eq!(CurrencyExtractor.extract("USDX 100"), None);
        assert_eq!(CurrencyExtractor.extract("no code here"), None);
    }
}
