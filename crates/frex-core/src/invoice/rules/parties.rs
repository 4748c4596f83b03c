//! Shipper name extraction.

use super::patterns::SHIPPER;
use super::FieldExtractor;

/// Shipper name extractor.
///
/// Captures the run of name-like characters after the shipper label, trimmed
/// of surrounding whitespace. The rule over-captures when another label shares
/// the line; see the pattern's notes.
pub struct ShipperExtractor;

impl FieldExtractor for ShipperExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        SHIPPER
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_shipper() {
        let text = "Shipper: ACME Logistics (HK) Ltd.\nConsignee: Foo";
        assert_eq!(
            ShipperExtractor.extract(text),
            Some("ACME Logistics (HK) Ltd.".to_string())
        );
    }

    #[test]
    fn test_bilingual_label() {
        let text = "Shipper / 发货人: Kerry Freight Services";
        assert_eq!(
            ShipperExtractor.extract(text),
            Some("Kerry Freight Services".to_string())
        );
    }

    #[test]
    fn test_capture_stops_at_newline() {
        let text = "Shipper: Northwind Traders\n123 Harbour Road";
        assert_eq!(
            ShipperExtractor.extract(text),
            Some("Northwind Traders".to_string())
        );
    }

    #[test]
    fn test_absent_shipper() {
        assert_eq!(ShipperExtractor.extract("Consignee: Foo"), None);
    }
}
