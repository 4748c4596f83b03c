//! Invoice date extraction and coercion.

use chrono::NaiveDate;

use super::patterns::INVOICE_DATE;
use super::FieldExtractor;
use crate::error::ExtractionError;

/// Invoice date extractor. The layout prints dates in ISO form only.
pub struct DateExtractor;

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        INVOICE_DATE.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Coerce a raw `YYYY-MM-DD` match to a calendar date.
///
/// The pattern guarantees the shape but not calendar validity; "2024-13-45"
/// is a coercion failure, not an absence.
pub fn parse_iso_date(field: &'static str, raw: &str) -> Result<NaiveDate, ExtractionError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ExtractionError::Parse {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_labeled_date() {
        let text = "INVOICE\nDate : 2024-01-15\nShipper: ACME";
        assert_eq!(
            DateExtractor.extract(text),
            Some("2024-01-15".to_string())
        );
    }

    #[test]
    fn test_extract_first_match_only() {
        let text = "Date: 2024-01-15\nDue Date: 2024-02-15";
        assert_eq!(
            DateExtractor.extract(text),
            Some("2024-01-15".to_string())
        );
    }

    #[test]
    fn test_no_label_no_match() {
        assert_eq!(DateExtractor.extract("issued 2024-01-15"), None);
        assert_eq!(DateExtractor.extract(""), None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("Invoice_Date", "2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_calendar_invalid_date_is_error() {
        let err = parse_iso_date("Invoice_Date", "2024-13-45").unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Parse { field: "Invoice_Date", .. }
        ));
    }
}
