//! Charge amount extraction and decimal coercion.
//!
//! The freight amount and subtotal are printed differently by the two layout
//! variants, so both extractors are parameterized by the template profile.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{
    AIR_FREIGHT_INLINE, AIR_FREIGHT_LABEL, LINE_AMOUNT, SUBTOTAL_LABELED, SUBTOTAL_USD_TOTAL,
};
use super::FieldExtractor;
use crate::error::ExtractionError;
use crate::models::config::TemplateProfile;

/// Freight amount extractor.
pub struct FreightAmountExtractor {
    profile: TemplateProfile,
}

impl FreightAmountExtractor {
    pub fn new(profile: TemplateProfile) -> Self {
        Self { profile }
    }
}

impl FieldExtractor for FreightAmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        match self.profile {
            // Template A prints the rate as the last amount on the charge
            // line, after intermediate quantity/rate columns.
            TemplateProfile::TemplateA => text
                .lines()
                .find(|line| AIR_FREIGHT_LABEL.is_match(line))
                .and_then(|line| LINE_AMOUNT.find_iter(line).last())
                .map(|m| m.as_str().to_string()),
            TemplateProfile::TemplateB => AIR_FREIGHT_INLINE
                .captures(text)
                .map(|caps| caps[1].to_string()),
        }
    }
}

/// Subtotal / total-charges extractor.
pub struct SubtotalExtractor {
    profile: TemplateProfile,
}

impl SubtotalExtractor {
    pub fn new(profile: TemplateProfile) -> Self {
        Self { profile }
    }
}

impl FieldExtractor for SubtotalExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let pattern = match self.profile {
            TemplateProfile::TemplateA => &*SUBTOTAL_LABELED,
            TemplateProfile::TemplateB => &*SUBTOTAL_USD_TOTAL,
        };
        pattern.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Coerce a raw amount match to a decimal, stripping thousands-separator
/// commas first. Failure aborts the document; a wrong number must never be
/// silently substituted.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, ExtractionError> {
    let cleaned = raw.replace(',', "");
    Decimal::from_str(cleaned.trim()).map_err(|_| ExtractionError::Parse {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_freight_amount_line_scan() {
        let text = "DESCRIPTION OF CHARGES\nAIR FREIGHT 100.5 KG 3.20 321.60\nFUEL SURCHARGE 45.00";
        let extractor = FreightAmountExtractor::new(TemplateProfile::TemplateA);
        assert_eq!(extractor.extract(text), Some("321.60".to_string()));
    }

    #[test]
    fn test_freight_amount_inline_before_currency() {
        let text = "AIR FREIGHT 1,234.56 USD";
        let extractor = FreightAmountExtractor::new(TemplateProfile::TemplateB);
        assert_eq!(extractor.extract(text), Some("1,234.56".to_string()));

        // Template B ignores the line layout template A relies on.
        let a_layout = "AIR FREIGHT 100.5 KG 3.20 321.60";
        assert_eq!(extractor.extract(a_layout), None);
    }

    #[test]
    fn test_freight_amount_absent() {
        let extractor = FreightAmountExtractor::new(TemplateProfile::TemplateA);
        assert_eq!(extractor.extract("OCEAN FREIGHT 200.00"), None);
    }

    #[test]
    fn test_subtotal_near_total_label() {
        let extractor = SubtotalExtractor::new(TemplateProfile::TemplateA);
        assert_eq!(
            extractor.extract("Total Charges: 1,521.35 USD"),
            Some("1,521.35".to_string())
        );
        assert_eq!(
            extractor.extract("Total 980.00"),
            Some("980.00".to_string())
        );
        // "Subtotal" must not satisfy the Total label.
        assert_eq!(extractor.extract("Subtotal 980.00"), None);
    }

    #[test]
    fn test_subtotal_before_usd_total() {
        let extractor = SubtotalExtractor::new(TemplateProfile::TemplateB);
        assert_eq!(
            extractor.extract("1,521.35 USD Total"),
            Some("1,521.35".to_string())
        );
        assert_eq!(extractor.extract("Total Charges: 1,521.35"), None);
    }

    #[test]
    fn test_parse_amount_strips_commas() {
        assert_eq!(
            parse_amount("Subtotal", "1,234.56").unwrap(),
            Decimal::from_str("1234.56").unwrap()
        );
        assert_eq!(
            parse_amount("Subtotal", "980").unwrap(),
            Decimal::from_str("980").unwrap()
        );
    }

    #[test]
    fn test_parse_amount_failure_is_error() {
        let err = parse_amount("Freight_Rate", "12..5").unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Parse { field: "Freight_Rate", .. }
        ));
    }
}
