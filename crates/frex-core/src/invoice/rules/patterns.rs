//! Common regex patterns for freight invoice extraction.
//!
//! One pattern per field; all rules are independent and only the first match
//! is ever used. Patterns are case-insensitive except where a rule is purely
//! numeric.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice date: a date label, a bounded non-greedy gap of non-digits
    // (words, punctuation, newlines), then an ISO date.
    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"(?i)\bDate\b\D{0,40}?(\d{4}-\d{2}-\d{2})"
    ).unwrap();

    // Currency code embedded in document text (template A only).
    pub static ref CURRENCY_CODE: Regex = Regex::new(
        r"(?i)\b(USD|CAD|EUR)\b"
    ).unwrap();

    // Shipper name after a (possibly bilingual) shipper label. The capture is
    // a greedy run of name-like characters; it is known to over-capture when
    // another label shares the line and to under-capture at punctuation
    // outside the class. That is a permanent limitation of this layout
    // family's rule, not a defect to patch per-document.
    pub static ref SHIPPER: Regex = Regex::new(
        r"(?i)Shipper(?:\s*/\s*[^\s:：]+)?\s*[:：]\s*([\w .,&'()\-]+)"
    ).unwrap();

    // Piece count: integer immediately preceding the PACKAGE token.
    pub static ref PIECES: Regex = Regex::new(
        r"(?i)\b(\d+)\s*PACKAGE"
    ).unwrap();

    // Weights: decimal before a literal KG, after the respective label.
    pub static ref GROSS_WEIGHT: Regex = Regex::new(
        r"(?i)Gross\s+Weight\s*:?\s*(\d[\d,]*(?:\.\d+)?)\s*KG"
    ).unwrap();

    pub static ref VOLUME_WEIGHT: Regex = Regex::new(
        r"(?i)Volume\s+Weight\s*:?\s*(\d[\d,]*(?:\.\d+)?)\s*KG"
    ).unwrap();

    // Freight amount, template A: marker for the charge line; the amount is
    // the last two-fraction-digit decimal on that line.
    pub static ref AIR_FREIGHT_LABEL: Regex = Regex::new(
        r"(?i)AIR\s+FREIGHT"
    ).unwrap();

    // Freight amount, template B: decimal immediately after the label and
    // before a currency token.
    pub static ref AIR_FREIGHT_INLINE: Regex = Regex::new(
        r"(?i)AIR\s+FREIGHT\s*:?\s*(\d[\d,]*(?:\.\d+)?)\s*(?:USD|CAD|EUR)\b"
    ).unwrap();

    // Subtotal, template A: two-fraction-digit decimal near a Total label,
    // optionally followed by a currency code.
    pub static ref SUBTOTAL_LABELED: Regex = Regex::new(
        r"(?i)\bTotal(?:\s+Charges)?[^\d\n]{0,20}?(\d[\d,]*\.\d{2})\b(?:\s*(?:USD|CAD|EUR)\b)?"
    ).unwrap();

    // Subtotal, template B: decimal immediately preceding "USD Total".
    pub static ref SUBTOTAL_USD_TOTAL: Regex = Regex::new(
        r"(?i)(\d[\d,]*(?:\.\d+)?)\s*USD\s+Total\b"
    ).unwrap();

    // Monetary amount with exactly two fraction digits; thousands separators
    // allowed. Strictly numeric, so no case flag.
    pub static ref LINE_AMOUNT: Regex = Regex::new(
        r"\d[\d,]*\.\d{2}\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_date_allows_intervening_words() {
        let caps = INVOICE_DATE
            .captures("Invoice Date of issue : 2024-03-15")
            .unwrap();
        assert_eq!(&caps[1], "2024-03-15");
    }

    #[test]
    fn test_invoice_date_rejects_other_forms() {
        assert!(INVOICE_DATE.captures("Date: 15/03/2024").is_none());
        assert!(INVOICE_DATE.captures("no label 2024-03-15").is_none());
    }

    #[test]
    fn test_gross_weight_with_thousands_separator() {
        let caps = GROSS_WEIGHT.captures("Gross Weight: 1,205.5 KG").unwrap();
        assert_eq!(&caps[1], "1,205.5");
    }

    #[test]
    fn test_line_amount_requires_two_fraction_digits() {
        assert!(LINE_AMOUNT.is_match("1,234.56"));
        assert!(!LINE_AMOUNT.is_match("1234"));
        assert!(!LINE_AMOUNT.is_match("1.234"));
    }
}
