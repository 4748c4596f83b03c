//! Source-identifier derivation from original filenames.
//!
//! Invoices arrive as uploads whose filenames embed the invoice code. The
//! canonical identifier is used as the record's display key and in failure
//! reports. Two incompatible naming schemes exist, one per template profile.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::Currency;

lazy_static! {
    // DN-prefixed code, possibly with internal whitespace: "DN26693",
    // "DN 26693A". Matched against the uppercased filename.
    static ref DN_CODE: Regex = Regex::new(r"DN\s*\d+[A-Z]?").unwrap();

    // Bare 4-6 digit code with an optional trailing letter.
    static ref NUMERIC_CODE: Regex = Regex::new(r"\b\d{4,6}[A-Z]?\b").unwrap();
}

/// Which filename scheme the deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// `DN`-prefixed alphanumeric codes (e.g. "DN26693A").
    DnPrefix,
    /// Bare 4-6 digit numeric codes with optional trailing letter.
    Numeric,
}

/// Derive the canonical invoice identifier from a filename.
///
/// Falls back to the raw filename when no code is found, so every document
/// always has a reportable identifier.
pub fn invoice_id(filename: &str, policy: IdentifierPolicy) -> String {
    let upper = filename.to_uppercase();

    let pattern = match policy {
        IdentifierPolicy::DnPrefix => &*DN_CODE,
        IdentifierPolicy::Numeric => &*NUMERIC_CODE,
    };

    match pattern.find(&upper) {
        Some(m) => m.as_str().split_whitespace().collect(),
        None => filename.to_string(),
    }
}

/// Scan a filename/identifier for a space-delimited currency token.
///
/// Only a whitespace-separated token that is exactly a known 3-letter code
/// matches; "Invoice_CAD.pdf" does not qualify. This is the alternate currency
/// policy and replaces reading the code from document text.
pub fn currency_from_name(name: &str) -> Option<Currency> {
    name.split_whitespace().find_map(Currency::from_code)
}
