//! The assembled invoice record and its fixed export schema.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered export schema. Consumed by both the record's row projection and
/// the spreadsheet exporter; never duplicated elsewhere.
pub const HEADERS: [&str; 13] = [
    "Timestamp",
    "Filename",
    "Invoice_Date",
    "Currency",
    "Shipper",
    "Weight_KG",
    "Volume_M3",
    "Chargeable_KG",
    "Chargeable_CBM",
    "Pieces",
    "Subtotal",
    "Freight_Mode",
    "Freight_Rate",
];

/// Invoice currency. Only these three codes appear on the supported layout
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// Parse a 3-letter code. The token must be exactly the code, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("USD") {
            Some(Currency::Usd)
        } else if code.eq_ignore_ascii_case("CAD") {
            Some(Currency::Cad)
        } else if code.eq_ignore_ascii_case("EUR") {
            Some(Currency::Eur)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
        }
    }
}

/// Mode of transport, set when the freight amount rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreightMode {
    #[serde(rename = "Air")]
    Air,
}

impl FreightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreightMode::Air => "Air",
        }
    }
}

/// One extracted invoice.
///
/// Every key of the export schema is always present; a field whose pattern
/// found nothing is `None` and renders as a blank cell, so downstream
/// consumers can tell "not found" apart from "found and empty". The record is
/// created once per document and not mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Stamped at record creation, never parsed from the document.
    #[serde(rename = "Timestamp")]
    pub timestamp: NaiveDateTime,

    /// Canonical source identifier derived from the original filename.
    #[serde(rename = "Filename")]
    pub filename: String,

    #[serde(rename = "Invoice_Date")]
    pub invoice_date: Option<NaiveDate>,

    #[serde(rename = "Currency")]
    pub currency: Option<Currency>,

    #[serde(rename = "Shipper")]
    pub shipper: Option<String>,

    /// Gross weight in kilograms.
    #[serde(rename = "Weight_KG")]
    pub weight_kg: Option<Decimal>,

    /// Approximate volume in cubic meters, derived from volumetric weight.
    #[serde(rename = "Volume_M3")]
    pub volume_m3: Option<Decimal>,

    /// Greater of gross and volumetric-equivalent weight; present only when
    /// both inputs were found.
    #[serde(rename = "Chargeable_KG")]
    pub chargeable_kg: Option<Decimal>,

    /// Mirrors `volume_m3` whenever volumetric weight was found.
    #[serde(rename = "Chargeable_CBM")]
    pub chargeable_cbm: Option<Decimal>,

    #[serde(rename = "Pieces")]
    pub pieces: Option<u32>,

    #[serde(rename = "Subtotal")]
    pub subtotal: Option<Decimal>,

    #[serde(rename = "Freight_Mode")]
    pub freight_mode: Option<FreightMode>,

    #[serde(rename = "Freight_Rate")]
    pub freight_rate: Option<Decimal>,
}

impl InvoiceRecord {
    /// Project the record onto the export schema, in header order.
    /// Absent values become empty strings (blank cells).
    pub fn to_row(&self) -> [String; 13] {
        fn cell<T: ToString>(v: &Option<T>) -> String {
            v.as_ref().map(|v| v.to_string()).unwrap_or_default()
        }

        [
            self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.filename.clone(),
            cell(&self.invoice_date),
            self.currency.map(|c| c.as_str().to_string()).unwrap_or_default(),
            cell(&self.shipper),
            cell(&self.weight_kg),
            cell(&self.volume_m3),
            cell(&self.chargeable_kg),
            cell(&self.chargeable_cbm),
            cell(&self.pieces),
            cell(&self.subtotal),
            self.freight_mode.map(|m| m.as_str().to_string()).unwrap_or_default(),
            cell(&self.freight_rate),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_record() -> InvoiceRecord {
        InvoiceRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            filename: "DN26693".to_string(),
            invoice_date: None,
            currency: None,
            shipper: None,
            weight_kg: None,
            volume_m3: None,
            chargeable_kg: None,
            chargeable_cbm: None,
            pieces: None,
            subtotal: None,
            freight_mode: None,
            freight_rate: None,
        }
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("cad"), Some(Currency::Cad));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::Eur));
        assert_eq!(Currency::from_code("GBP"), None);
        assert_eq!(Currency::from_code("CAD.pdf"), None);
    }

    #[test]
    fn test_row_matches_schema_width() {
        let row = empty_record().to_row();
        assert_eq!(row.len(), HEADERS.len());
    }

    #[test]
    fn test_absent_fields_render_blank() {
        let row = empty_record().to_row();
        // Timestamp and Filename are always populated; everything else blank.
        assert_eq!(row[0], "2024-03-01 12:00:00");
        assert_eq!(row[1], "DN26693");
        for cell in &row[2..] {
            assert_eq!(cell, "");
        }
    }

    #[test]
    fn test_json_keys_follow_schema() {
        let value = serde_json::to_value(empty_record()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), HEADERS.len());
        for header in HEADERS {
            assert!(object.contains_key(header), "missing key {header}");
        }
        // Absent fields serialize as explicit nulls, not missing keys.
        assert!(object["Weight_KG"].is_null());
    }
}
