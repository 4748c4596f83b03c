//! Rule-driven parser: raw matches, typed coercion, derived fields, and
//! assembly of the fixed-schema record.

use chrono::Local;
use tracing::debug;

use crate::ident;
use crate::models::config::{CurrencySource, TemplateProfile};
use crate::models::record::{Currency, FreightMode, InvoiceRecord};

use super::rules::{
    chargeable_weight, parse_amount, parse_count, parse_iso_date, volume_from_weight,
    CurrencyExtractor, DateExtractor, FieldExtractor, FreightAmountExtractor, GrossWeightExtractor,
    PiecesExtractor, ShipperExtractor, SubtotalExtractor, VolumeWeightExtractor,
};
use super::Result;

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse one document's normalized text into a record.
    ///
    /// `source_id` is the canonical invoice identifier; it becomes the
    /// record's display key and, under the identifier-based currency policy,
    /// the currency source.
    fn parse(&self, text: &str, source_id: &str) -> Result<InvoiceRecord>;
}

/// Parser for the supported freight-invoice layout family.
///
/// Extraction is a pure function of the document text (plus the source
/// identifier); nothing is shared between documents, so callers are free to
/// run one parser over a whole batch.
pub struct FreightInvoiceParser {
    profile: TemplateProfile,
}

impl FreightInvoiceParser {
    /// Create a parser bound to one template profile.
    pub fn new(profile: TemplateProfile) -> Self {
        Self { profile }
    }

    fn extract_currency(&self, text: &str, source_id: &str) -> Result<Option<Currency>> {
        match self.profile.currency_source() {
            CurrencySource::DocumentText => CurrencyExtractor
                .extract(text)
                .map(|raw| {
                    Currency::from_code(&raw).ok_or(crate::error::ExtractionError::Parse {
                        field: "Currency",
                        value: raw,
                    })
                })
                .transpose(),
            CurrencySource::SourceIdentifier => Ok(ident::currency_from_name(source_id)),
        }
    }
}

impl Default for FreightInvoiceParser {
    fn default() -> Self {
        Self::new(TemplateProfile::default())
    }
}

impl InvoiceParser for FreightInvoiceParser {
    fn parse(&self, text: &str, source_id: &str) -> Result<InvoiceRecord> {
        debug!(
            "Parsing invoice {} from {} characters of text ({})",
            source_id,
            text.len(),
            self.profile.as_str()
        );

        let invoice_date = DateExtractor
            .extract(text)
            .map(|raw| parse_iso_date("Invoice_Date", &raw))
            .transpose()?;

        let currency = self.extract_currency(text, source_id)?;

        let shipper = ShipperExtractor.extract(text);

        let pieces = PiecesExtractor
            .extract(text)
            .map(|raw| parse_count("Pieces", &raw))
            .transpose()?;

        let weight_kg = GrossWeightExtractor
            .extract(text)
            .map(|raw| parse_amount("Weight_KG", &raw))
            .transpose()?;

        let volume_m3 = VolumeWeightExtractor
            .extract(text)
            .map(|raw| parse_amount("Volume_M3", &raw))
            .transpose()?
            .map(volume_from_weight);

        // Chargeable weight needs both figures; the derived volume is carried
        // through on its own whenever volumetric weight was found.
        let chargeable_kg = match (weight_kg, volume_m3) {
            (Some(gross), Some(volume)) => Some(chargeable_weight(gross, volume)),
            _ => None,
        };
        let chargeable_cbm = volume_m3;

        let freight_rate = FreightAmountExtractor::new(self.profile)
            .extract(text)
            .map(|raw| parse_amount("Freight_Rate", &raw))
            .transpose()?;
        let freight_mode = freight_rate.is_some().then_some(FreightMode::Air);

        let subtotal = SubtotalExtractor::new(self.profile)
            .extract(text)
            .map(|raw| parse_amount("Subtotal", &raw))
            .transpose()?;

        Ok(InvoiceRecord {
            timestamp: Local::now().naive_local(),
            filename: source_id.to_string(),
            invoice_date,
            currency,
            shipper,
            weight_kg,
            volume_m3,
            chargeable_kg,
            chargeable_cbm,
            pieces,
            subtotal,
            freight_mode,
            freight_rate,
        })
    }
}
