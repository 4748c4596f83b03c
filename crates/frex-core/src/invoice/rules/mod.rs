//! Rule-based field extractors for freight invoices.
//!
//! Extraction is layered: extractors return the raw matched substring (or
//! nothing), coercers turn raw matches into typed values. A pattern that does
//! not match is a normal outcome; a matched value that fails coercion is an
//! error that aborts the document.

pub mod amounts;
pub mod cargo;
pub mod currency;
pub mod dates;
pub mod parties;
pub mod patterns;

pub use amounts::{parse_amount, FreightAmountExtractor, SubtotalExtractor};
pub use cargo::{
    chargeable_weight, parse_count, volume_from_weight, GrossWeightExtractor, PiecesExtractor,
    VolumeWeightExtractor, VOLUMETRIC_DIVISOR,
};
pub use currency::CurrencyExtractor;
pub use dates::{parse_iso_date, DateExtractor};
pub use parties::ShipperExtractor;

/// Trait for pattern-based field extractors.
///
/// Each field is matched independently and exactly once: the first match
/// wins. Rules are order-independent and share no state.
pub trait FieldExtractor {
    /// The raw value this extractor produces.
    type Output;

    /// Extract the field from the normalized document text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
