//! Weight, volume and piece-count extraction, plus chargeable derivation.

use rust_decimal::Decimal;

use super::patterns::{GROSS_WEIGHT, PIECES, VOLUME_WEIGHT};
use super::FieldExtractor;
use crate::error::ExtractionError;

/// Air-freight volumetric divisor: kilograms of volumetric weight per cubic
/// meter. The same constant must be used for the division to volume and the
/// inverse multiplication in chargeable-weight derivation, or the two drift.
pub const VOLUMETRIC_DIVISOR: Decimal = Decimal::from_parts(167, 0, 0, false, 0);

/// Gross weight (kg) extractor.
pub struct GrossWeightExtractor;

impl FieldExtractor for GrossWeightExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        GROSS_WEIGHT.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Volumetric weight (kg) extractor.
pub struct VolumeWeightExtractor;

impl FieldExtractor for VolumeWeightExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        VOLUME_WEIGHT.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Piece/package count extractor.
pub struct PiecesExtractor;

impl FieldExtractor for PiecesExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PIECES.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Coerce a raw count match to an integer. Requires an unbroken digit run.
pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, ExtractionError> {
    raw.parse::<u32>().map_err(|_| ExtractionError::Parse {
        field,
        value: raw.to_string(),
    })
}

/// Convert volumetric weight (kg) to an approximate volume in cubic meters.
pub fn volume_from_weight(volumetric_kg: Decimal) -> Decimal {
    volumetric_kg / VOLUMETRIC_DIVISOR
}

/// Chargeable weight: the greater of gross weight and the volumetric
/// equivalent reconstructed from the derived volume.
pub fn chargeable_weight(gross_kg: Decimal, volume_m3: Decimal) -> Decimal {
    gross_kg.max(volume_m3 * VOLUMETRIC_DIVISOR)
}
