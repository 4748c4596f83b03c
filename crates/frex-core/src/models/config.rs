//! Configuration for the extraction pipeline.
//!
//! Two incompatible layout variants of the supported invoice family exist in
//! the field. Each is captured as a named template profile that binds a full
//! rule set; a deployment selects exactly one profile and never mixes them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ident::IdentifierPolicy;

/// Main configuration for the frex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrexConfig {
    /// Which template profile the deployment uses.
    pub template: TemplateProfile,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

impl Default for FrexConfig {
    fn default() -> Self {
        Self {
            template: TemplateProfile::default(),
            pdf: PdfConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Mutually exclusive layout profiles. Selected once per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateProfile {
    /// Original layout: currency code printed in the document body, DN-coded
    /// filenames, freight amount read off the "AIR FREIGHT" line, subtotal
    /// next to a "Total" label.
    #[default]
    TemplateA,

    /// Alternate layout: currency carried only in the filename, bare numeric
    /// invoice codes, freight amount inline before a currency token, subtotal
    /// before a "USD Total" phrase.
    TemplateB,
}

/// Where the currency field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySource {
    /// A 3-letter code embedded in the document text.
    DocumentText,
    /// A space-delimited token in the source identifier; document text is
    /// never consulted.
    SourceIdentifier,
}

impl TemplateProfile {
    pub fn currency_source(self) -> CurrencySource {
        match self {
            TemplateProfile::TemplateA => CurrencySource::DocumentText,
            TemplateProfile::TemplateB => CurrencySource::SourceIdentifier,
        }
    }

    pub fn identifier_policy(self) -> IdentifierPolicy {
        match self {
            TemplateProfile::TemplateA => IdentifierPolicy::DnPrefix,
            TemplateProfile::TemplateB => IdentifierPolicy::Numeric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateProfile::TemplateA => "template-a",
            TemplateProfile::TemplateB => "template-b",
        }
    }
}

impl FromStr for TemplateProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "template-a" | "a" => Ok(TemplateProfile::TemplateA),
            "template-b" | "b" => Ok(TemplateProfile::TemplateB),
            other => Err(format!(
                "unknown template profile '{other}' (expected template-a or template-b)"
            )),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum text length below which a document is flagged as suspiciously
    /// empty. Extraction still runs; this only drives a warning.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            min_text_length: 50,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name of the batch summary spreadsheet.
    pub summary_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            summary_name: "Invoice_Summary.csv".to_string(),
        }
    }
}

impl FrexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_round_trips_through_serde() {
        let json = serde_json::to_string(&TemplateProfile::TemplateB).unwrap();
        assert_eq!(json, "\"template-b\"");

        let back: TemplateProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TemplateProfile::TemplateB);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(
            "template-a".parse::<TemplateProfile>().unwrap(),
            TemplateProfile::TemplateA
        );
        assert_eq!(
            "B".parse::<TemplateProfile>().unwrap(),
            TemplateProfile::TemplateB
        );
        assert!("template-c".parse::<TemplateProfile>().is_err());
    }

    #[test]
    fn test_profiles_bind_disjoint_policies() {
        assert_eq!(
            TemplateProfile::TemplateA.currency_source(),
            CurrencySource::DocumentText
        );
        assert_eq!(
            TemplateProfile::TemplateB.currency_source(),
            CurrencySource::SourceIdentifier
        );
        assert_eq!(
            TemplateProfile::TemplateA.identifier_policy(),
            IdentifierPolicy::DnPrefix
        );
        assert_eq!(
            TemplateProfile::TemplateB.identifier_policy(),
            IdentifierPolicy::Numeric
        );
    }

    #[test]
    fn test_default_config() {
        let config = FrexConfig::default();
        assert_eq!(config.template, TemplateProfile::TemplateA);
        assert_eq!(config.export.summary_name, "Invoice_Summary.csv");
    }
}
