//! Core library for freight invoice extraction.
//!
//! This crate provides:
//! - PDF text extraction and page normalization
//! - rule-based field extraction for one freight-invoice layout family
//! - typed value coercion and chargeable weight/volume derivation
//! - assembly of a fixed-schema record for tabular export

pub mod error;
pub mod ident;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{ExtractionError, FrexError, PdfError, Result};
pub use ident::{currency_from_name, invoice_id, IdentifierPolicy};
pub use invoice::{extract_record, FreightInvoiceParser, InvoiceParser};
pub use models::config::{CurrencySource, FrexConfig, TemplateProfile};
pub use models::record::{Currency, FreightMode, InvoiceRecord, HEADERS};
pub use pdf::{normalize_pages, PdfContent, PdfExtractor, PdfPage, PdfProcessor};
