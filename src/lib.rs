//! Master Product - typed GS1/GDSN trade item documents
//!
//! Provides:
//! - The Master Product record tree (identity envelope, trade item, extension modules)
//! - JSON import and export that round-trip documents without loss
//! - Reading and writing of the older flat document layout
//!
//! The crate does not validate GDSN business rules. Decoding fails only when
//! a document is structurally wrong.

pub mod config;
pub mod export;
pub mod import;
pub mod models;

pub use config::{ExportConfig, ImportConfig};
pub use export::{ExportError, MasterProductExporter, encode};
pub use import::{ImportError, MasterProductImporter, decode};

// Re-export the document model
pub use models::{
    LegacyConversionError, LegacyMasterProduct, MasterProduct, MasterProductDetails,
    MasterProductHeader, MasterProductTradeItem, Measurement, PrivateUseModule,
    TemperatureMeasurement, TradeItemExtension,
};
