//! Master Product importer

use tracing::{debug, warn};

use super::{ImportError, decode, decode_slice};
use crate::config::ImportConfig;
use crate::models::{LegacyMasterProduct, MasterProduct};

/// Master Product importer
///
/// Holds only configuration, so one importer can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct MasterProductImporter {
    config: ImportConfig,
}

impl MasterProductImporter {
    /// Create an importer without a size limit
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn set_config(&mut self, config: ImportConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a Master Product, terse or full
    ///
    /// # Example
    ///
    /// ```rust
    /// use master_product::import::MasterProductImporter;
    ///
    /// let json = r#"{
    ///     "id": "5d1b4c6e-6a0f-4e58-9d55-0b0f7f2a9d10",
    ///     "product_id": "0e3f8a52-1c55-4d87-9a7b-2f6a1b2c3d4e",
    ///     "organization_id": "9b2d8f1e-2f3a-4c5b-8d6e-7f8a9b0c1d2e",
    ///     "created_at": "2024-01-01T00:00:00Z",
    ///     "ext_id": "A1",
    ///     "gtin": "00000000000017",
    ///     "name": "Widget"
    /// }"#;
    ///
    /// let product = MasterProductImporter::new().import(json).unwrap();
    /// assert!(product.is_terse());
    /// assert_eq!(product.name, "Widget");
    /// ```
    pub fn import(&self, json: &str) -> Result<MasterProduct, ImportError> {
        self.check_size(json.len())?;
        let product: MasterProduct = decode(json)?;
        log_imported(&product, json.len());
        Ok(product)
    }

    /// Import a Master Product from UTF-8 bytes
    pub fn import_slice(&self, json: &[u8]) -> Result<MasterProduct, ImportError> {
        self.check_size(json.len())?;
        let product: MasterProduct = decode_slice(json)?;
        log_imported(&product, json.len());
        Ok(product)
    }

    /// Import a Master Product from an already parsed JSON value
    pub fn import_value(&self, value: serde_json::Value) -> Result<MasterProduct, ImportError> {
        // Re-read through text so the private-use module is captured raw
        let json = serde_json::to_string(&value)?;
        self.import(&json)
    }

    /// Import only the terse view, discarding any details
    pub fn import_terse(&self, json: &str) -> Result<MasterProduct, ImportError> {
        self.import(json).map(MasterProduct::into_terse)
    }

    /// Import a document in the flat layout
    pub fn import_legacy(&self, json: &str) -> Result<LegacyMasterProduct, ImportError> {
        self.check_size(json.len())?;
        let product: LegacyMasterProduct = decode(json)?;
        debug!(
            bytes = json.len(),
            gtin = %product.gtin,
            "Imported flat master product"
        );
        Ok(product)
    }

    fn check_size(&self, size: usize) -> Result<(), ImportError> {
        if self.config.accepts_size(size) {
            return Ok(());
        }
        let max = self.config.max_document_bytes.unwrap_or_default();
        warn!(size, max, "Document exceeds the configured size limit");
        Err(ImportError::TooLarge { size, max })
    }
}

fn log_imported(product: &MasterProduct, bytes: usize) {
    debug!(
        bytes,
        gtin = %product.gtin,
        terse = product.is_terse(),
        modules = product.trade_item().map_or(0, |t| t.extensions().module_count()),
        "Imported master product"
    );
}
