//! Master Product exporter

use tracing::debug;

use super::{ExportError, encode, encode_pretty};
use crate::config::ExportConfig;
use crate::models::{LegacyMasterProduct, MasterProduct};

/// Master Product exporter
#[derive(Debug, Clone, Default)]
pub struct MasterProductExporter {
    config: ExportConfig,
}

impl MasterProductExporter {
    /// Create an exporter writing compact JSON
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
        }
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn set_config(&mut self, config: ExportConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export a Master Product as it is, terse or full
    pub fn export(&self, product: &MasterProduct) -> Result<String, ExportError> {
        let json = self.write(product)?;
        debug!(
            bytes = json.len(),
            gtin = %product.gtin,
            terse = product.is_terse(),
            "Exported master product"
        );
        Ok(json)
    }

    /// Export a Master Product as a JSON value
    pub fn export_value(&self, product: &MasterProduct) -> Result<serde_json::Value, ExportError> {
        // Through text so the private-use module is re-read from its raw form
        let json = encode(product)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Export only the terse view
    pub fn export_terse(&self, product: &MasterProduct) -> Result<String, ExportError> {
        self.export(&product.terse())
    }

    /// Export in the flat layout. Requires details.
    pub fn export_legacy(&self, product: &MasterProduct) -> Result<String, ExportError> {
        let legacy = LegacyMasterProduct::from_master_product(product)
            .ok_or(ExportError::MissingDetails { id: product.id })?;
        let json = self.write(&legacy)?;
        debug!(
            bytes = json.len(),
            gtin = %legacy.gtin,
            "Exported flat master product"
        );
        Ok(json)
    }

    fn write<T: serde::Serialize>(&self, value: &T) -> Result<String, ExportError> {
        if self.config.pretty {
            encode_pretty(value)
        } else {
            encode(value)
        }
    }
}
