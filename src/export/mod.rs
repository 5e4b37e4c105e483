//! Export functionality
//!
//! Encodes Master Product documents as JSON. Absent optional fields are
//! omitted, never written as `null`.

pub mod master_product;

use serde::Serialize;
use uuid::Uuid;

pub use master_product::MasterProductExporter;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Master product {id} has no details to export")]
    MissingDetails { id: Uuid },
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

/// Encode any record of the document model as compact JSON
pub fn encode<T: Serialize>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string(value)?)
}

/// Encode any record of the document model as indented JSON
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}
