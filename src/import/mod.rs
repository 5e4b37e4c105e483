//! Import functionality
//!
//! Decodes Master Product documents from JSON. Decoding is structural only:
//! it fails when a required field is missing, a value has the wrong type or
//! the text is not JSON. No business rules are checked.

pub mod master_product;

use serde::de::DeserializeOwned;

pub use master_product::MasterProductImporter;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Malformed document: {message}")]
    MalformedDocument {
        message: String,
        line: usize,
        column: usize,
    },
    #[error("Document of {size} bytes exceeds the limit of {max} bytes")]
    TooLarge { size: usize, max: usize },
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::MalformedDocument {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Decode any record of the document model from JSON text
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, ImportError> {
    serde_json::from_str(json).map_err(|err| {
        tracing::warn!(line = err.line(), column = err.column(), "Malformed document: {}", err);
        ImportError::from(err)
    })
}

/// Decode any record of the document model from JSON bytes
pub fn decode_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T, ImportError> {
    serde_json::from_slice(json).map_err(|err| {
        tracing::warn!(line = err.line(), column = err.column(), "Malformed document: {}", err);
        ImportError::from(err)
    })
}
