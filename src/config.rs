//! Import and export configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`MasterProductImporter`](crate::import::MasterProductImporter)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// Reject documents larger than this many bytes; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_document_bytes: Option<usize>,
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_document_bytes(mut self, max: usize) -> Self {
        self.max_document_bytes = Some(max);
        self
    }

    /// Whether a document of `size` bytes is within the configured limit
    pub fn accepts_size(&self, size: usize) -> bool {
        self.max_document_bytes.is_none_or(|max| size <= max)
    }
}

/// Configuration for [`MasterProductExporter`](crate::export::MasterProductExporter)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Indent the output
    #[serde(default)]
    pub pretty: bool,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import_config_is_unlimited() {
        let config = ImportConfig::default();
        assert!(config.accepts_size(usize::MAX));
    }

    #[test]
    fn test_size_limit() {
        let config = ImportConfig::new().with_max_document_bytes(10);
        assert!(config.accepts_size(10));
        assert!(!config.accepts_size(11));
    }

    #[test]
    fn test_config_from_json() {
        let import: ImportConfig = serde_json::from_str(r#"{"maxDocumentBytes":1048576}"#).unwrap();
        assert_eq!(import.max_document_bytes, Some(1_048_576));

        let export: ExportConfig = serde_json::from_str("{}").unwrap();
        assert!(!export.pretty);
        assert_eq!(
            serde_json::to_string(&ExportConfig::new().with_pretty(true)).unwrap(),
            r#"{"pretty":true}"#
        );
    }
}
