//! Media module

use serde::{Deserialize, Serialize};

use crate::models::common::{MLString, PartyInRole};

/// Media files associated with the product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DgMediaModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<DgMedia>>,
}

impl DgMediaModule {
    /// Media of the given type code, ordered by `mediaSequence`.
    ///
    /// Entries without a sequence sort last, keeping document order among
    /// themselves.
    pub fn media_of_type(&self, type_code: &str) -> Vec<&DgMedia> {
        let mut media: Vec<&DgMedia> = self
            .media
            .iter()
            .flatten()
            .filter(|m| m.media_type_code == type_code)
            .collect();
        media.sort_by_key(|m| (m.media_sequence.is_none(), m.media_sequence));
        media
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DgMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_sequence: Option<i64>,
    #[serde(rename = "mediaLanguageCode", skip_serializing_if = "Option::is_none")]
    pub media_language_codes: Option<Vec<String>>,
    #[serde(rename = "mediaName", skip_serializing_if = "Option::is_none")]
    pub media_names: Option<Vec<MLString>>,
    pub media_storage_key: String,
    pub media_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_dimension_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_dimension_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file_name: Option<String>,
    pub media_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type_variant_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ready_for_publishing: Option<bool>,
    #[serde(rename = "mediaStateDescription", skip_serializing_if = "Option::is_none")]
    pub media_state_descriptions: Option<Vec<MLString>>,
    /// Party providing the media, identified by GLN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_provider: Option<PartyInRole>,
}

impl DgMedia {
    pub fn new(
        storage_key: impl Into<String>,
        mime_type: impl Into<String>,
        type_code: impl Into<String>,
    ) -> Self {
        Self {
            media_sequence: None,
            media_language_codes: None,
            media_names: None,
            media_storage_key: storage_key.into(),
            media_mime_type: mime_type.into(),
            media_dimension_width: None,
            media_dimension_height: None,
            media_file_name: None,
            media_type_code: type_code.into(),
            media_type_variant_code: None,
            is_ready_for_publishing: None,
            media_state_descriptions: None,
            media_provider: None,
        }
    }

    pub fn with_sequence(mut self, sequence: i64) -> Self {
        self.media_sequence = Some(sequence);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_of_type_orders_by_sequence() {
        let module = DgMediaModule {
            media: Some(vec![
                DgMedia::new("k-3", "image/png", "PRODUCT_IMAGE"),
                DgMedia::new("k-2", "image/png", "PRODUCT_IMAGE").with_sequence(2),
                DgMedia::new("k-doc", "application/pdf", "SAFETY_DATA_SHEET").with_sequence(1),
                DgMedia::new("k-1", "image/png", "PRODUCT_IMAGE").with_sequence(1),
            ]),
        };
        let keys: Vec<&str> = module
            .media_of_type("PRODUCT_IMAGE")
            .iter()
            .map(|m| m.media_storage_key.as_str())
            .collect();
        assert_eq!(keys, vec!["k-1", "k-2", "k-3"]);
    }

    #[test]
    fn test_required_media_fields() {
        let missing_mime = r#"{"mediaStorageKey":"k","mediaTypeCode":"PRODUCT_IMAGE"}"#;
        assert!(serde_json::from_str::<DgMedia>(missing_mime).is_err());

        let minimal = r#"{"mediaStorageKey":"k","mediaMimeType":"image/jpeg","mediaTypeCode":"PRODUCT_IMAGE"}"#;
        let media: DgMedia = serde_json::from_str(minimal).unwrap();
        assert_eq!(serde_json::to_string(&media).unwrap(), minimal);
    }
}
