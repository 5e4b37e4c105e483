//! Packaging marking module

use serde::{Deserialize, Serialize};

/// Markings on the packaging, e.g. dates and environment labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackagingMarkingModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_marking: Option<PackagingMarking>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackagingMarking {
    /// Recognition, endorsement or certification marks of label issuing
    /// agencies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_marked_label_accreditation_code: Option<Vec<String>>,
}
