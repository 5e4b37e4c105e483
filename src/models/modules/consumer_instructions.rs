//! Consumer instructions module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

/// Instructions on how the consumer is to use or store a trade item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerInstructionsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_instructions: Option<ConsumerInstructions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerInstructions {
    /// Storage instructions as held on the label, e.g. a storage temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_storage_instructions: Option<Vec<MLString>>,
    /// Usage instructions, excluding storage, food preparation and dosage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_usage_instructions: Option<Vec<MLString>>,
}
