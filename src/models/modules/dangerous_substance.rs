//! Dangerous substance information module

use serde::{Deserialize, Serialize};

use crate::models::common::ExternalCodeValue;

/// Substances that can harm people, other organisms, property or the
/// environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DangerousSubstanceInformationModule {
    #[serde(
        rename = "dangerousSubstanceInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub dangerous_substance_informations: Option<Vec<DangerousSubstanceInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DangerousSubstanceInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_substance_properties: Option<Vec<DangerousSubstanceProperty>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DangerousSubstanceProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_substance_name: Option<String>,
    /// Whether the item is classified and labelled as containing a dangerous
    /// substance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dangerous_substance: Option<bool>,
    /// Labelling obligations and special risks for handling the substance
    #[serde(rename = "riskPhraseCode", skip_serializing_if = "Option::is_none")]
    pub risk_phrase_codes: Option<Vec<ExternalCodeValue>>,
    /// Safety advice concerning the substance
    #[serde(rename = "safetyPhraseCode", skip_serializing_if = "Option::is_none")]
    pub safety_phrase_codes: Option<Vec<ExternalCodeValue>>,
}
