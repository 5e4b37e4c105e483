//! Diet information module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

/// Dietary suitability of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietInformationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_information: Option<DietInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietInformation {
    /// Dietary description as held on the label
    #[serde(rename = "dietTypeDescription", skip_serializing_if = "Option::is_none")]
    pub diet_type_descriptions: Option<Vec<MLString>>,
    #[serde(rename = "dietTypeInformation", skip_serializing_if = "Option::is_none")]
    pub diet_type_informations: Option<Vec<DietTypeInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietTypeInformation {
    pub diet_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type_subcode: Option<String>,
}
