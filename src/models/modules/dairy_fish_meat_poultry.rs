//! Dairy, fish, meat and poultry item module

use serde::{Deserialize, Serialize};

/// Content and processing information specific to dairy, fish, meat and
/// poultry products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DairyFishMeatPoultryItemModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dairy_fish_meat_poultry_information: Option<DairyFishMeatPoultryInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DairyFishMeatPoultryInformation {
    #[serde(rename = "fishReportingInformation", skip_serializing_if = "Option::is_none")]
    pub fish_reporting_informations: Option<Vec<FishReportingInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FishReportingInformation {
    /// FAO 3-alpha species code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_for_fishery_statistics_purposes_code: Option<String>,
    /// Scientific name of the species
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_for_fishery_statistics_purposes_name: Option<String>,
    #[serde(rename = "fishCatchInformation", skip_serializing_if = "Option::is_none")]
    pub fish_catch_informations: Option<Vec<FishCatchInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FishCatchInformation {
    /// FAO catch method codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_method_code: Option<Vec<String>>,
}
