//! Farming and processing information module

use serde::{Deserialize, Serialize};

use crate::models::common::AvpList;

/// Farming or processing performed on an agricultural trade item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FarmingAndProcessingInformationModule {
    /// Extent of organic production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_organic_information: Option<OrganicInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_farming_and_processing: Option<FarmingAndProcessing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avp_list: Option<AvpList>,
}

/// Organic status of a trade item or one of its ingredients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganicInformation {
    /// Where the agricultural raw materials were farmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_product_place_of_farming_code: Option<String>,
    #[serde(rename = "organicClaim", skip_serializing_if = "Option::is_none")]
    pub organic_claims: Option<Vec<OrganicClaim>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganicClaim {
    /// Governing bodies maintaining organic standards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_claim_agency_code: Option<Vec<String>>,
    /// Percent of organic material per weight of the trade item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_percent_claim: Option<f64>,
}

/// Farming methods and preservation techniques of an item or ingredient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FarmingAndProcessing {
    /// Presence or absence of genetically modified protein or DNA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetically_modified_declaration_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preservation_technique_code: Option<Vec<String>>,
}
