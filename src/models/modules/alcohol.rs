//! Alcohol information module

use serde::{Deserialize, Serialize};

use crate::models::quantity::Measurement;

/// Details on products traditionally containing alcohol
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholInformationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_information: Option<AlcoholInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholInformation {
    /// Percentage of alcohol contained in the base unit trade item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_of_alcohol_by_volume: Option<f64>,
    /// Sugar remaining in the beverage, e.g. 6.5 GL
    #[serde(rename = "alcoholicBeverageSugarContent", skip_serializing_if = "Option::is_none")]
    pub sugar_contents: Option<Vec<Measurement>>,
}
