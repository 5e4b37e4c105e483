//! Food and beverage preparation and serving module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;
use crate::models::quantity::Measurement;

/// Ways the product can be prepared or served
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodAndBeveragePreparationServingModule {
    #[serde(rename = "preparationServing", skip_serializing_if = "Option::is_none")]
    pub preparation_servings: Option<Vec<PreparationServing>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreparationServing {
    /// Level of preparation required, in percent, for semi-prepared products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convenience_level_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_instructions: Option<Vec<MLString>>,
    /// Code list `preparationTypeCode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_type_code: Option<String>,
    #[serde(rename = "servingSuggestion", skip_serializing_if = "Option::is_none")]
    pub serving_suggestions: Option<Vec<MLString>>,
    #[serde(rename = "productYieldInformation", skip_serializing_if = "Option::is_none")]
    pub product_yield_informations: Option<Vec<ProductYieldInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductYieldInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_yield: Option<Measurement>,
    /// Code list `productYieldTypeCode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_yield_type_code: Option<String>,
}
