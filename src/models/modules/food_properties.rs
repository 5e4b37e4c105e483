//! Food and beverage properties information module

use serde::{Deserialize, Serialize};

use crate::models::quantity::Measurement;

/// Physiochemical or other properties of food and beverage products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodAndBeveragePropertiesInformationModule {
    #[serde(
        rename = "physiochemicalCharacteristic",
        skip_serializing_if = "Option::is_none"
    )]
    pub physiochemical_characteristics: Option<Vec<PhysiochemicalCharacteristic>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhysiochemicalCharacteristic {
    /// Code list `physiochemicalCharacteristicCode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physiochemical_characteristic_code: Option<String>,
    #[serde(
        rename = "physiochemicalCharacteristicValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub physiochemical_characteristic_values: Option<Vec<Measurement>>,
}
