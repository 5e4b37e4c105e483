//! Variable trade item information module

use serde::{Deserialize, Serialize};

/// Information specific to variable weight or dimension trade items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VariableTradeItemInformationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_trade_item_information: Option<VariableTradeItemInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VariableTradeItemInformation {
    /// Traded in continuous rather than discrete quantities
    #[serde(rename = "isTradeItemAVariableUnit", skip_serializing_if = "Option::is_none")]
    pub is_trade_item_a_variable_unit: Option<bool>,
    /// Loose or pre-packed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_trade_item_type_code: Option<String>,
    /// Allowed deviation of the actual weight from the given weight, in
    /// percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_weight_allowable_deviation_percentage: Option<f64>,
}
