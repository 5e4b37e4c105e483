//! Trade item measurements module

use serde::{Deserialize, Serialize};

use crate::models::quantity::Measurement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemMeasurementsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_measurements: Option<TradeItemMeasurements>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemMeasurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Measurement>,
    /// Amount contained as claimed on the label, e.g. "750 MLT" or "20 ea.".
    /// Average quantity for variable quantity items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_content: Option<Vec<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_weight: Option<TradeItemWeight>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemWeight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drained_weight: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_weight: Option<Measurement>,
}
