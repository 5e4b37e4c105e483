//! Trade item lifespan module

use serde::{Deserialize, Serialize};

/// Amount of time the item can or should be used, sold, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemLifespanModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_lifespan: Option<TradeItemLifespan>,
}

/// Lifespans in days
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemLifespan {
    /// Guaranteed days before expiration, counted from production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_trade_item_lifespan_from_time_of_production: Option<i64>,
    /// Days an opened item can remain on the shelf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_trade_item_lifespan: Option<i64>,
}
