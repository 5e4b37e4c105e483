//! Marketing information module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

/// Features, benefits and targeted customer of a trade item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketingInformationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_information: Option<MarketingInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketingInformation {
    #[serde(rename = "tradeItemMarketingMessage", skip_serializing_if = "Option::is_none")]
    pub trade_item_marketing_messages: Option<Vec<MLString>>,
    /// Search keywords, e.g. Shampoo, Lather, Baby
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_key_words: Option<Vec<MLString>>,
    /// Excluded and hidden from promotions. Consumers treat absence as false.
    #[serde(
        rename = "x_hideTradeItemFromPromotions",
        skip_serializing_if = "Option::is_none"
    )]
    pub x_hide_trade_item_from_promotions: Option<bool>,
}
