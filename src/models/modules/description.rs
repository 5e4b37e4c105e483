//! Trade item description module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

/// General descriptions of the trade item including brand, form and variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemDescriptionModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_description_information: Option<TradeItemDescriptionInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemDescriptionInformation {
    #[serde(
        rename = "additionalTradeItemDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_trade_item_descriptions: Option<Vec<MLString>>,
    /// Short description usable at point of sale
    #[serde(rename = "descriptionShort", skip_serializing_if = "Option::is_none")]
    pub description_shorts: Option<Vec<MLString>>,
    /// Use of the product by the consumer
    #[serde(rename = "functionalName", skip_serializing_if = "Option::is_none")]
    pub functional_names: Option<Vec<MLString>>,
    /// Full, unabbreviated description built from brand and other descriptors
    #[serde(rename = "tradeItemDescription", skip_serializing_if = "Option::is_none")]
    pub trade_item_descriptions: Option<Vec<MLString>>,
    /// Distinguishing flavour, fragrance, taste...
    #[serde(rename = "variantDescription", skip_serializing_if = "Option::is_none")]
    pub variant_descriptions: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name_information: Option<BrandNameInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandNameInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Brand name in languages other than that of `brandName`
    #[serde(rename = "languageSpecificBrandName", skip_serializing_if = "Option::is_none")]
    pub language_specific_brand_names: Option<Vec<MLString>>,
    #[serde(
        rename = "languageSpecificSubbrandName",
        skip_serializing_if = "Option::is_none"
    )]
    pub language_specific_subbrand_names: Option<Vec<MLString>>,
    /// Second level of brand, can be a trademark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_brand: Option<String>,
}
