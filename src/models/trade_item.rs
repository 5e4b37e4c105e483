//! Trade item backbone: identification, classification, parties, target
//! markets and contacts.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{MLString, PartyInRole, one_or_many};
use super::extension::TradeItemExtension;

/// GDSN product details of a Master Product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MasterProductTradeItem {
    /// Global Trade Item Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Extra information on the GTIN to identify the trade item
    #[serde(rename = "x_tradeItemIdentification", skip_serializing_if = "Option::is_none")]
    pub x_trade_item_identification: Option<TradeItemIdentification>,
    /// Alternative means to the GTIN to identify the trade item
    #[serde(
        rename = "additionalTradeItemIdentification",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_trade_item_identifications: Option<Vec<TradeItemIdentification>>,
    /// The information provider, by GLN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_provider_of_trade_item: Option<PartyInRole>,
    /// Manufacturers of the trade item
    #[serde(rename = "manufacturerOfTradeItem", skip_serializing_if = "Option::is_none")]
    pub manufacturers_of_trade_item: Option<Vec<PartyInRole>>,
    /// Product class and the classification systems applied
    #[serde(
        rename = "gdsnTradeItemClassification",
        skip_serializing_if = "Option::is_none"
    )]
    pub gdsn_trade_item_classification: Option<GdsnTradeItemClassification>,
    /// Trade items referenced by this one, e.g. replaced or replaced by
    #[serde(rename = "referencedTradeItem", skip_serializing_if = "Option::is_none")]
    pub referenced_trade_items: Option<Vec<ReferencedTradeItem>>,
    /// Target markets the trade item is sold in
    #[serde(
        rename = "targetMarket",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_markets: Option<Vec<TargetMarket>>,
    /// Contact details for the trade item
    #[serde(
        rename = "tradeItemContactInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_item_contact_informations: Option<Vec<TradeItemContactInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_synchronisation_dates: Option<TradeItemSynchronisationDates>,
    /// Detailed information on the trade item
    pub trade_item_information: TradeItemInformation,
}

impl MasterProductTradeItem {
    /// Create a trade item with only the given GTIN set
    pub fn new(gtin: impl Into<String>) -> Self {
        Self {
            gtin: Some(gtin.into()),
            ..Default::default()
        }
    }

    /// Set the GPC classification
    pub fn with_classification(mut self, classification: GdsnTradeItemClassification) -> Self {
        self.gdsn_trade_item_classification = Some(classification);
        self
    }

    /// Add a target market country
    pub fn with_target_market(mut self, country_code: impl Into<String>) -> Self {
        self.target_markets
            .get_or_insert_with(Vec::new)
            .push(TargetMarket::new(country_code));
        self
    }

    /// Set the extension modules
    pub fn with_extensions(mut self, extensions: TradeItemExtension) -> Self {
        self.trade_item_information.extensions = extensions;
        self
    }

    /// Extension modules of the trade item
    pub fn extensions(&self) -> &TradeItemExtension {
        &self.trade_item_information.extensions
    }

    /// Target market country codes in document order
    pub fn target_market_codes(&self) -> Vec<&str> {
        self.target_markets
            .iter()
            .flatten()
            .map(|m| m.target_market_country_code.as_str())
            .collect()
    }
}

/// Identifier of a trade item in addition to its GTIN, with a validity window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeItemIdentification {
    /// The identifier value
    #[serde(rename = "$")]
    pub value: String,
    /// Cross-references the vendor's internal number to the GTIN
    #[serde(rename = "@additionalTradeItemIdentificationTypeCode")]
    pub type_code: String,
    #[serde(rename = "@startDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "@endDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<FixedOffset>>,
    /// Identifier version, carried by flat documents
    #[serde(rename = "@version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl TradeItemIdentification {
    pub fn new(value: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            type_code: type_code.into(),
            start_date_time: None,
            end_date_time: None,
            version: None,
        }
    }

    /// Set the validity window
    pub fn with_validity(
        mut self,
        start: Option<DateTime<FixedOffset>>,
        end: Option<DateTime<FixedOffset>>,
    ) -> Self {
        self.start_date_time = start;
        self.end_date_time = end;
        self
    }

    /// False only when both ends are set and the end precedes the start
    pub fn has_ordered_validity(&self) -> bool {
        match (self.start_date_time, self.end_date_time) {
            (Some(start), Some(end)) => end >= start,
            _ => true,
        }
    }
}

/// Product class of a trade item according to GPC and other systems
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GdsnTradeItemClassification {
    /// GS1 Global Product Classification category code
    pub gpc_category_code: String,
    /// Category codes from alternate classification schemes
    #[serde(
        rename = "additionalTradeItemClassification",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_classifications: Option<Vec<AdditionalTradeItemClassification>>,
}

impl GdsnTradeItemClassification {
    pub fn new(gpc_category_code: impl Into<String>) -> Self {
        Self {
            gpc_category_code: gpc_category_code.into(),
            additional_classifications: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalTradeItemClassification {
    #[serde(
        rename = "additionalTradeItemClassificationSystemCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_code: Option<String>,
    #[serde(
        rename = "additionalTradeItemClassificationValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub values: Option<Vec<AdditionalTradeItemClassificationValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdditionalTradeItemClassificationValue {
    #[serde(rename = "additionalTradeItemClassificationCodeValue")]
    pub code_value: String,
}

/// A trade item referenced by this one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedTradeItem {
    pub gtin: String,
    /// e.g. substitute, replaced by, equivalent
    pub referenced_trade_item_type_code: String,
}

/// Country level (or wider) market where the trade item is sold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TargetMarket {
    pub target_market_country_code: String,
}

impl TargetMarket {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            target_market_country_code: country_code.into(),
        }
    }
}

/// Contact for the trade item, e.g. consumer support
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemContactInformation {
    /// General category of the contact party, e.g. purchasing
    pub contact_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(rename = "contactDescription", skip_serializing_if = "Option::is_none")]
    pub contact_descriptions: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(
        rename = "targetMarketCommunicationChannel",
        skip_serializing_if = "Option::is_none"
    )]
    pub communication_channels: Option<Vec<TargetMarketCommunicationChannel>>,
}

/// Communication channels scoped to a set of target markets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetMarketCommunicationChannel {
    #[serde(rename = "targetMarket", skip_serializing_if = "Option::is_none")]
    pub target_markets: Option<Vec<TargetMarket>>,
    #[serde(rename = "communicationChannel", skip_serializing_if = "Option::is_none")]
    pub communication_channels: Option<Vec<CommunicationChannel>>,
}

/// A channel such as telephone or email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationChannel {
    pub communication_channel_code: String,
    pub communication_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_channel_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemSynchronisationDates {
    /// Point in time of the last modification of the trade item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change_date_time: Option<DateTime<FixedOffset>>,
}

/// Detailed information on the trade item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeItemInformation {
    pub extensions: TradeItemExtension,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_minimal_trade_item() {
        let item: MasterProductTradeItem =
            serde_json::from_str(r#"{"tradeItemInformation":{"extensions":{}}}"#).unwrap();
        assert_eq!(item, MasterProductTradeItem::default());
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"tradeItemInformation":{"extensions":{}}}"#
        );
    }

    #[test]
    fn test_trade_item_information_required() {
        let result = serde_json::from_str::<MasterProductTradeItem>(r#"{"gtin":"00012345678905"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let item = MasterProductTradeItem::new("00012345678905")
            .with_classification(GdsnTradeItemClassification::new("10000025"))
            .with_target_market("246")
            .with_target_market("752");
        assert_eq!(item.target_market_codes(), vec!["246", "752"]);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["gdsnTradeItemClassification"]["gpcCategoryCode"], "10000025");
        assert_eq!(json["targetMarket"][1]["targetMarketCountryCode"], "752");
    }

    #[test]
    fn test_single_target_market_object_accepted() {
        let item: MasterProductTradeItem = serde_json::from_str(
            r#"{"targetMarket":{"targetMarketCountryCode":"246"},"tradeItemInformation":{"extensions":{}}}"#,
        )
        .unwrap();
        assert_eq!(item.target_market_codes(), vec!["246"]);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["targetMarket"].is_array());
    }

    #[test]
    fn test_identification_wire_shape() {
        let id = TradeItemIdentification::new("SKU-1", "SUPPLIER_ASSIGNED")
            .with_validity(Some(ts("2024-01-01T08:00:00+02:00")), None);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            r#"{"$":"SKU-1","@additionalTradeItemIdentificationTypeCode":"SUPPLIER_ASSIGNED","@startDateTime":"2024-01-01T08:00:00+02:00"}"#
        );
    }

    #[test]
    fn test_validity_ordering() {
        let ordered = TradeItemIdentification::new("A", "T")
            .with_validity(Some(ts("2024-01-01T00:00:00Z")), Some(ts("2024-06-01T00:00:00Z")));
        assert!(ordered.has_ordered_validity());

        let open = TradeItemIdentification::new("A", "T")
            .with_validity(None, Some(ts("2024-06-01T00:00:00Z")));
        assert!(open.has_ordered_validity());

        // reversed windows decode fine, they are only reported
        let reversed: TradeItemIdentification = serde_json::from_str(
            r#"{"$":"A","@additionalTradeItemIdentificationTypeCode":"T","@startDateTime":"2024-06-01T00:00:00Z","@endDateTime":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!reversed.has_ordered_validity());
    }

    #[test]
    fn test_offset_preserved() {
        let json = r#"{"lastChangeDateTime":"2024-03-01T12:30:00+02:00"}"#;
        let dates: TradeItemSynchronisationDates = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&dates).unwrap(), json);
    }

    #[test]
    fn test_contact_channels_order() {
        let json = r#"{"contactTypeCode":"CXC","targetMarketCommunicationChannel":[{"targetMarket":[{"targetMarketCountryCode":"246"}],"communicationChannel":[{"communicationChannelCode":"TELEPHONE","communicationValue":"+358 1"},{"communicationChannelCode":"EMAIL","communicationValue":"a@b.fi","communicationChannelName":"Support"}]}]}"#;
        let contact: TradeItemContactInformation = serde_json::from_str(json).unwrap();
        let channels = contact.communication_channels.as_ref().unwrap()[0]
            .communication_channels
            .as_ref()
            .unwrap();
        assert_eq!(channels[0].communication_channel_code, "TELEPHONE");
        assert_eq!(channels[1].communication_channel_code, "EMAIL");
        assert_eq!(serde_json::to_string(&contact).unwrap(), json);
    }
}
