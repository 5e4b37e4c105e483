//! Trade item temperature information module

use serde::{Deserialize, Serialize};

use crate::models::quantity::TemperatureMeasurement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemTemperatureInformationModule {
    /// Condition of the product sold to the end consumer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_temperature_condition_type_code: Option<String>,
    /// Permissible temperatures at points of the supply chain
    #[serde(
        rename = "tradeItemTemperatureInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_item_temperature_informations: Option<Vec<TradeItemTemperatureInformation>>,
}

impl TradeItemTemperatureInformationModule {
    /// Temperature requirement by qualifier, e.g. `"STORAGE_HANDLING"`
    pub fn for_qualifier(&self, qualifier: &str) -> Option<&TradeItemTemperatureInformation> {
        self.trade_item_temperature_informations
            .iter()
            .flatten()
            .find(|t| t.temperature_qualifier_code.as_deref() == Some(qualifier))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemTemperatureInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_temperature: Option<TemperatureMeasurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_tolerance_temperature: Option<TemperatureMeasurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_temperature: Option<TemperatureMeasurement>,
    // GDSN spells this key "minumum"
    #[serde(rename = "minumumToleranceTemperature", skip_serializing_if = "Option::is_none")]
    pub minimum_tolerance_temperature: Option<TemperatureMeasurement>,
    /// Type of temperature requirement, e.g. storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_qualifier_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_tolerance_key() {
        let info = TradeItemTemperatureInformation {
            minimum_tolerance_temperature: Some(TemperatureMeasurement::new(2, "CEL")),
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"minumumToleranceTemperature":{"$":2,"@temperatureMeasurementUnitCode":"CEL"}}"#
        );
    }

    #[test]
    fn test_lookup_by_qualifier() {
        let module = TradeItemTemperatureInformationModule {
            trade_item_temperature_condition_type_code: Some("CHILLED".to_string()),
            trade_item_temperature_informations: Some(vec![
                TradeItemTemperatureInformation {
                    maximum_temperature: Some(TemperatureMeasurement::new(6, "CEL")),
                    temperature_qualifier_code: Some("STORAGE_HANDLING".to_string()),
                    ..Default::default()
                },
                TradeItemTemperatureInformation {
                    maximum_temperature: Some(TemperatureMeasurement::new(8, "CEL")),
                    temperature_qualifier_code: Some("TRANSPORTATION".to_string()),
                    ..Default::default()
                },
            ]),
        };
        let transport = module.for_qualifier("TRANSPORTATION").unwrap();
        assert_eq!(transport.maximum_temperature.as_ref().unwrap().as_i64(), Some(8));
        assert!(module.for_qualifier("DELIVERY").is_none());
    }
}
