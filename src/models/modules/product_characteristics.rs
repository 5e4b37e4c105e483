//! Product characteristics module

use serde::{Deserialize, Serialize};

use crate::models::common::{MLString, OneOrGroup, flatten_groups};

/// Characteristics of a product, e.g. a value for numberOfPlys
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductCharacteristicsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_characteristics: Option<Vec<ProductCharacteristic>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCharacteristic {
    /// Code list `productCharacteristicCode`
    pub product_characteristic_code: String,
    /// Value as text with language, possibly grouped per value
    #[serde(
        rename = "productCharacteristicValueDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_descriptions: Option<Vec<OneOrGroup<MLString>>>,
    /// Value as text without language
    #[serde(
        rename = "productCharacteristicValueString",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_strings: Option<Vec<String>>,
}

impl ProductCharacteristic {
    /// Descriptions in every language, groups flattened
    pub fn descriptions(&self) -> Vec<&MLString> {
        flatten_groups(self.value_descriptions.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_descriptions() {
        let json = r#"{"productCharacteristicCode":"numberOfPlys","productCharacteristicValueDescription":[[{"$":"three","@languageCode":"en"},{"$":"kolme","@languageCode":"fi"}]],"productCharacteristicValueString":null}"#;
        let characteristic: ProductCharacteristic = serde_json::from_str(json).unwrap();
        assert_eq!(characteristic.value_strings, None);
        let texts: Vec<&str> = characteristic.descriptions().into_iter().map(|d| d.value.as_str()).collect();
        assert_eq!(texts, vec!["three", "kolme"]);
    }
}
