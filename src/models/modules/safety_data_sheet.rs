//! Safety data sheet module
//!
//! Information usually found on a (material) safety data sheet, including the
//! Globally Harmonized System (GHS) classification and labelling of chemicals.

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;
use crate::models::quantity::TemperatureMeasurement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafetyDataSheetModule {
    #[serde(rename = "safetyDataSheetInformation", skip_serializing_if = "Option::is_none")]
    pub safety_data_sheet_informations: Option<Vec<SafetyDataSheetInformation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafetyDataSheetInformation {
    /// Whether shipment is regulated by any agency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_regulated_for_transportation: Option<bool>,
    #[serde(rename = "gHSDetail", skip_serializing_if = "Option::is_none")]
    pub ghs_detail: Option<GhsDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_chemical_property_information: Option<PhysicalChemicalPropertyInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GhsDetail {
    /// Signal words such as "Danger" or "Warning"
    #[serde(rename = "gHSSignalWordsCode", skip_serializing_if = "Option::is_none")]
    pub ghs_signal_words_code: Option<String>,
    /// Hazard pictograms
    #[serde(rename = "gHSSymbolDescriptionCode", skip_serializing_if = "Option::is_none")]
    pub ghs_symbol_description_code: Option<Vec<String>>,
    #[serde(rename = "hazardStatement", skip_serializing_if = "Option::is_none")]
    pub hazard_statements: Option<Vec<HazardStatement>>,
    #[serde(rename = "precautionaryStatement", skip_serializing_if = "Option::is_none")]
    pub precautionary_statements: Option<Vec<PrecautionaryStatement>>,
}

/// Standard phrase describing the nature of a hazard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HazardStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_statements_code: Option<String>,
    #[serde(rename = "hazardStatementsDescription", skip_serializing_if = "Option::is_none")]
    pub hazard_statements_descriptions: Option<Vec<MLString>>,
}

/// Measure to minimize or prevent adverse effects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrecautionaryStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precautionary_statements_code: Option<String>,
    #[serde(
        rename = "precautionaryStatementsDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub precautionary_statements_descriptions: Option<Vec<MLString>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PhysicalChemicalPropertyInformation {
    #[serde(rename = "flashPoint", skip_serializing_if = "Option::is_none")]
    pub flash_points: Option<Vec<FlashPoint>>,
    #[serde(rename = "pHInformation", skip_serializing_if = "Option::is_none")]
    pub ph_information: Option<PhInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FlashPoint {
    /// Temperature at which the substance gives off enough vapour to support
    /// combustion
    #[serde(rename = "flashPointTemperature", skip_serializing_if = "Option::is_none")]
    pub flash_point_temperatures: Option<Vec<TemperatureMeasurement>>,
}

/// Acidity or alkalinity of an aqueous solution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PhInformation {
    /// Exact pH (not a range)
    #[serde(rename = "exactPH", skip_serializing_if = "Option::is_none")]
    pub exact_ph: Option<f64>,
    #[serde(rename = "maximumPH", skip_serializing_if = "Option::is_none")]
    pub maximum_ph: Option<f64>,
    #[serde(rename = "minimumPH", skip_serializing_if = "Option::is_none")]
    pub minimum_ph: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghs_keys() {
        let json = r#"{"gHSDetail":{"gHSSignalWordsCode":"DANGER","gHSSymbolDescriptionCode":["GHS02"]},"physicalChemicalPropertyInformation":{"flashPoint":[{"flashPointTemperature":[{"$":23,"@temperatureMeasurementUnitCode":"CEL"}]}],"pHInformation":{"exactPH":7.5}}}"#;
        let info: SafetyDataSheetInformation = serde_json::from_str(json).unwrap();
        let ghs = info.ghs_detail.as_ref().unwrap();
        assert_eq!(ghs.ghs_signal_words_code.as_deref(), Some("DANGER"));
        let ph = info
            .physical_chemical_property_information
            .as_ref()
            .and_then(|p| p.ph_information.as_ref())
            .unwrap();
        assert_eq!(ph.exact_ph, Some(7.5));
        assert_eq!(ph.minimum_ph, None);
        assert_eq!(serde_json::to_string(&info).unwrap(), json);
    }
}
