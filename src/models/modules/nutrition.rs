//! Nutritional information module
//!
//! Several nutrient sets may be given, varying by preparation state, serving
//! size and daily value intake base.

use serde::{Deserialize, Serialize};

use crate::models::common::{MLString, one_or_many};
use crate::models::quantity::Measurement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInformationModule {
    /// Free text nutritional claims
    #[serde(rename = "nutritionalClaim", skip_serializing_if = "Option::is_none")]
    pub nutritional_claims: Option<Vec<MLString>>,
    #[serde(rename = "nutritionalClaimDetail", skip_serializing_if = "Option::is_none")]
    pub nutritional_claim_details: Option<Vec<NutritionalClaimDetail>>,
    #[serde(rename = "nutrientHeader", skip_serializing_if = "Option::is_none")]
    pub nutrient_headers: Option<Vec<NutrientHeader>>,
}

impl NutritionalInformationModule {
    /// Nutrient header for a preparation state, e.g. `"UNPREPARED"`
    pub fn header_for(&self, preparation_state_code: &str) -> Option<&NutrientHeader> {
        self.nutrient_headers
            .iter()
            .flatten()
            .find(|h| h.preparation_state_code == preparation_state_code)
    }
}

/// A nutritional claim permitted by regulations of the target market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalClaimDetail {
    /// e.g. low, free from, source of
    pub nutritional_claim_type_code: String,
    /// e.g. fat, copper, milk
    pub nutritional_claim_nutrient_element_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientHeader {
    /// Preparation state the values apply to: unprepared, boiled, fried...
    pub preparation_state_code: String,
    /// A single text in flat documents, a list otherwise
    #[serde(
        rename = "dailyValueIntakeReference",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_value_intake_references: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_basis_quantity: Option<Measurement>,
    #[serde(rename = "servingSize", skip_serializing_if = "Option::is_none")]
    pub serving_sizes: Option<Vec<Measurement>>,
    #[serde(rename = "servingSizeDescription", skip_serializing_if = "Option::is_none")]
    pub serving_size_descriptions: Option<Vec<MLString>>,
    #[serde(rename = "nutrientDetail", skip_serializing_if = "Option::is_none")]
    pub nutrient_details: Option<Vec<NutrientDetail>>,
}

impl NutrientHeader {
    pub fn new(preparation_state_code: impl Into<String>) -> Self {
        Self {
            preparation_state_code: preparation_state_code.into(),
            daily_value_intake_references: None,
            nutrient_basis_quantity: None,
            serving_sizes: None,
            serving_size_descriptions: None,
            nutrient_details: None,
        }
    }

    /// Nutrient detail by nutrient type code, e.g. `"ENER-"`
    pub fn nutrient(&self, nutrient_type_code: &str) -> Option<&NutrientDetail> {
        self.nutrient_details
            .iter()
            .flatten()
            .find(|d| d.nutrient_type_code == nutrient_type_code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientDetail {
    /// Code list `nutrientTypeCode`
    pub nutrient_type_code: String,
    /// Percentage of the recommended daily intake, relative to the serving size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_value_intake_percent: Option<f64>,
    /// Whether the content is exact or approximate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_precision_code: Option<String>,
    #[serde(rename = "quantityContained", skip_serializing_if = "Option::is_none")]
    pub quantities_contained: Option<Vec<Measurement>>,
}

impl NutrientDetail {
    pub fn new(nutrient_type_code: impl Into<String>) -> Self {
        Self {
            nutrient_type_code: nutrient_type_code.into(),
            daily_value_intake_percent: None,
            measurement_precision_code: None,
            quantities_contained: None,
        }
    }

    pub fn with_quantity(mut self, quantity: Measurement) -> Self {
        self.quantities_contained.get_or_insert_with(Vec::new).push(quantity);
        self
    }
}
