//! Sales information module

use serde::{Deserialize, Serialize};

use crate::models::quantity::Measurement;

/// Price and selling conditions of the trade item to the consumer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesInformationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_information: Option<SalesInformation>,
}

/// Restrictions or requirements on the retailer for selling to consumers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesInformation {
    /// e.g. prescription required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_sales_condition_code: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_by_measure_type_code: Option<String>,
    /// Quantity at usage, for concentrated products and comparison pricing
    #[serde(rename = "priceComparisonMeasurement", skip_serializing_if = "Option::is_none")]
    pub price_comparison_measurements: Option<Vec<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_unit_of_measure: Option<String>,
    #[serde(rename = "x_eu1169Compliance", skip_serializing_if = "Option::is_none")]
    pub x_eu1169_compliance: Option<Eu1169Compliance>,
    #[serde(
        rename = "x_isExcludedFromLoyaltyPrograms",
        skip_serializing_if = "Option::is_none"
    )]
    pub x_is_excluded_from_loyalty_programs: Option<bool>,
    /// Quantity change per add/remove in a shopping basket
    #[serde(rename = "x_sellingContentIncrement", skip_serializing_if = "Option::is_none")]
    pub x_selling_content_increment: Option<f64>,
    /// Quantity when the first instance is added to a shopping basket
    #[serde(rename = "x_sellingContentInitial", skip_serializing_if = "Option::is_none")]
    pub x_selling_content_initial: Option<f64>,
    #[serde(rename = "x_salesRestrictionTags", skip_serializing_if = "Option::is_none")]
    pub x_sales_restriction_tags: Option<Vec<String>>,
    #[serde(rename = "x_sellingUnitOfMeasureCode", skip_serializing_if = "Option::is_none")]
    pub x_selling_unit_of_measure_code: Option<String>,
    #[serde(rename = "x_soldByMeasureTypeCode", skip_serializing_if = "Option::is_none")]
    pub x_sold_by_measure_type_code: Option<String>,
}

/// Compliance with EU regulation 1169/2011
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Eu1169Compliance {
    /// Code list `x_complianceCode`
    #[serde(rename = "x_complianceCode")]
    pub x_compliance_code: String,
}
