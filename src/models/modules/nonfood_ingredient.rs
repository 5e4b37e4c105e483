//! Nonfood ingredient module

use serde::{Deserialize, Serialize};

use super::food_ingredient::AdditiveInformation;
use crate::models::common::{Emphasis, MLString};

/// Ingredients of items that are not food, e.g. detergents and medicines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NonfoodIngredientModule {
    #[serde(rename = "nonfoodIngredientStatement", skip_serializing_if = "Option::is_none")]
    pub nonfood_ingredient_statements: Option<Vec<MLString>>,
    /// Code list `nonfoodIngredientOfConcernCode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonfood_ingredient_of_concern_code: Option<Vec<String>>,
    #[serde(rename = "additiveInformation", skip_serializing_if = "Option::is_none")]
    pub additive_informations: Option<Vec<AdditiveInformation>>,
    #[serde(rename = "nonfoodIngredient", skip_serializing_if = "Option::is_none")]
    pub nonfood_ingredients: Option<Vec<NonfoodIngredient>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NonfoodIngredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,
    /// Whether the ingredient is emphasised on the packaging
    #[serde(
        rename = "isNonfoodIngredientEmphasized",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_nonfood_ingredient_emphasised: Option<bool>,
    /// Substring emphasis for `ingredientName`
    #[serde(rename = "x_emphasis", skip_serializing_if = "Option::is_none")]
    pub x_emphases: Option<Vec<Emphasis>>,
}
