//! Food and beverage ingredient module

use serde::{Deserialize, Serialize};

use super::farming_processing::{FarmingAndProcessing, OrganicInformation};
use crate::models::common::{EmphasisedMLString, MLString, OneOrGroup, PlaceOfActivity, flatten_groups};

/// Constituent ingredient make up of the product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodAndBeverageIngredientModule {
    /// Ingredients as one statement
    #[serde(rename = "ingredientStatement", skip_serializing_if = "Option::is_none")]
    pub ingredient_statements: Option<Vec<MLString>>,
    /// Fruit juice content as a percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juice_content_percent: Option<f64>,
    #[serde(rename = "additiveInformation", skip_serializing_if = "Option::is_none")]
    pub additive_informations: Option<Vec<AdditiveInformation>>,
    /// Ingredients split out one by one
    #[serde(rename = "foodAndBeverageIngredient", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<FoodAndBeverageIngredient>>,
    #[serde(
        rename = "x_additionalIngredientStatement",
        skip_serializing_if = "Option::is_none"
    )]
    pub x_additional_ingredient_statements: Option<Vec<OneOrGroup<MLString>>>,
    /// Whether the product is a food item or a beverage
    #[serde(rename = "x_isFoodOrBeverage")]
    pub x_is_food_or_beverage: bool,
}

impl FoodAndBeverageIngredientModule {
    /// Ingredients sorted by `ingredientSequence`, falling back to document
    /// order for unsequenced or non-numeric entries
    pub fn ingredients_in_sequence(&self) -> Vec<&FoodAndBeverageIngredient> {
        let mut ingredients: Vec<&FoodAndBeverageIngredient> = self.ingredients.iter().flatten().collect();
        ingredients.sort_by_key(|i| {
            i.ingredient_sequence
                .as_deref()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(u64::MAX)
        });
        ingredients
    }

    /// Additional ingredient statements, groups flattened
    pub fn additional_statements(&self) -> Vec<&MLString> {
        flatten_groups(self.x_additional_ingredient_statements.as_deref())
    }
}

/// Presence or absence of an additive or genetic modification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdditiveInformation {
    pub additive_name: String,
    /// Code list `levelOfContainmentCode`
    pub level_of_containment_code: String,
}

impl AdditiveInformation {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            additive_name: name.into(),
            level_of_containment_code: level.into(),
        }
    }
}

/// One ingredient or ingredient group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodAndBeverageIngredient {
    /// Ingredient order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_sequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_content_percentage: Option<f64>,
    /// Ingredient names, additives included, with emphasis ranges. The flat
    /// generation wrote each name as a nested list of translations.
    #[serde(rename = "ingredientName", skip_serializing_if = "Option::is_none")]
    pub ingredient_names: Option<Vec<OneOrGroup<EmphasisedMLString>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ingredient_emphasised: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_farming_processing: Option<FarmingAndProcessing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_organic_information: Option<OrganicInformation>,
    #[serde(rename = "ingredientPlaceOfActivity", skip_serializing_if = "Option::is_none")]
    pub ingredient_places_of_activity: Option<Vec<PlaceOfActivity>>,
}

impl FoodAndBeverageIngredient {
    pub fn new(names: Vec<EmphasisedMLString>) -> Self {
        Self {
            ingredient_sequence: None,
            ingredient_content_percentage: None,
            ingredient_names: Some(names.into_iter().map(OneOrGroup::One).collect()),
            is_ingredient_emphasised: None,
            ingredient_farming_processing: None,
            ingredient_organic_information: None,
            ingredient_places_of_activity: None,
        }
    }

    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.ingredient_sequence = Some(sequence.into());
        self
    }

    /// Names in every language, groups flattened
    pub fn names(&self) -> Vec<&EmphasisedMLString> {
        flatten_groups(self.ingredient_names.as_deref())
    }
}
