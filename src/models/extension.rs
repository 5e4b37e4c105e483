//! Extension module registry
//!
//! [`TradeItemExtension`] is the `extensions` object of a trade item. It holds
//! one optional slot per GDSN module plus the opaque private-use module.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::modules::*;

/// All extension modules of a trade item, each independently optional
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_information_module: Option<AlcoholInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergen_information_module: Option<AllergenInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_instructions_module: Option<ConsumerInstructionsModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dairy_fish_meat_poultry_item_module: Option<DairyFishMeatPoultryItemModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_substance_information_module: Option<DangerousSubstanceInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_information_module: Option<DietInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farming_and_processing_information_module: Option<FarmingAndProcessingInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_and_beverage_ingredient_module: Option<FoodAndBeverageIngredientModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_and_beverage_preparation_serving_module: Option<FoodAndBeveragePreparationServingModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_and_beverage_properties_information_module:
        Option<FoodAndBeveragePropertiesInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_information_module: Option<MarketingInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonfood_ingredient_module: Option<NonfoodIngredientModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_information_module: Option<NutritionalInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_information_module: Option<PackagingInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_marking_module: Option<PackagingMarkingModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_item_activity_module: Option<PlaceOfItemActivityModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_characteristics_module: Option<ProductCharacteristicsModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_data_sheet_module: Option<SafetyDataSheetModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_information_module: Option<SalesInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_description_module: Option<TradeItemDescriptionModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_lifespan_module: Option<TradeItemLifespanModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_measurements_module: Option<TradeItemMeasurementsModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_item_temperature_information_module: Option<TradeItemTemperatureInformationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_trade_item_information_module: Option<VariableTradeItemInformationModule>,
    /// Internal code lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dg_code_list_module: Option<DgCodeListModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dg_media_module: Option<DgMediaModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dg_presentation_module: Option<DgPresentationModule>,
    /// Opaque, re-encoded exactly as received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dg_private_use_module: Option<PrivateUseModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dg_product_attribute_module: Option<DgProductAttributeModule>,
}

impl TradeItemExtension {
    /// JSON keys of the modules that are present, in document order
    pub fn present_modules(&self) -> Vec<&'static str> {
        let slots: [(&'static str, bool); 29] = [
            ("alcoholInformationModule", self.alcohol_information_module.is_some()),
            ("allergenInformationModule", self.allergen_information_module.is_some()),
            ("consumerInstructionsModule", self.consumer_instructions_module.is_some()),
            (
                "dairyFishMeatPoultryItemModule",
                self.dairy_fish_meat_poultry_item_module.is_some(),
            ),
            (
                "dangerousSubstanceInformationModule",
                self.dangerous_substance_information_module.is_some(),
            ),
            ("dietInformationModule", self.diet_information_module.is_some()),
            (
                "farmingAndProcessingInformationModule",
                self.farming_and_processing_information_module.is_some(),
            ),
            (
                "foodAndBeverageIngredientModule",
                self.food_and_beverage_ingredient_module.is_some(),
            ),
            (
                "foodAndBeveragePreparationServingModule",
                self.food_and_beverage_preparation_serving_module.is_some(),
            ),
            (
                "foodAndBeveragePropertiesInformationModule",
                self.food_and_beverage_properties_information_module.is_some(),
            ),
            ("marketingInformationModule", self.marketing_information_module.is_some()),
            ("nonfoodIngredientModule", self.nonfood_ingredient_module.is_some()),
            (
                "nutritionalInformationModule",
                self.nutritional_information_module.is_some(),
            ),
            ("packagingInformationModule", self.packaging_information_module.is_some()),
            ("packagingMarkingModule", self.packaging_marking_module.is_some()),
            ("placeOfItemActivityModule", self.place_of_item_activity_module.is_some()),
            (
                "productCharacteristicsModule",
                self.product_characteristics_module.is_some(),
            ),
            ("safetyDataSheetModule", self.safety_data_sheet_module.is_some()),
            ("salesInformationModule", self.sales_information_module.is_some()),
            ("tradeItemDescriptionModule", self.trade_item_description_module.is_some()),
            ("tradeItemLifespanModule", self.trade_item_lifespan_module.is_some()),
            (
                "tradeItemMeasurementsModule",
                self.trade_item_measurements_module.is_some(),
            ),
            (
                "tradeItemTemperatureInformationModule",
                self.trade_item_temperature_information_module.is_some(),
            ),
            (
                "variableTradeItemInformationModule",
                self.variable_trade_item_information_module.is_some(),
            ),
            ("dgCodeListModule", self.dg_code_list_module.is_some()),
            ("dgMediaModule", self.dg_media_module.is_some()),
            ("dgPresentationModule", self.dg_presentation_module.is_some()),
            ("dgPrivateUseModule", self.dg_private_use_module.is_some()),
            ("dgProductAttributeModule", self.dg_product_attribute_module.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(key, present)| present.then_some(key))
            .collect()
    }

    /// Number of modules present
    pub fn module_count(&self) -> usize {
        self.present_modules().len()
    }

    /// True when no module is present
    pub fn is_empty(&self) -> bool {
        self.module_count() == 0
    }
}

/// Private-use module holding arbitrary JSON.
///
/// The content is never interpreted. It is kept as raw JSON text so that
/// encoding writes back exactly the bytes that were decoded.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivateUseModule(Box<RawValue>);

impl PrivateUseModule {
    /// Wrap raw JSON text, checking only that it is well-formed
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json.to_string()).map(Self)
    }

    /// Encode a serializable value as private-use content
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(Self)
    }

    /// The raw JSON text
    pub fn get(&self) -> &str {
        self.0.get()
    }

    /// Parse the content into a generic JSON value
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }

    /// Parse the content into a caller-defined type
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }
}

impl fmt::Debug for PrivateUseModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateUseModule").field(&self.0.get()).finish()
    }
}

impl PartialEq for PrivateUseModule {
    /// Equal when the raw text matches, or failing that, when both parse to
    /// the same JSON value.
    fn eq(&self, other: &Self) -> bool {
        if self.get() == other.get() {
            return true;
        }
        match (self.to_value(), other.to_value()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
