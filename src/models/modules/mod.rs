//! Extension modules
//!
//! One file per GDSN trade item module. Every module is optional on the trade
//! item and every field inside a module follows the same optionality rules as
//! the rest of the document.

pub mod alcohol;
pub mod allergen;
pub mod code_list;
pub mod consumer_instructions;
pub mod dairy_fish_meat_poultry;
pub mod dangerous_substance;
pub mod description;
pub mod diet;
pub mod farming_processing;
pub mod food_ingredient;
pub mod food_properties;
pub mod lifespan;
pub mod marketing;
pub mod measurements;
pub mod media;
pub mod nonfood_ingredient;
pub mod nutrition;
pub mod packaging;
pub mod packaging_marking;
pub mod place_of_activity;
pub mod preparation_serving;
pub mod presentation;
pub mod product_attribute;
pub mod product_characteristics;
pub mod safety_data_sheet;
pub mod sales;
pub mod temperature;
pub mod variable_item;

pub use alcohol::{AlcoholInformation, AlcoholInformationModule};
pub use allergen::{Allergen, AllergenInformationModule, AllergenRelatedInformation};
pub use code_list::{CodeList, CodeListRecord, DgCodeListModule};
pub use consumer_instructions::{ConsumerInstructions, ConsumerInstructionsModule};
pub use dairy_fish_meat_poultry::{
    DairyFishMeatPoultryInformation, DairyFishMeatPoultryItemModule, FishCatchInformation,
    FishReportingInformation,
};
pub use dangerous_substance::{
    DangerousSubstanceInformation, DangerousSubstanceInformationModule, DangerousSubstanceProperty,
};
pub use description::{
    BrandNameInformation, TradeItemDescriptionInformation, TradeItemDescriptionModule,
};
pub use diet::{DietInformation, DietInformationModule, DietTypeInformation};
pub use farming_processing::{
    FarmingAndProcessing, FarmingAndProcessingInformationModule, OrganicClaim, OrganicInformation,
};
pub use food_ingredient::{
    AdditiveInformation, FoodAndBeverageIngredient, FoodAndBeverageIngredientModule,
};
pub use food_properties::{FoodAndBeveragePropertiesInformationModule, PhysiochemicalCharacteristic};
pub use lifespan::{TradeItemLifespan, TradeItemLifespanModule};
pub use marketing::{MarketingInformation, MarketingInformationModule};
pub use measurements::{TradeItemMeasurements, TradeItemMeasurementsModule, TradeItemWeight};
pub use media::{DgMedia, DgMediaModule};
pub use nonfood_ingredient::{NonfoodIngredient, NonfoodIngredientModule};
pub use nutrition::{NutrientDetail, NutrientHeader, NutritionalClaimDetail, NutritionalInformationModule};
pub use packaging::{Packaging, PackagingInformationModule, PackagingMaterial};
pub use packaging_marking::{PackagingMarking, PackagingMarkingModule};
pub use place_of_activity::PlaceOfItemActivityModule;
pub use preparation_serving::{
    FoodAndBeveragePreparationServingModule, PreparationServing, ProductYieldInformation,
};
pub use presentation::{DgPresentationModule, PresentationCategory, TimePeriod};
pub use product_attribute::{
    DgProductAttributeModule, ProductAttribute, ProductAttributeGroup, ProductAttributeValue,
};
pub use product_characteristics::{ProductCharacteristic, ProductCharacteristicsModule};
pub use safety_data_sheet::{
    FlashPoint, GhsDetail, HazardStatement, PhInformation, PhysicalChemicalPropertyInformation,
    PrecautionaryStatement, SafetyDataSheetInformation, SafetyDataSheetModule,
};
pub use sales::{Eu1169Compliance, SalesInformation, SalesInformationModule};
pub use temperature::{TradeItemTemperatureInformation, TradeItemTemperatureInformationModule};
pub use variable_item::{VariableTradeItemInformation, VariableTradeItemInformationModule};
