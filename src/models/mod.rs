//! Master Product document model
//!
//! The record tree mirrors the GS1/GDSN trade item schema. Every optional
//! field decodes to `None` when absent and is omitted on encode; every list is
//! an `Option<Vec<_>>` so an absent list and an empty list stay distinct.
//! Unknown keys are ignored on decode.

pub mod common;
pub mod extension;
pub mod legacy;
pub mod master_product;
pub mod modules;
pub mod quantity;
pub mod trade_item;

pub use common::{
    AvpList, CountryReference, Emphasis, EmphasisedMLString, EnumerationValue,
    ExternalCodeReference, ExternalCodeValue, LocalizedText, MLString, OneOrGroup, PartyInRole,
    PlaceOfActivity, ProductActivityDetail, StringAvp, flatten_groups,
};
pub use extension::{PrivateUseModule, TradeItemExtension};
pub use legacy::{LegacyConversionError, LegacyMasterProduct};
pub use master_product::{
    DATA_FORMAT_VERSION, MasterProduct, MasterProductDetails, MasterProductHeader,
};
pub use quantity::{
    Measurement, MeasurementUnit, Quantity, TemperatureMeasurement, TemperatureUnit, UnitKind,
};
pub use trade_item::{
    AdditionalTradeItemClassification, AdditionalTradeItemClassificationValue,
    CommunicationChannel, GdsnTradeItemClassification, MasterProductTradeItem,
    ReferencedTradeItem, TargetMarket, TargetMarketCommunicationChannel,
    TradeItemContactInformation, TradeItemIdentification, TradeItemInformation,
    TradeItemSynchronisationDates,
};
