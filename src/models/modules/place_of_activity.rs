//! Place of item activity module

use serde::{Deserialize, Serialize};

use crate::models::common::PlaceOfActivity;

/// Activity (e.g. bottling) performed on the item and its geographic area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOfItemActivityModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_product_activity: Option<PlaceOfActivity>,
}

impl PlaceOfItemActivityModule {
    /// Country codes of origin in document order
    pub fn origin_country_codes(&self) -> Vec<&str> {
        self.place_of_product_activity
            .iter()
            .flat_map(|p| p.countries_of_origin.iter().flatten())
            .map(|c| c.country_code.as_str())
            .collect()
    }
}
