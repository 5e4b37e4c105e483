//! Master Product aggregate root
//!
//! A [`MasterProduct`] is an identity envelope (ids, timestamps, GTIN, name)
//! plus optional [`MasterProductDetails`]. Without details it is the terse
//! view used for listings; with details it is the full GDSN document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::trade_item::MasterProductTradeItem;

/// Data format version written by this crate
pub const DATA_FORMAT_VERSION: &str = "1.0";

/// Global Master Product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MasterProduct {
    pub id: Uuid,
    pub product_id: Uuid,
    pub organization_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decommissioned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Identifier assigned by the data provider
    pub ext_id: String,
    pub gtin: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MasterProductDetails>,
}

impl MasterProduct {
    /// Create a terse Master Product with fresh ids, created now
    pub fn new(
        organization_id: Uuid,
        ext_id: impl Into<String>,
        gtin: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            organization_id,
            decommissioned_at: None,
            created_at: Utc::now(),
            updated_at: None,
            ext_id: ext_id.into(),
            gtin: gtin.into(),
            name: name.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: MasterProductDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// True when the product carries no details
    pub fn is_terse(&self) -> bool {
        self.details.is_none()
    }

    /// Copy of the envelope without details
    pub fn terse(&self) -> MasterProduct {
        MasterProduct {
            id: self.id,
            product_id: self.product_id,
            organization_id: self.organization_id,
            decommissioned_at: self.decommissioned_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            ext_id: self.ext_id.clone(),
            gtin: self.gtin.clone(),
            name: self.name.clone(),
            details: None,
        }
    }

    /// Drop the details, keeping the envelope
    pub fn into_terse(mut self) -> MasterProduct {
        self.details = None;
        self
    }

    /// Whether the product has been decommissioned at or before `at`
    pub fn is_decommissioned_at(&self, at: DateTime<Utc>) -> bool {
        self.decommissioned_at.is_some_and(|d| d <= at)
    }

    /// Trade item of the full view
    pub fn trade_item(&self) -> Option<&MasterProductTradeItem> {
        self.details.as_ref().map(|d| &d.trade_item)
    }
}

/// Details portion of a Master Product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MasterProductDetails {
    #[serde(rename = "Header")]
    pub header: MasterProductHeader,
    #[serde(rename = "tradeItem")]
    pub trade_item: MasterProductTradeItem,
}

impl MasterProductDetails {
    /// Details stamped with the current data format version
    pub fn new(trade_item: MasterProductTradeItem) -> Self {
        Self {
            header: MasterProductHeader::default(),
            trade_item,
        }
    }
}

/// Document-level metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasterProductHeader {
    #[serde(rename = "x_dataFormatVersion")]
    pub x_data_format_version: String,
}

impl MasterProductHeader {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            x_data_format_version: version.into(),
        }
    }
}

impl Default for MasterProductHeader {
    fn default() -> Self {
        Self::new(DATA_FORMAT_VERSION)
    }
}
