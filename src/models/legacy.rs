//! Flat document generation
//!
//! Before the identity envelope was introduced, Master Products were written
//! as one flat object: string identifiers, GTIN and name next to the `Header`
//! and `tradeItem` payload, with no organization or timestamps. Documents of
//! that generation are still exchanged, so they can be read and written here
//! and converted to and from [`MasterProduct`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::master_product::{MasterProduct, MasterProductDetails, MasterProductHeader};
use super::trade_item::MasterProductTradeItem;

/// Error converting a flat document to the canonical model
#[derive(Debug, Error)]
pub enum LegacyConversionError {
    #[error("Field '{field}' is not a valid UUID: '{value}'")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },
}

/// Master Product in the flat document layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegacyMasterProduct {
    pub id: String,
    pub ext_id: String,
    pub product_id: String,
    pub gtin: String,
    pub name: String,
    #[serde(rename = "Header")]
    pub header: MasterProductHeader,
    #[serde(rename = "tradeItem")]
    pub trade_item: MasterProductTradeItem,
}

impl LegacyMasterProduct {
    /// Flatten a full Master Product. Returns `None` for the terse view,
    /// which has no payload to carry.
    pub fn from_master_product(product: &MasterProduct) -> Option<Self> {
        let details = product.details.as_ref()?;
        Some(Self {
            id: product.id.to_string(),
            ext_id: product.ext_id.clone(),
            product_id: product.product_id.to_string(),
            gtin: product.gtin.clone(),
            name: product.name.clone(),
            header: details.header.clone(),
            trade_item: details.trade_item.clone(),
        })
    }

    /// Convert to the canonical model.
    ///
    /// The flat layout has no organization or creation time, so both are
    /// supplied by the caller.
    pub fn into_master_product(
        self,
        organization_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<MasterProduct, LegacyConversionError> {
        let id = parse_id("id", &self.id)?;
        let product_id = parse_id("product_id", &self.product_id)?;

        Ok(MasterProduct {
            id,
            product_id,
            organization_id,
            decommissioned_at: None,
            created_at,
            updated_at: None,
            ext_id: self.ext_id,
            gtin: self.gtin,
            name: self.name,
            details: Some(MasterProductDetails {
                header: self.header,
                trade_item: self.trade_item,
            }),
        })
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<Uuid, LegacyConversionError> {
    Uuid::parse_str(value).map_err(|source| LegacyConversionError::InvalidIdentifier {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(id: &str) -> LegacyMasterProduct {
        LegacyMasterProduct {
            id: id.to_string(),
            ext_id: "ext-9".to_string(),
            product_id: "0e3f8a52-1c55-4d87-9a7b-2f6a1b2c3d4e".to_string(),
            gtin: "06414893400012".to_string(),
            name: "Rye bread".to_string(),
            header: MasterProductHeader::default(),
            trade_item: MasterProductTradeItem::new("06414893400012"),
        }
    }

    #[test]
    fn test_invalid_id_reports_field() {
        let err = flat("not-a-uuid")
            .into_master_product(Uuid::new_v4(), Utc::now())
            .unwrap_err();
        let LegacyConversionError::InvalidIdentifier { field, value, .. } = &err;
        assert_eq!(*field, "id");
        assert_eq!(value, "not-a-uuid");
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn test_terse_has_no_flat_form() {
        let terse = MasterProduct::new(Uuid::new_v4(), "e", "g", "n");
        assert!(LegacyMasterProduct::from_master_product(&terse).is_none());
    }

    #[test]
    fn test_conversion_keeps_payload() {
        let org = Uuid::new_v4();
        let created = Utc::now();
        let product = flat("5d1b4c6e-6a0f-4e58-9d55-0b0f7f2a9d10")
            .into_master_product(org, created)
            .unwrap();
        assert_eq!(product.organization_id, org);
        assert_eq!(product.created_at, created);
        assert_eq!(
            product.trade_item().and_then(|t| t.gtin.as_deref()),
            Some("06414893400012")
        );

        let back = LegacyMasterProduct::from_master_product(&product).unwrap();
        assert_eq!(back, flat("5d1b4c6e-6a0f-4e58-9d55-0b0f7f2a9d10"));
    }
}
