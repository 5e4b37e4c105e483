//! Product attribute module
//!
//! Freely defined product attributes, collected into groups. An attribute
//! should carry exactly one of a string, numeric or boolean value. That rule
//! is not enforced on decode; [`ProductAttribute::value`] returns whichever
//! value is present.

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DgProductAttributeModule {
    #[serde(rename = "productAttributeGroup", skip_serializing_if = "Option::is_none")]
    pub product_attribute_groups: Option<Vec<ProductAttributeGroup>>,
}

impl DgProductAttributeModule {
    pub fn group(&self, ext_id: &str) -> Option<&ProductAttributeGroup> {
        self.product_attribute_groups
            .iter()
            .flatten()
            .find(|g| g.product_attribute_group_ext_id == ext_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeGroup {
    /// Product-unique, assigned by the data provider
    #[serde(rename = "productAttributeGroupExtId")]
    pub product_attribute_group_ext_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attribute_group_sequence: Option<String>,
    #[serde(rename = "productAttributeGroupName", skip_serializing_if = "Option::is_none")]
    pub product_attribute_group_names: Option<Vec<MLString>>,
    #[serde(rename = "productAttribute", skip_serializing_if = "Option::is_none")]
    pub product_attributes: Option<Vec<ProductAttribute>>,
}

impl ProductAttributeGroup {
    pub fn new(ext_id: impl Into<String>) -> Self {
        Self {
            product_attribute_group_ext_id: ext_id.into(),
            product_attribute_group_sequence: None,
            product_attribute_group_names: None,
            product_attributes: None,
        }
    }

    pub fn attribute(&self, ext_id: &str) -> Option<&ProductAttribute> {
        self.product_attributes
            .iter()
            .flatten()
            .find(|a| a.product_attribute_ext_id == ext_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    /// Group-unique, assigned by the data provider
    #[serde(rename = "productAttributeExtId")]
    pub product_attribute_ext_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attribute_sequence: Option<String>,
    /// Code list `productAttributeTypeCode`
    pub product_attribute_type_code: String,
    /// Whether the attribute can be used as a facet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_facet_attribute: Option<bool>,
    #[serde(rename = "productAttributeName", skip_serializing_if = "Option::is_none")]
    pub product_attribute_names: Option<Vec<MLString>>,
    #[serde(rename = "productAttributeValueString", skip_serializing_if = "Option::is_none")]
    pub product_attribute_value_strings: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attribute_value_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attribute_value_boolean: Option<bool>,
}

/// Typed view of the value carried by a [`ProductAttribute`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductAttributeValue<'a> {
    Text(&'a [MLString]),
    Numeric(f64),
    Boolean(bool),
}

impl ProductAttribute {
    pub fn new(ext_id: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            product_attribute_ext_id: ext_id.into(),
            product_attribute_sequence: None,
            product_attribute_type_code: type_code.into(),
            is_facet_attribute: None,
            product_attribute_names: None,
            product_attribute_value_strings: None,
            product_attribute_value_numeric: None,
            product_attribute_value_boolean: None,
        }
    }

    pub fn with_text(mut self, values: Vec<MLString>) -> Self {
        self.product_attribute_value_strings = Some(values);
        self
    }

    pub fn with_numeric(mut self, value: f64) -> Self {
        self.product_attribute_value_numeric = Some(value);
        self
    }

    pub fn with_boolean(mut self, value: bool) -> Self {
        self.product_attribute_value_boolean = Some(value);
        self
    }

    /// The attribute value. Text wins over numeric, numeric over boolean,
    /// when more than one is set.
    pub fn value(&self) -> Option<ProductAttributeValue<'_>> {
        if let Some(strings) = &self.product_attribute_value_strings {
            return Some(ProductAttributeValue::Text(strings));
        }
        if let Some(n) = self.product_attribute_value_numeric {
            return Some(ProductAttributeValue::Numeric(n));
        }
        self.product_attribute_value_boolean
            .map(ProductAttributeValue::Boolean)
    }

    /// Number of value fields set; a well-formed attribute has exactly one
    pub fn value_count(&self) -> usize {
        [
            self.product_attribute_value_strings.is_some(),
            self.product_attribute_value_numeric.is_some(),
            self.product_attribute_value_boolean.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
