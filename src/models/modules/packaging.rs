//! Packaging information module

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackagingInformationModule {
    #[serde(rename = "packaging", skip_serializing_if = "Option::is_none")]
    pub packagings: Option<Vec<Packaging>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Packaging {
    /// Processes the packaging can undergo in recycling programs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_recycling_process_type_code: Option<Vec<String>>,
    /// Dominant means used to transport, store, handle or display the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_type_code: Option<String>,
    #[serde(rename = "packagingMaterial", skip_serializing_if = "Option::is_none")]
    pub packaging_materials: Option<Vec<PackagingMaterial>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackagingMaterial {
    /// Code list `packagingMaterialTypeCode`
    pub packaging_material_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_packaging_material_recoverable: Option<bool>,
}
