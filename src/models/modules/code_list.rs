//! Internal code list module

use serde::{Deserialize, Serialize};

use crate::models::common::MLString;

/// Code lists associated with the product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DgCodeListModule {
    #[serde(rename = "codeList", skip_serializing_if = "Option::is_none")]
    pub code_lists: Option<Vec<CodeList>>,
}

impl DgCodeListModule {
    /// Find a code list by name
    pub fn code_list(&self, name: &str) -> Option<&CodeList> {
        self.code_lists
            .iter()
            .flatten()
            .find(|list| list.code_list_name == name)
    }
}

/// A GDSN code list, either internal or maintained by an external agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeList {
    pub code_list_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_external_code_list: Option<bool>,
    #[serde(rename = "codeListRecord", skip_serializing_if = "Option::is_none")]
    pub code_list_records: Option<Vec<CodeListRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code_list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code_list_version: Option<String>,
}

impl CodeList {
    pub fn new(code_list_name: impl Into<String>) -> Self {
        Self {
            code_list_name: code_list_name.into(),
            is_external_code_list: None,
            code_list_records: None,
            external_agency_name: None,
            external_code_list_name: None,
            external_code_list_version: None,
        }
    }

    /// Look up a record by its code
    pub fn record(&self, code: &str) -> Option<&CodeListRecord> {
        self.code_list_records
            .iter()
            .flatten()
            .find(|record| record.code == code)
    }
}

/// Single record of a code list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeListRecord {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<MLString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<MLString>>,
}

impl CodeListRecord {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            description: None,
            label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::LocalizedText;

    #[test]
    fn test_record_lookup() {
        let json = r#"{
            "codeList": [{
                "codeListName": "shelfPlacement",
                "isExternalCodeList": false,
                "codeListRecord": [
                    {"code": "TOP", "label": [{"$": "Top shelf", "@languageCode": "en"}]},
                    {"code": "EYE"}
                ]
            }]
        }"#;
        let module: DgCodeListModule = serde_json::from_str(json).unwrap();
        let list = module.code_list("shelfPlacement").unwrap();
        let top = list.record("TOP").unwrap();
        assert_eq!(top.label.as_deref().unwrap().text_for("en"), Some("Top shelf"));
        assert!(list.record("EYE").unwrap().label.is_none());
        assert!(module.code_list("missing").is_none());
    }

    #[test]
    fn test_code_list_name_required() {
        let result = serde_json::from_str::<CodeList>(r#"{"isExternalCodeList": true}"#);
        assert!(result.is_err());
    }
}
