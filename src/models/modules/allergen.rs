//! Allergen information module

use serde::{Deserialize, Serialize};

use crate::models::common::{EmphasisedMLString, OneOrGroup, flatten_groups};

/// Allergen information for a trade item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllergenInformationModule {
    /// Substances that might cause allergic reactions or intolerance, per
    /// regulation of the target market the item is published to. The flat
    /// generation wrote each entry as a nested list.
    #[serde(rename = "allergenRelatedInformation", skip_serializing_if = "Option::is_none")]
    pub allergen_related_informations: Option<Vec<OneOrGroup<AllergenRelatedInformation>>>,
}

impl AllergenInformationModule {
    /// Allergen related information, nested entries flattened
    pub fn related_informations(&self) -> Vec<&AllergenRelatedInformation> {
        flatten_groups(self.allergen_related_informations.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllergenRelatedInformation {
    /// Agency that controls the allergen definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergen_specification_agency: Option<String>,
    /// Name and version of the regulation defining the allergen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergen_specification_name: Option<String>,
    /// Presence or absence of allergens as one statement
    #[serde(rename = "allergenStatement", skip_serializing_if = "Option::is_none")]
    pub allergen_statements: Option<Vec<EmphasisedMLString>>,
    /// Presence or absence of allergens, per allergen
    #[serde(rename = "allergen", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
}

impl AllergenRelatedInformation {
    /// Allergens with the given level of containment, e.g. `"CONTAINS"`
    pub fn allergens_with_containment<'a>(
        &'a self,
        level: &'a str,
    ) -> impl Iterator<Item = &'a Allergen> + 'a {
        self.allergens
            .iter()
            .flatten()
            .filter(move |a| a.level_of_containment_code == level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Allergen {
    /// Code list `allergenTypeCode`
    pub allergen_type_code: String,
    /// Code list `levelOfContainmentCode`
    pub level_of_containment_code: String,
}

impl Allergen {
    pub fn new(type_code: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            allergen_type_code: type_code.into(),
            level_of_containment_code: level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_filter() {
        let info = AllergenRelatedInformation {
            allergens: Some(vec![
                Allergen::new("AM", "CONTAINS"),
                Allergen::new("AN", "MAY_CONTAIN"),
                Allergen::new("AW", "CONTAINS"),
            ]),
            ..Default::default()
        };
        let codes: Vec<&str> = info
            .allergens_with_containment("CONTAINS")
            .map(|a| a.allergen_type_code.as_str())
            .collect();
        assert_eq!(codes, vec!["AM", "AW"]);
    }

    #[test]
    fn test_nested_related_information() {
        let json = r#"{"allergenRelatedInformation":[[{"allergenSpecificationAgency":"EU","allergen":[{"allergenTypeCode":"AM","levelOfContainmentCode":"CONTAINS"}]}],{"allergenSpecificationAgency":"FDA"}]}"#;
        let module: AllergenInformationModule = serde_json::from_str(json).unwrap();
        let agencies: Vec<Option<&str>> = module
            .related_informations()
            .into_iter()
            .map(|i| i.allergen_specification_agency.as_deref())
            .collect();
        assert_eq!(agencies, vec![Some("EU"), Some("FDA")]);
        assert_eq!(serde_json::to_string(&module).unwrap(), json);
    }

    #[test]
    fn test_allergen_fields_required() {
        let result = serde_json::from_str::<Allergen>(r#"{"allergenTypeCode":"AM"}"#);
        assert!(result.is_err());
    }
}
