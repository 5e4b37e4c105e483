//! Shared value types used across the trade item and its modules

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A text value tagged with a language code.
///
/// Collections of `MLString` carry the same statement once per language. The
/// language code is opaque (it is not checked against ISO 639).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MLString {
    /// Text
    #[serde(rename = "$")]
    pub value: String,
    /// Language code, e.g. `"en"`, `"fi"`. Code list records of the flat
    /// generation spell the key `@languegeCode`; both are read.
    #[serde(rename = "@languageCode", alias = "@languegeCode")]
    pub language_code: String,
}

impl MLString {
    /// Create a localized string
    pub fn new(value: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language_code: language_code.into(),
        }
    }
}

/// Substring emphasis. Emphases on one text may overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    /// Start index in characters from the beginning of the string, zero based
    pub start_at: i64,
    /// Length in characters
    pub length: i64,
}

impl Emphasis {
    pub fn new(start_at: i64, length: i64) -> Self {
        Self { start_at, length }
    }

    /// Exclusive end index, saturating at `i64::MAX`
    pub fn end(&self) -> i64 {
        self.start_at.saturating_add(self.length)
    }

    /// Whether two emphasis ranges share at least one character
    pub fn overlaps(&self, other: &Emphasis) -> bool {
        self.start_at < other.end() && other.start_at < self.end()
    }
}

/// A localized string with substring emphasis ranges
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EmphasisedMLString {
    #[serde(rename = "$")]
    pub value: String,
    #[serde(rename = "@languageCode")]
    pub language_code: String,
    /// Emphasis ranges into `value`
    #[serde(rename = "x_emphasis", skip_serializing_if = "Option::is_none")]
    pub emphases: Option<Vec<Emphasis>>,
}

impl EmphasisedMLString {
    pub fn new(value: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language_code: language_code.into(),
            emphases: None,
        }
    }

    /// Add an emphasis range
    pub fn with_emphasis(mut self, start_at: i64, length: i64) -> Self {
        self.emphases
            .get_or_insert_with(Vec::new)
            .push(Emphasis::new(start_at, length));
        self
    }

    /// The text without its emphases
    pub fn to_ml_string(&self) -> MLString {
        MLString::new(self.value.clone(), self.language_code.clone())
    }
}

impl From<MLString> for EmphasisedMLString {
    fn from(s: MLString) -> Self {
        Self {
            value: s.value,
            language_code: s.language_code,
            emphases: None,
        }
    }
}

impl From<EmphasisedMLString> for MLString {
    fn from(s: EmphasisedMLString) -> Self {
        Self {
            value: s.value,
            language_code: s.language_code,
        }
    }
}

/// Lookups over "same text in N languages" collections
pub trait LocalizedText {
    /// Text for the given language code, first match wins
    fn text_for(&self, language_code: &str) -> Option<&str>;

    /// Language codes in document order, duplicates included
    fn languages(&self) -> Vec<&str>;

    /// Whether every language code appears at most once
    fn has_unique_languages(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.languages().into_iter().all(|code| seen.insert(code))
    }
}

impl LocalizedText for [MLString] {
    fn text_for(&self, language_code: &str) -> Option<&str> {
        self.iter()
            .find(|s| s.language_code == language_code)
            .map(|s| s.value.as_str())
    }

    fn languages(&self) -> Vec<&str> {
        self.iter().map(|s| s.language_code.as_str()).collect()
    }
}

impl LocalizedText for [EmphasisedMLString] {
    fn text_for(&self, language_code: &str) -> Option<&str> {
        self.iter()
            .find(|s| s.language_code == language_code)
            .map(|s| s.value.as_str())
    }

    fn languages(&self) -> Vec<&str> {
        self.iter().map(|s| s.language_code.as_str()).collect()
    }
}

/// Code list value maintained by an external code list agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationValue {
    pub enumeration_value: String,
}

impl EnumerationValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            enumeration_value: value.into(),
        }
    }
}

/// Reference to values of an externally maintained code list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCodeValue {
    /// The name of the agency that manages the code list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_agency_name: Option<String>,
    /// The name of the code list maintained by the agency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code_list_name: Option<String>,
    /// Values taken from the code list
    #[serde(rename = "enumerationValueInformation", skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
}

/// Versioned external code list reference, e.g. a FAO catch zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCodeReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code_list_name: Option<String>,
    /// The version of the code list maintained by the agency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code_list_version: Option<String>,
    #[serde(rename = "enumerationValueInformation", skip_serializing_if = "Option::is_none")]
    pub enumeration_values: Option<Vec<EnumerationValue>>,
}

/// Country identified by a `countryCode` code list value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CountryReference {
    pub country_code: String,
}

impl CountryReference {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }
}

/// Activity (e.g. bottling) performed on an item and where it happened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductActivityDetail {
    /// Code list `productActivityTypeCode`
    pub product_activity_type_code: String,
    #[serde(rename = "countryOfActivity", skip_serializing_if = "Option::is_none")]
    pub countries_of_activity: Option<Vec<CountryReference>>,
    /// Zone or region, for example a FAO catch zone
    #[serde(
        rename = "productActivityRegionZoneCodeReference",
        skip_serializing_if = "Option::is_none"
    )]
    pub region_zone_code_references: Option<Vec<ExternalCodeReference>>,
    /// Free text describing the activity region
    #[serde(rename = "x_statement", skip_serializing_if = "Option::is_none")]
    pub statements: Option<Vec<MLString>>,
}

/// Origin and activity information, shared by items and ingredients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOfActivity {
    /// Country the item originated from or was processed in, as text
    #[serde(rename = "countryOfOriginStatement", skip_serializing_if = "Option::is_none")]
    pub country_of_origin_statements: Option<Vec<MLString>>,
    /// Places that have no ISO code: cities, mountain ranges, regions
    #[serde(rename = "provenanceStatement", skip_serializing_if = "Option::is_none")]
    pub provenance_statements: Option<Vec<MLString>>,
    #[serde(rename = "countryOfOrigin", skip_serializing_if = "Option::is_none")]
    pub countries_of_origin: Option<Vec<CountryReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_activity_details: Option<Vec<ProductActivityDetail>>,
}

/// A party identified by GLN in a specific role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartyInRole {
    /// Global Location Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gln: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_address: Option<String>,
}

/// Attribute value pair information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AvpList {
    /// Entries are written as groups of pairs by most producers
    #[serde(rename = "stringAVP", skip_serializing_if = "Option::is_none")]
    pub string_avps: Option<Vec<OneOrGroup<StringAvp>>>,
}

impl AvpList {
    /// All attribute value pairs, groups flattened, in document order
    pub fn attributes(&self) -> Vec<&StringAvp> {
        flatten_groups(self.string_avps.as_deref())
    }

    /// Value of the first pair with the given attribute name
    pub fn value_of(&self, attribute_name: &str) -> Option<&str> {
        self.attributes()
            .into_iter()
            .find(|avp| avp.attribute_name == attribute_name)
            .map(|avp| avp.value.as_str())
    }
}

/// A named string attribute value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringAvp {
    #[serde(rename = "$")]
    pub value: String,
    /// Normalised attribute name
    #[serde(rename = "@attributeName")]
    pub attribute_name: String,
}

impl StringAvp {
    pub fn new(value: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            attribute_name: attribute_name.into(),
        }
    }
}

/// List element that is either a single object or a nested list of them.
///
/// Some producers declare list elements as lists themselves, so the same
/// field arrives as `[{..}, {..}]` or `[[{..}], [{..}]]`. The element keeps
/// the shape it was read in and is written back the same way.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum OneOrGroup<T> {
    One(T),
    Group(Vec<T>),
}

impl<T> OneOrGroup<T> {
    /// The contained objects, one or many
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrGroup::One(item) => std::slice::from_ref(item),
            OneOrGroup::Group(items) => items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrGroup::One(item) => vec![item],
            OneOrGroup::Group(items) => items,
        }
    }
}

impl<T> From<T> for OneOrGroup<T> {
    fn from(item: T) -> Self {
        OneOrGroup::One(item)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrGroup<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OneOrGroupVisitor(PhantomData))
    }
}

struct OneOrGroupVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrGroupVisitor<T> {
    type Value = OneOrGroup<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object or a list of objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(OneOrGroup::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<T>::deserialize(SeqAccessDeserializer::new(seq)).map(OneOrGroup::Group)
    }
}

/// Flatten optional grouped entries into one list of references
pub fn flatten_groups<T>(entries: Option<&[OneOrGroup<T>]>) -> Vec<&T> {
    entries
        .into_iter()
        .flatten()
        .flat_map(OneOrGroup::as_slice)
        .collect()
}

/// Accepts either a single object or a list of objects.
///
/// The flat document generation wrote some lists as a single object.
/// Errors inside an element are reported as they are, with their field.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrGroup<T>>::deserialize(deserializer)?.map(OneOrGroup::into_vec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ml_string_wire_shape() {
        let s = MLString::new("Milk chocolate", "en");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"$":"Milk chocolate","@languageCode":"en"}"#);
    }

    #[test]
    fn test_emphasis_overlap() {
        let a = Emphasis::new(0, 5);
        let b = Emphasis::new(3, 4);
        let c = Emphasis::new(5, 2);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlapping_emphases_round_trip() {
        let json = r#"{"$":"wheat flour","@languageCode":"en","x_emphasis":[{"startAt":0,"length":5},{"startAt":2,"length":6}]}"#;
        let s: EmphasisedMLString = serde_json::from_str(json).unwrap();
        let emphases = s.emphases.as_ref().unwrap();
        assert_eq!(emphases.len(), 2);
        assert!(emphases[0].overlaps(&emphases[1]));
        assert_eq!(serde_json::to_string(&s).unwrap(), json);
    }

    #[test]
    fn test_emphasised_without_emphasis_omits_key() {
        let s = EmphasisedMLString::new("salt", "en");
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("x_emphasis"));
    }

    #[test]
    fn test_localized_lookup() {
        let texts = vec![
            MLString::new("Milk", "en"),
            MLString::new("Maito", "fi"),
            MLString::new("Mjölk", "sv"),
        ];
        assert_eq!(texts.text_for("fi"), Some("Maito"));
        assert_eq!(texts.text_for("de"), None);
        assert_eq!(texts.languages(), vec!["en", "fi", "sv"]);
        assert!(texts.has_unique_languages());
    }

    #[test]
    fn test_duplicate_languages_detected_not_rejected() {
        let json = r#"[{"$":"a","@languageCode":"en"},{"$":"b","@languageCode":"en"}]"#;
        let texts: Vec<MLString> = serde_json::from_str(json).unwrap();
        assert!(!texts.has_unique_languages());
        assert_eq!(texts.text_for("en"), Some("a"));
    }

    #[test]
    fn test_overlap_near_i64_max_does_not_overflow() {
        let a = Emphasis::new(0, 1);
        let b = Emphasis::new(i64::MAX, 1);
        assert_eq!(b.end(), i64::MAX);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(Emphasis::new(i64::MAX - 1, 5).overlaps(&Emphasis::new(i64::MAX - 2, i64::MAX)));
    }

    #[test]
    fn test_external_code_value_values_optional() {
        let absent: ExternalCodeValue =
            serde_json::from_str(r#"{"externalCodeListName":"R"}"#).unwrap();
        assert_eq!(absent.enumeration_values, None);
        assert_eq!(
            serde_json::to_string(&absent).unwrap(),
            r#"{"externalCodeListName":"R"}"#
        );

        let null: ExternalCodeValue = serde_json::from_str(
            r#"{"externalCodeListName":"R","enumerationValueInformation":null}"#,
        )
        .unwrap();
        assert_eq!(null.enumeration_values, None);

        let reference: ExternalCodeReference =
            serde_json::from_str(r#"{"enumerationValueInformation":null}"#).unwrap();
        assert_eq!(reference.enumeration_values, None);

        let value: ExternalCodeValue = serde_json::from_str(
            r#"{"externalAgencyName":"EU","enumerationValueInformation":[{"enumerationValue":"R36"}]}"#,
        )
        .unwrap();
        assert_eq!(value.external_agency_name.as_deref(), Some("EU"));
        assert_eq!(value.external_code_list_name, None);
        assert_eq!(value.enumeration_values, Some(vec![EnumerationValue::new("R36")]));
    }

    #[test]
    fn test_string_avp_groups_and_flat_entries() {
        let grouped = r#"{"stringAVP":[[{"$":"v","@attributeName":"n"},{"$":"w","@attributeName":"m"}]]}"#;
        let avps: AvpList = serde_json::from_str(grouped).unwrap();
        assert_eq!(avps.value_of("m"), Some("w"));
        assert_eq!(avps.attributes().len(), 2);
        assert_eq!(serde_json::to_string(&avps).unwrap(), grouped);

        let flat = r#"{"stringAVP":[{"$":"v","@attributeName":"n"}]}"#;
        let avps: AvpList = serde_json::from_str(flat).unwrap();
        assert_eq!(avps.attributes(), vec![&StringAvp::new("v", "n")]);
        assert_eq!(serde_json::to_string(&avps).unwrap(), flat);
    }

    #[test]
    fn test_group_element_errors_name_the_field() {
        let err = serde_json::from_str::<AvpList>(r#"{"stringAVP":[[{"$":"v"}]]}"#).unwrap_err();
        assert!(err.to_string().contains("@attributeName"), "{err}");

        let err = serde_json::from_str::<AvpList>(r#"{"stringAVP":["v"]}"#).unwrap_err();
        assert!(err.to_string().contains("an object or a list of objects"), "{err}");
    }

    #[test]
    fn test_misspelt_language_key_read() {
        let s: MLString = serde_json::from_str(r#"{"$":"Kilo","@languegeCode":"fi"}"#).unwrap();
        assert_eq!(s, MLString::new("Kilo", "fi"));
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"$":"Kilo","@languageCode":"fi"}"#
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn emphases() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((0i64..200, 0i64..50), 0..6)
    }

    proptest! {
        /// Emphasis ranges survive encoding as given, overlapping or not.
        #[test]
        fn emphasis_round_trips_unchanged(text in "[a-zA-Z ,.]{0,40}", ranges in emphases()) {
            let mut s = EmphasisedMLString::new(text, "en");
            for (start, length) in &ranges {
                s = s.with_emphasis(*start, *length);
            }
            let json = serde_json::to_string(&s).unwrap();
            let back: EmphasisedMLString = serde_json::from_str(&json).unwrap();
            let got: Vec<(i64, i64)> = back
                .emphases
                .iter()
                .flatten()
                .map(|e| (e.start_at, e.length))
                .collect();
            prop_assert_eq!(got, ranges);
            prop_assert_eq!(back, s);
        }

        /// Localized text lists keep their order, duplicates included.
        #[test]
        fn ml_string_list_order(entries in prop::collection::vec(("[a-z]{0,12}", "[a-z]{2}"), 0..8)) {
            let list: Vec<MLString> = entries
                .iter()
                .map(|(value, lang)| MLString::new(value.clone(), lang.clone()))
                .collect();
            let json = serde_json::to_string(&list).unwrap();
            let back: Vec<MLString> = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, list);
        }
    }
}
