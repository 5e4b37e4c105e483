//! Quantity + unit value type
//!
//! GDSN pairs a magnitude with a unit-of-measure code in dozens of places
//! (weights, dimensions, nutrient amounts, yields, temperatures). All of them
//! share one wire shape, `{"$": <number>, "<unit key>": <code>}`, where only the
//! unit key differs between the generic and the temperature vocabulary.
//!
//! [`Quantity`] models that shape once; the [`UnitKind`] marker selects the
//! unit key. The magnitude is kept as a [`serde_json::Number`], so integer
//! magnitudes re-encode as integers and decimals as `f64`.
//!
//! ```rust
//! use master_product::models::{Measurement, TemperatureMeasurement};
//!
//! let energy = Measurement::new(120, "KJO");
//! assert_eq!(
//!     serde_json::to_string(&energy).unwrap(),
//!     r#"{"$":120,"@measurementUnitCode":"KJO"}"#
//! );
//!
//! let chilled = TemperatureMeasurement::new(4, "CEL");
//! assert_eq!(chilled.as_i64(), Some(4));
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// JSON key holding the magnitude of every quantity
pub const VALUE_KEY: &str = "$";

/// Unit vocabulary a [`Quantity`] is expressed in
pub trait UnitKind {
    /// JSON key carrying the unit code
    const UNIT_KEY: &'static str;
}

/// Generic unit of measure (code list `measurementUnitCode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasurementUnit;

impl UnitKind for MeasurementUnit {
    const UNIT_KEY: &'static str = "@measurementUnitCode";
}

/// Temperature unit of measure (code list `temperatureMeasurementUnitCode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TemperatureUnit;

impl UnitKind for TemperatureUnit {
    const UNIT_KEY: &'static str = "@temperatureMeasurementUnitCode";
}

/// Measurement value with a generic unit of measure code
pub type Measurement = Quantity<MeasurementUnit>;

/// Temperature value with a temperature unit code
pub type TemperatureMeasurement = Quantity<TemperatureUnit>;

/// A numeric magnitude paired with a unit code from an external vocabulary.
///
/// No arithmetic or unit conversion is offered; the unit code is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<U> {
    /// Magnitude as it appeared on the wire
    pub value: Number,
    /// Unit code, e.g. `"GRM"`, `"KJO"`, `"CEL"`
    pub unit: String,
    kind: PhantomData<U>,
}

impl<U: UnitKind> Quantity<U> {
    /// Create a quantity from an integer magnitude
    pub fn new(value: impl Into<Number>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
            kind: PhantomData,
        }
    }

    /// Create a quantity from a floating point magnitude
    ///
    /// Returns `None` for NaN and infinities, which JSON cannot carry.
    pub fn from_f64(value: f64, unit: impl Into<String>) -> Option<Self> {
        Number::from_f64(value).map(|value| Self {
            value,
            unit: unit.into(),
            kind: PhantomData,
        })
    }

    /// Magnitude as it appeared on the wire
    pub fn value(&self) -> &Number {
        &self.value
    }

    /// Magnitude as a float
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// Magnitude as an integer, if it was encoded as one
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// Unit code
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// JSON key used for the unit code of this quantity kind
    pub fn unit_key() -> &'static str {
        U::UNIT_KEY
    }
}

impl<U: UnitKind> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(VALUE_KEY, &self.value)?;
        map.serialize_entry(U::UNIT_KEY, &self.unit)?;
        map.end()
    }
}

impl<'de, U: UnitKind> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QuantityVisitor(PhantomData))
    }
}

struct QuantityVisitor<U>(PhantomData<U>);

impl<'de, U: UnitKind> Visitor<'de> for QuantityVisitor<U> {
    type Value = Quantity<U>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an object with `{}` and `{}`", VALUE_KEY, U::UNIT_KEY)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut value: Option<Number> = None;
        let mut unit: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == VALUE_KEY {
                if value.is_some() {
                    return Err(de::Error::duplicate_field(VALUE_KEY));
                }
                value = Some(map.next_value()?);
            } else if key == U::UNIT_KEY {
                if unit.is_some() {
                    return Err(de::Error::duplicate_field(U::UNIT_KEY));
                }
                unit = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(Quantity {
            value: value.ok_or_else(|| de::Error::missing_field(VALUE_KEY))?,
            unit: unit.ok_or_else(|| de::Error::missing_field(U::UNIT_KEY))?,
            kind: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_serialization() {
        let m = Measurement::new(750, "MLT");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"$":750,"@measurementUnitCode":"MLT"}"#);
    }

    #[test]
    fn test_temperature_uses_its_own_unit_key() {
        let t = TemperatureMeasurement::new(-18, "CEL");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"$":-18,"@temperatureMeasurementUnitCode":"CEL"}"#);
        assert_eq!(TemperatureMeasurement::unit_key(), "@temperatureMeasurementUnitCode");
    }

    #[test]
    fn test_integer_magnitude_stays_integer() {
        let m: Measurement = serde_json::from_str(r#"{"$":120,"@measurementUnitCode":"KJO"}"#).unwrap();
        assert_eq!(m.as_i64(), Some(120));
        assert_eq!(m.as_f64(), Some(120.0));
        assert_eq!(m.unit(), "KJO");
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"$":120,"@measurementUnitCode":"KJO"}"#
        );
    }

    #[test]
    fn test_decimal_magnitude() {
        let m: Measurement = serde_json::from_str(r#"{"@measurementUnitCode":"GL","$":6.5}"#).unwrap();
        assert_eq!(m.as_f64(), Some(6.5));
        assert_eq!(m.as_i64(), None);
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        assert!(Measurement::from_f64(f64::NAN, "GRM").is_none());
        assert!(Measurement::from_f64(12.25, "GRM").is_some());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let m: Measurement =
            serde_json::from_str(r#"{"$":1,"@measurementUnitCode":"KGM","@precision":"x"}"#).unwrap();
        assert_eq!(m, Measurement::new(1, "KGM"));
    }

    #[test]
    fn test_missing_unit_fails() {
        let err = serde_json::from_str::<Measurement>(r#"{"$":1}"#).unwrap_err();
        assert!(err.to_string().contains("@measurementUnitCode"));
    }

    #[test]
    fn test_wrong_unit_key_fails() {
        // a temperature unit key does not satisfy a generic measurement
        let result =
            serde_json::from_str::<Measurement>(r#"{"$":4,"@temperatureMeasurementUnitCode":"CEL"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_string_magnitude_fails() {
        let result = serde_json::from_str::<Measurement>(r#"{"$":"120","@measurementUnitCode":"KJO"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_value_fails() {
        let result =
            serde_json::from_str::<Measurement>(r#"{"$":1,"$":2,"@measurementUnitCode":"KJO"}"#);
        assert!(result.is_err());
    }
}
