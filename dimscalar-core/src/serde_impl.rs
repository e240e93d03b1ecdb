//! Serde support (feature `serde`).
//!
//! Scalars serialize as `{"value": <display value>, "unit": "<abbreviation>"}` and [`AnyScalar`] adds a `"kind"`
//! field. On the way back the unit text is resolved through the kind's registered units; a missing unit means
//! the standard unit.
//!
//! ```rust
//! use dimscalar_core::length::{Length, KILOMETER};
//!
//! let json = serde_json::to_string(&Length::new(1.5, KILOMETER)).unwrap();
//! assert_eq!(json, r#"{"value":1.5,"unit":"km"}"#);
//! let back: Length = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.unit(), KILOMETER);
//! ```

use crate::absolute::Abs;
use crate::dimension::{AbsoluteDimension, Dimension};
use crate::factory::{instantiate, AnyScalar};
use crate::kind::QuantityKind;
use crate::relative::Rel;
use crate::unit::{AnyUnit, Unit};
use core::fmt;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

const FIELDS: &[&str] = &["kind", "value", "unit"];

/// Fields read from a serialized scalar before its type is known.
struct RawScalar {
    kind: Option<QuantityKind>,
    value: f32,
    unit: Option<String>,
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Kind,
            Value,
            Unit,
        }

        struct RawScalarVisitor;

        impl<'de> Visitor<'de> for RawScalarVisitor {
            type Value = RawScalar;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Scalar with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<RawScalar, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut kind: Option<QuantityKind> = None;
                let mut value: Option<f32> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Kind => {
                            if kind.is_some() {
                                return Err(de::Error::duplicate_field("kind"));
                            }
                            kind = Some(map.next_value()?);
                        }
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(RawScalar { kind, value, unit })
            }
        }

        deserializer.deserialize_struct("Scalar", FIELDS, RawScalarVisitor)
    }
}

impl RawScalar {
    /// Resolves the unit text against `D`, rejecting a `kind` field that names another kind.
    fn typed_unit<D: Dimension, E: de::Error>(&self) -> Result<Unit<D>, E> {
        if let Some(kind) = self.kind.filter(|&k| k != D::KIND) {
            return Err(E::custom(format!("kind mismatch: expected {}, found {}", D::KIND, kind)));
        }
        match &self.unit {
            None => Ok(D::STANDARD_UNIT),
            Some(text) => Unit::<D>::lookup(text)
                .ok_or_else(|| E::custom(format!("unknown {} unit '{}'", D::KIND, text))),
        }
    }
}

fn serialize_scalar<S: Serializer>(
    serializer: S,
    kind: Option<QuantityKind>,
    value: f32,
    unit: &AnyUnit,
) -> Result<S::Ok, S::Error> {
    let len = if kind.is_some() { 3 } else { 2 };
    let mut state = serializer.serialize_struct("Scalar", len)?;
    if let Some(kind) = kind {
        state.serialize_field("kind", &kind)?;
    }
    state.serialize_field("value", &value)?;
    state.serialize_field("unit", &*unit.abbreviation())?;
    state.end()
}

impl<D: Dimension> Serialize for Rel<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_scalar(serializer, None, self.value(), self.unit().as_any())
    }
}

impl<'de, D: Dimension> Deserialize<'de> for Rel<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let raw = RawScalar::deserialize(deserializer)?;
        let unit = raw.typed_unit::<D, De::Error>()?;
        Ok(Rel::new(raw.value, unit))
    }
}

impl<A: AbsoluteDimension> Serialize for Abs<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_scalar(serializer, None, self.value(), self.unit().as_any())
    }
}

impl<'de, A: AbsoluteDimension> Deserialize<'de> for Abs<A> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let raw = RawScalar::deserialize(deserializer)?;
        let unit = raw.typed_unit::<A, De::Error>()?;
        Ok(Abs::new(raw.value, unit))
    }
}

impl Serialize for AnyScalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_scalar(serializer, Some(self.kind()), self.value(), &self.display_unit())
    }
}

impl<'de> Deserialize<'de> for AnyScalar {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let raw = RawScalar::deserialize(deserializer)?;
        let kind = raw.kind.ok_or_else(|| de::Error::missing_field("kind"))?;
        let unit = match &raw.unit {
            None => kind.standard_unit(),
            Some(text) => kind.find_unit(text),
        }
        .ok_or_else(|| {
            de::Error::custom(format!("unknown {} unit '{}'", kind, raw.unit.as_deref().unwrap_or("")))
        })?;
        instantiate(raw.value, unit).map_err(de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

impl Serialize for AnyUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.abbreviation())
    }
}

impl<D> Serialize for Unit<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_any().serialize(serializer)
    }
}

impl<'de, D: Dimension> Deserialize<'de> for Unit<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let text = String::deserialize(deserializer)?;
        Unit::<D>::lookup(&text)
            .ok_or_else(|| de::Error::custom(format!("unknown {} unit '{}'", D::KIND, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::absolute_temperature::{self, AbsoluteTemperature};
    use crate::length::{self, Length, LengthUnit};
    use crate::mass::{self, Mass};
    use crate::money_per_area::MoneyPerArea;

    #[test]
    fn relative_scalar_json() {
        let m = Mass::new(12.5, mass::GRAM);
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json, serde_json::json!({"value": 12.5, "unit": "g"}));
        let back: Mass = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.unit(), mass::GRAM);
    }

    #[test]
    fn missing_unit_means_standard_unit() {
        let l: Length = serde_json::from_str(r#"{"value": 3.0}"#).unwrap();
        assert_eq!(l.unit(), length::METER);
        assert_eq!(l.si(), 3.0);
    }

    #[test]
    fn rejects_unknown_unit_and_wrong_kind() {
        assert!(serde_json::from_str::<Length>(r#"{"value": 3.0, "unit": "kg"}"#).is_err());
        assert!(serde_json::from_str::<Length>(r#"{"kind": "Mass", "value": 3.0}"#).is_err());
        assert!(serde_json::from_str::<Length>(r#"{"unit": "m"}"#).is_err());
        assert!(serde_json::from_str::<Length>(r#"{"value": 1, "value": 2}"#).is_err());
    }

    #[test]
    fn absolute_scalar_keeps_offset_unit() {
        let t = AbsoluteTemperature::new(20.0, absolute_temperature::DEGREE_CELSIUS);
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["unit"], "dC");
        assert!((json["value"].as_f64().unwrap() - 20.0).abs() < 1e-3);
        let back: AbsoluteTemperature = serde_json::from_value(json).unwrap();
        assert!((back.si() - 293.15).abs() < 1e-3);
    }

    #[test]
    fn compound_units_round_trip() {
        let p: MoneyPerArea = serde_json::from_str(r#"{"value": 2.0, "unit": "USD/km^2"}"#).unwrap();
        assert!((p.si() - 2e-6).abs() < 1e-12);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["unit"], "USD/km^2");
    }

    #[test]
    fn any_scalar_carries_kind() {
        let any = AnyScalar::from(Length::new(2.0, length::KILOMETER));
        let json = serde_json::to_value(any).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "Length", "value": 2.0, "unit": "km"}));
        let back: AnyScalar = serde_json::from_value(json).unwrap();
        assert_eq!(back, any);
        assert!(serde_json::from_str::<AnyScalar>(r#"{"value": 2.0, "unit": "km"}"#).is_err());
        assert!(serde_json::from_str::<AnyScalar>(r#"{"kind": "Length", "value": 2.0, "unit": "kg"}"#).is_err());
    }

    #[test]
    fn units_as_strings() {
        assert_eq!(serde_json::to_string(&length::KILOMETER).unwrap(), r#""km""#);
        let unit: LengthUnit = serde_json::from_str(r#""kilometer""#).unwrap();
        assert_eq!(unit, length::KILOMETER);
        assert!(serde_json::from_str::<LengthUnit>(r#""kg""#).is_err());
    }
}
