//! Unit types: the erased [`AnyUnit`] and the dimension-bound [`Unit<D>`].

use crate::dimension::{AbsoluteDimension, Dimension, MoneyPerDimension, SiDimensions};
use crate::error::{QuantityError, Result};
use crate::kind::QuantityKind;
use crate::units::money::MoneyDim;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Long name, abbreviation and extra text forms of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct UnitNames {
    name: &'static str,
    abbreviation: &'static str,
    aliases: &'static [&'static str],
}

impl UnitNames {
    const fn new(
        name: &'static str,
        abbreviation: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            abbreviation,
            aliases,
        }
    }

    fn forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.abbreviation, self.name]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    fn matches(&self, text: &str) -> bool {
        self.forms().any(|form| form == text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Label {
    Named(UnitNames),
    MoneyPer { money: UnitNames, per: UnitNames },
    Si(SiDimensions),
}

impl Label {
    /// Names of a plain unit; compound labels have none of their own.
    const fn names(self) -> UnitNames {
        match self {
            Label::Named(names) => names,
            Label::MoneyPer { .. } | Label::Si(_) => UnitNames::new("", "", &[]),
        }
    }
}

/// A unit whose kind is only known at runtime.
///
/// A unit converts between values expressed in it and the kind's standard (SI) unit:
/// `si = value * scale + offset`. Only absolute kinds use a non-zero offset.
///
/// ```rust
/// use dimscalar_core::length::KILOMETER;
/// use dimscalar_core::{AnyUnit, QuantityKind};
///
/// let km: AnyUnit = KILOMETER.erase();
/// assert_eq!(km.kind(), QuantityKind::Length);
/// assert_eq!(km.to_si(1.5), 1500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnyUnit {
    kind: QuantityKind,
    label: Label,
    scale: f64,
    offset: f64,
}

impl AnyUnit {
    /// An anonymous SI unit with the given base exponents (scale 1).
    ///
    /// The dispatch factory has no concrete type for these units.
    pub const fn si(dimensions: SiDimensions) -> Self {
        Self {
            kind: QuantityKind::Si,
            label: Label::Si(dimensions),
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Builds a money-per unit at runtime, e.g. `USD` per `m^2`.
    ///
    /// Fails with [`QuantityError::IncompatibleKind`] when `money` is not a money unit, and with
    /// [`QuantityError::UnrecognizedUnit`] when no money-per kind has `per`'s kind as denominator.
    pub fn money_per(money: AnyUnit, per: AnyUnit) -> Result<AnyUnit> {
        if money.kind != QuantityKind::Money {
            return Err(QuantityError::incompatible(QuantityKind::Money, money.kind));
        }
        let Some(kind) = QuantityKind::money_per(per.kind) else {
            return Err(QuantityError::UnrecognizedUnit {
                unit: format!("{}/{}", money.abbreviation(), per.abbreviation()),
                kind: per.kind,
            });
        };
        Ok(AnyUnit {
            kind,
            label: Label::MoneyPer {
                money: money.label.names(),
                per: per.label.names(),
            },
            scale: money.scale / per.scale,
            offset: 0.0,
        })
    }

    /// Kind this unit belongs to.
    pub const fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// Factor from this unit to the kind's standard unit.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Origin offset in the standard unit (absolute kinds only).
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// `true` for the kind's standard unit.
    pub fn is_standard(&self) -> bool {
        self.kind.standard_unit().map_or(self.kind == QuantityKind::Si, |u| u == *self)
    }

    /// The standard unit of this unit's kind.
    pub fn standard_unit(&self) -> AnyUnit {
        self.kind.standard_unit().unwrap_or(*self)
    }

    /// Base exponents of the unit.
    pub fn si_dimensions(&self) -> SiDimensions {
        match self.label {
            Label::Si(dims) => dims,
            _ => self.kind.si_dimensions().unwrap_or_default(),
        }
    }

    /// Long name, e.g. `"kilometer"` or `"euro per square meter"`.
    pub fn name(&self) -> Cow<'static, str> {
        match self.label {
            Label::Named(names) => Cow::Borrowed(names.name),
            Label::MoneyPer { money, per } => Cow::Owned(format!("{} per {}", money.name, per.name)),
            Label::Si(dims) => Cow::Owned(dims.to_string()),
        }
    }

    /// Display abbreviation, e.g. `"km"` or `"EUR/m^2"`.
    pub fn abbreviation(&self) -> Cow<'static, str> {
        match self.label {
            Label::Named(names) => Cow::Borrowed(names.abbreviation),
            Label::MoneyPer { money, per } => {
                Cow::Owned(format!("{}/{}", money.abbreviation, per.abbreviation))
            }
            Label::Si(dims) => Cow::Owned(dims.to_string()),
        }
    }

    /// Every text form that resolves to this unit when parsing.
    pub fn text_forms(&self) -> Vec<Cow<'static, str>> {
        match self.label {
            Label::Named(names) => names.forms().map(Cow::Borrowed).collect(),
            Label::MoneyPer { money, per } => money
                .forms()
                .flat_map(|m| per.forms().map(move |p| Cow::Owned(format!("{m}/{p}"))))
                .collect(),
            Label::Si(dims) => vec![Cow::Owned(dims.to_string())],
        }
    }

    /// Exact match of `text` against the unit's text forms.
    pub fn matches_text(&self, text: &str) -> bool {
        match self.label {
            Label::Named(names) => names.matches(text),
            Label::MoneyPer { money, per } => text
                .split_once('/')
                .is_some_and(|(m, p)| money.matches(m.trim()) && per.matches(p.trim())),
            Label::Si(dims) => dims.to_string() == text,
        }
    }

    /// Converts a value in this unit to the standard unit.
    #[inline]
    pub fn to_si(&self, value: f32) -> f32 {
        (value as f64 * self.scale + self.offset) as f32
    }

    /// Converts a standard-unit value to this unit.
    #[inline]
    pub fn from_si(&self, si: f32) -> f32 {
        ((si as f64 - self.offset) / self.scale) as f32
    }

    /// Resolves `"<money>/<per>"` text for a money-per kind by looking up both sides.
    pub(crate) fn parse_money_per(kind: QuantityKind, text: &str) -> Option<AnyUnit> {
        let per_kind = kind.money_per_denominator()?;
        let (money, per) = text.split_once('/')?;
        let money = QuantityKind::Money.find_unit(money.trim())?;
        let per = per_kind.find_unit(per.trim())?;
        AnyUnit::money_per(money, per).ok()
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.abbreviation())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-bound units
// ─────────────────────────────────────────────────────────────────────────────

/// A unit statically bound to dimension `D`.
///
/// Units are long-lived constants (`length::METER`, `length::KILOMETER`, …); scalars only refer to them.
pub struct Unit<D> {
    raw: AnyUnit,
    _dim: PhantomData<fn() -> D>,
}

impl<D> Clone for Unit<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Unit<D> {}

impl<D> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<D> fmt::Debug for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unit").field(&self.raw).finish()
    }
}

impl<D> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<D> Unit<D> {
    const fn from_raw(raw: AnyUnit) -> Self {
        Self {
            raw,
            _dim: PhantomData,
        }
    }

    /// Forgets the static dimension.
    #[inline]
    pub const fn erase(self) -> AnyUnit {
        self.raw
    }

    /// Borrows the erased form.
    #[inline]
    pub const fn as_any(&self) -> &AnyUnit {
        &self.raw
    }

    /// Factor from this unit to the standard unit.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.raw.scale
    }

    /// See [`AnyUnit::name`].
    pub fn name(&self) -> Cow<'static, str> {
        self.raw.name()
    }

    /// See [`AnyUnit::abbreviation`].
    pub fn abbreviation(&self) -> Cow<'static, str> {
        self.raw.abbreviation()
    }

    /// Converts a value in this unit to the standard unit.
    #[inline]
    pub fn to_si(&self, value: f32) -> f32 {
        self.raw.to_si(value)
    }

    /// Converts a standard-unit value to this unit.
    #[inline]
    pub fn from_si(&self, si: f32) -> f32 {
        self.raw.from_si(si)
    }
}

impl<D: Dimension> Unit<D> {
    /// Defines a unit of `D` from its names and scale to the standard unit.
    pub const fn new(
        name: &'static str,
        abbreviation: &'static str,
        aliases: &'static [&'static str],
        scale: f64,
    ) -> Self {
        Self::from_raw(AnyUnit {
            kind: D::KIND,
            label: Label::Named(UnitNames::new(name, abbreviation, aliases)),
            scale,
            offset: 0.0,
        })
    }

    /// Kind of `D`.
    #[inline]
    pub const fn kind(&self) -> QuantityKind {
        D::KIND
    }

    /// The standard unit of `D`.
    #[inline]
    pub const fn standard() -> Self {
        D::STANDARD_UNIT
    }

    /// Resolves unit text among the registered units of `D`.
    ///
    /// Money-per kinds also accept any `"<money>/<per>"` combination of registered money and denominator units.
    pub fn lookup(text: &str) -> Option<Self> {
        D::units()
            .iter()
            .copied()
            .find(|unit| unit.raw.matches_text(text))
            .or_else(|| {
                AnyUnit::parse_money_per(D::KIND, text).map(Self::from_raw)
            })
    }
}

impl<A: AbsoluteDimension> Unit<A> {
    /// Defines an absolute unit from its relative counterpart and the origin offset (in the standard unit).
    pub const fn absolute(relative: Unit<A::Relative>, offset: f64) -> Self {
        Self::from_raw(AnyUnit {
            kind: A::KIND,
            label: relative.raw.label,
            scale: relative.raw.scale,
            offset,
        })
    }

    /// The relative counterpart, used for differences of two absolute values.
    pub const fn relative(self) -> Unit<A::Relative> {
        Unit::from_raw(AnyUnit {
            kind: <A::Relative as Dimension>::KIND,
            label: self.raw.label,
            scale: self.raw.scale,
            offset: 0.0,
        })
    }
}

impl<D: MoneyPerDimension> Unit<D> {
    /// Compound unit `money / per`; its scale is `money.scale / per.scale`.
    pub const fn money_per(money: Unit<MoneyDim>, per: Unit<D::Per>) -> Self {
        Self::from_raw(AnyUnit {
            kind: D::KIND,
            label: Label::MoneyPer {
                money: money.raw.label.names(),
                per: per.raw.label.names(),
            },
            scale: money.raw.scale / per.raw.scale,
            offset: 0.0,
        })
    }
}

impl<D: Dimension> TryFrom<AnyUnit> for Unit<D> {
    type Error = QuantityError;

    fn try_from(unit: AnyUnit) -> Result<Self> {
        if unit.kind == D::KIND {
            Ok(Self::from_raw(unit))
        } else {
            Err(QuantityError::incompatible(D::KIND, unit.kind))
        }
    }
}

impl<D> From<Unit<D>> for AnyUnit {
    fn from(unit: Unit<D>) -> Self {
        unit.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{absolute_temperature, area, length, money, money_per_area, position};
    use approx::assert_relative_eq;

    #[test]
    fn scale_and_offset_conversions() {
        assert_eq!(length::KILOMETER.to_si(2.0), 2000.0);
        assert_eq!(length::KILOMETER.from_si(500.0), 0.5);
        let celsius = absolute_temperature::DEGREE_CELSIUS;
        assert_relative_eq!(celsius.to_si(0.0), 273.15, max_relative = 1e-6);
        assert_relative_eq!(celsius.from_si(373.15), 100.0, max_relative = 1e-6);
        let fahrenheit = absolute_temperature::DEGREE_FAHRENHEIT;
        assert_relative_eq!(fahrenheit.to_si(32.0), 273.15, max_relative = 1e-6);
    }

    #[test]
    fn absolute_units_recover_their_relative_unit() {
        assert_eq!(position::KILOMETER.relative(), length::KILOMETER);
        assert_eq!(absolute_temperature::KELVIN.relative().kind(), QuantityKind::Temperature);
    }

    #[test]
    fn try_from_checks_kind() {
        let km = length::KILOMETER.erase();
        assert_eq!(Unit::<length::LengthDim>::try_from(km), Ok(length::KILOMETER));
        assert_eq!(
            Unit::<area::AreaDim>::try_from(km),
            Err(QuantityError::IncompatibleKind {
                expected: QuantityKind::Area,
                found: QuantityKind::Length
            })
        );
    }

    #[test]
    fn money_per_units_compose_names_and_scale() {
        let unit = AnyUnit::money_per(money::USD.erase(), area::SQUARE_KILOMETER.erase()).unwrap();
        assert_eq!(unit.kind(), QuantityKind::MoneyPerArea);
        assert_eq!(unit.abbreviation(), "USD/km^2");
        assert_eq!(unit.name(), "US dollar per square kilometer");
        assert_relative_eq!(unit.scale(), 1e-6);
        assert!(unit.matches_text("USD / km2"));
        assert!(unit.text_forms().iter().any(|f| f == "US dollar/square kilometer"));

        assert_eq!(money_per_area::EUR_PER_SQUARE_METER.abbreviation(), "EUR/m^2");
    }

    #[test]
    fn money_per_rejects_wrong_kinds() {
        let err = AnyUnit::money_per(length::METER.erase(), area::SQUARE_METER.erase()).unwrap_err();
        assert!(matches!(err, QuantityError::IncompatibleKind { found: QuantityKind::Length, .. }));
        assert!(AnyUnit::money_per(money::EUR.erase(), money::USD.erase()).is_err());
    }

    #[test]
    fn lookup_resolves_dynamic_money_per_text() {
        let unit = Unit::<money_per_area::MoneyPerAreaDim>::lookup("GBP/ha").unwrap();
        assert_eq!(unit.abbreviation(), "GBP/ha");
        assert_relative_eq!(unit.scale(), 1e-4);
        assert!(Unit::<money_per_area::MoneyPerAreaDim>::lookup("GBP/s").is_none());
    }

    #[test]
    fn standard_unit_detection() {
        assert!(length::METER.erase().is_standard());
        assert!(!length::KILOMETER.erase().is_standard());
        assert_eq!(length::KILOMETER.erase().standard_unit(), length::METER.erase());
        let anon = AnyUnit::si(SiDimensions::NONE);
        assert!(anon.is_standard());
        assert_eq!(anon.kind(), QuantityKind::Si);
    }
}
