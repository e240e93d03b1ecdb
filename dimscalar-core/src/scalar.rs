//! The contract shared by every concrete scalar type.

use crate::dimension::Dimension;
use crate::error::Result;
use crate::format::{format_scalar, DisplaySettings};
use crate::kind::{Polarity, QuantityKind};
use crate::parse::parse_scalar;
use crate::unit::{AnyUnit, Unit};
use core::cmp::Ordering;

/// A single-precision quantity value: a magnitude stored in the standard (SI) unit of its kind plus a display unit.
///
/// [`Rel<D>`](crate::Rel) and [`Abs<A>`](crate::Abs) are the two implementations. Every generic operation
/// (conversions, zero comparisons, coercions, display, interpolation, min/max) is provided here on top of the
/// construction hooks [`Scalar::instantiate`] and [`Scalar::instantiate_si`].
///
/// ```rust
/// use dimscalar_core::mass::{Mass, GRAM, KILOGRAM};
/// use dimscalar_core::Scalar;
///
/// let m = Mass::new(1500.0, GRAM);
/// assert_eq!(m.si(), 1.5);
/// assert_eq!(m.value_in(KILOGRAM), 1.5);
/// assert_eq!(m.to_display_string(), "1500.000 g");
/// ```
pub trait Scalar: Copy + Sized {
    /// Dimension of the scalar.
    type Dim: Dimension;

    /// Absolute or relative.
    const POLARITY: Polarity;

    /// Builds a scalar from a value expressed in `unit`.
    fn instantiate(value: f32, unit: Unit<Self::Dim>) -> Self;

    /// Builds a scalar from a standard-unit magnitude, displayed in `display_unit`.
    fn instantiate_si(si: f32, display_unit: Unit<Self::Dim>) -> Self;

    /// Magnitude in the standard unit.
    fn si(&self) -> f32;

    /// Unit used for display.
    fn display_unit(&self) -> Unit<Self::Dim>;

    /// Parses `"<number> <unit text>"` against the registered units of the kind, e.g. `"12.5 kg"` for a mass.
    fn value_of(text: &str) -> Result<Self> {
        parse_scalar(text)
    }

    /// Kind of the scalar.
    #[inline]
    fn kind(&self) -> QuantityKind {
        <Self::Dim as Dimension>::KIND
    }

    /// Value in the display unit.
    #[inline]
    fn value(&self) -> f32 {
        self.display_unit().from_si(self.si())
    }

    /// Value in another unit of the same kind.
    #[inline]
    fn value_in(&self, unit: Unit<Self::Dim>) -> f32 {
        unit.from_si(self.si())
    }

    /// Value in a unit known only at runtime; fails with `IncompatibleKind` when the unit's kind differs.
    fn value_in_any(&self, unit: AnyUnit) -> Result<f32> {
        Unit::<Self::Dim>::try_from(unit).map(|u| self.value_in(u))
    }

    /// Same magnitude, displayed in `unit`.
    #[inline]
    fn in_unit(&self, unit: Unit<Self::Dim>) -> Self {
        Self::instantiate_si(self.si(), unit)
    }

    /// Same magnitude, displayed in the standard unit.
    #[inline]
    fn in_standard_unit(&self) -> Self {
        self.in_unit(<Self::Dim as Dimension>::STANDARD_UNIT)
    }

    /// Total order over the SI magnitude: `-0.0 < 0.0` and NaN sorts above `+∞` (all NaNs are equal).
    ///
    /// This backs `Ord` and the `<`/`>` operators, so values sort and dedupe. The `*_si` comparisons below
    /// follow IEEE semantics instead: NaN compares false and `-0.0 == 0.0`.
    fn compare(&self, other: &Self) -> Ordering {
        canonical(self.si()).total_cmp(&canonical(other.si()))
    }

    /// `self.si < other.si`.
    fn lt_si(&self, other: &Self) -> bool {
        self.si() < other.si()
    }
    /// `self.si <= other.si`.
    fn le_si(&self, other: &Self) -> bool {
        self.si() <= other.si()
    }
    /// `self.si > other.si`.
    fn gt_si(&self, other: &Self) -> bool {
        self.si() > other.si()
    }
    /// `self.si >= other.si`.
    fn ge_si(&self, other: &Self) -> bool {
        self.si() >= other.si()
    }
    /// `self.si == other.si`.
    fn eq_si(&self, other: &Self) -> bool {
        self.si() == other.si()
    }
    /// `self.si != other.si`.
    fn ne_si(&self, other: &Self) -> bool {
        self.si() != other.si()
    }

    /// `si < 0`.
    fn lt0(&self) -> bool {
        self.si() < 0.0
    }
    /// `si <= 0`.
    fn le0(&self) -> bool {
        self.si() <= 0.0
    }
    /// `si > 0`.
    fn gt0(&self) -> bool {
        self.si() > 0.0
    }
    /// `si >= 0`.
    fn ge0(&self) -> bool {
        self.si() >= 0.0
    }
    /// `si == 0`.
    fn eq0(&self) -> bool {
        self.si() == 0.0
    }
    /// `si != 0`.
    fn ne0(&self) -> bool {
        self.si() != 0.0
    }

    /// SI magnitude rounded half-up to an `i32` (NaN becomes 0, out-of-range values saturate).
    fn to_int(&self) -> i32 {
        round_half_up(self.si()) as i32
    }

    /// SI magnitude rounded half-up to an `i64` (NaN becomes 0, out-of-range values saturate).
    fn to_long(&self) -> i64 {
        round_half_up(self.si()) as i64
    }

    /// SI magnitude as `f32`.
    fn to_float(&self) -> f32 {
        self.si()
    }

    /// SI magnitude widened to `f64`.
    fn to_double(&self) -> f64 {
        self.si() as f64
    }

    /// Renders the value in its display unit with the unit abbreviation, e.g. `"12.500 kg"`.
    fn to_display_string(&self) -> String {
        self.format(None, false, true)
    }

    /// Renders `[Abs |Rel ]<number>[ <abbreviation>]` with the default [`DisplaySettings`].
    ///
    /// `unit` defaults to the display unit; `verbose` adds the polarity tag; `with_unit` adds the abbreviation.
    fn format(&self, unit: Option<Unit<Self::Dim>>, verbose: bool, with_unit: bool) -> String {
        self.format_with(&DisplaySettings::default(), unit, verbose, with_unit)
    }

    /// As [`Scalar::format`], with explicit settings.
    fn format_with(
        &self,
        settings: &DisplaySettings,
        unit: Option<Unit<Self::Dim>>,
        verbose: bool,
        with_unit: bool,
    ) -> String {
        let unit = unit.unwrap_or_else(|| self.display_unit());
        let polarity = verbose.then_some(Self::POLARITY);
        let abbreviation = with_unit.then(|| unit.abbreviation());
        format_scalar(settings, polarity, self.value_in(unit), abbreviation.as_deref())
    }

    /// Linear interpolation in the display unit of `low`: `low * (1 - ratio) + high * ratio`.
    ///
    /// Ratios outside `[0, 1]` extrapolate.
    fn interpolate(low: Self, high: Self, ratio: f32) -> Self {
        let unit = low.display_unit();
        Self::instantiate(
            low.value() * (1.0 - ratio) + high.value_in(unit) * ratio,
            unit,
        )
    }

    /// Largest of two or more values; on ties the earliest argument wins.
    fn max_of(first: Self, second: Self, rest: &[Self]) -> Self {
        let mut best = first;
        for candidate in core::iter::once(second).chain(rest.iter().copied()) {
            if candidate.gt_si(&best) {
                best = candidate;
            }
        }
        best
    }

    /// Smallest of two or more values; on ties the earliest argument wins.
    fn min_of(first: Self, second: Self, rest: &[Self]) -> Self {
        let mut best = first;
        for candidate in core::iter::once(second).chain(rest.iter().copied()) {
            if candidate.lt_si(&best) {
                best = candidate;
            }
        }
        best
    }
}

/// Collapses every NaN onto one bit pattern.
#[inline]
pub(crate) fn canonical(value: f32) -> f32 {
    if value.is_nan() {
        f32::NAN
    } else {
        value
    }
}

/// Bit pattern used for equality and hashing.
#[inline]
pub(crate) fn canonical_bits(value: f32) -> u32 {
    canonical(value).to_bits()
}

/// Round half towards positive infinity.
#[inline]
fn round_half_up(value: f32) -> f64 {
    (value as f64 + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Length, KILOMETER, METER};
    use crate::mass::{Mass, GRAM, KILOGRAM};
    use crate::position::{self, Position};
    use approx::assert_relative_eq;

    #[test]
    fn value_conversions() {
        let l = Length::new(2.5, KILOMETER);
        assert_eq!(l.si(), 2500.0);
        assert_eq!(l.value(), 2.5);
        assert_eq!(l.value_in(METER), 2500.0);
        assert_eq!(l.value_in_any(METER.erase()), Ok(2500.0));
        assert!(l.value_in_any(KILOGRAM.erase()).is_err());
        assert_eq!(l.in_standard_unit().unit(), METER);
    }

    #[test]
    fn zero_comparisons() {
        let neg = Length::new(-1.0, METER);
        assert!(neg.lt0() && neg.le0() && neg.ne0());
        assert!(!neg.gt0() && !neg.ge0() && !neg.eq0());
        assert!(Length::ZERO.eq0() && Length::ZERO.le0() && Length::ZERO.ge0());
        assert!(!Length::NAN.lt0() && !Length::NAN.ge0());
    }

    #[test]
    fn integral_coercions_round_half_up() {
        assert_eq!(Mass::new(2.5, KILOGRAM).to_int(), 3);
        assert_eq!(Mass::new(-2.5, KILOGRAM).to_int(), -2);
        assert_eq!(Mass::new(-2.6, KILOGRAM).to_long(), -3);
        assert_eq!(Mass::new(1499.0, GRAM).to_int(), 1);
        assert_eq!(Mass::NAN.to_int(), 0);
        assert_eq!(Mass::POSITIVE_INFINITY.to_long(), i64::MAX);
        assert_eq!(Mass::new(0.25, KILOGRAM).to_double(), 0.25);
    }

    #[test]
    fn compare_is_total() {
        let a = Length::new(1.0, METER);
        assert_eq!(a.compare(&Length::NAN), Ordering::Less);
        assert_eq!(Length::NAN.compare(&Length::NAN), Ordering::Equal);
        assert_eq!(Length::from_si(-0.0, METER).compare(&Length::ZERO), Ordering::Less);
        assert_eq!(Length::NEGATIVE_INFINITY.compare(&a), Ordering::Less);
    }

    #[test]
    fn si_comparisons_follow_ieee() {
        let one = Length::new(1.0, METER);
        let nan = Length::NAN;
        assert!(!nan.gt_si(&one) && !nan.lt_si(&one) && !nan.ge_si(&Length::POSITIVE_INFINITY));
        assert!(!nan.eq_si(&nan) && nan.ne_si(&nan));
        assert!(nan > one && nan == nan);

        let neg_zero = Length::from_si(-0.0, METER);
        assert!(neg_zero.eq_si(&Length::ZERO) && !Length::ZERO.gt_si(&neg_zero));
        assert!(neg_zero.le_si(&Length::ZERO) && neg_zero.ge_si(&Length::ZERO));
        assert!(Length::ZERO > neg_zero && Length::ZERO != neg_zero);

        assert!(one.lt_si(&Length::new(1.0, KILOMETER)));
        assert!(Length::new(1.0, KILOMETER).eq_si(&Length::new(1000.0, METER)));
    }

    #[test]
    fn max_and_min_skip_nan() {
        let one = Length::new(1.0, METER);
        assert_eq!(Length::max_of(one, Length::NAN, &[]), one);
        assert_eq!(Length::min_of(one, Length::NAN, &[]), one);
        assert!(Length::max_of(Length::NAN, one, &[]).si().is_nan());
    }

    #[test]
    fn interpolate_uses_low_display_unit() {
        let low = Length::new(1.0, KILOMETER);
        let high = Length::new(3000.0, METER);
        let mid = Length::interpolate(low, high, 0.25);
        assert_eq!(mid.unit(), KILOMETER);
        assert_relative_eq!(mid.value(), 1.5);
        let beyond = Length::interpolate(low, high, 2.0);
        assert_relative_eq!(beyond.value(), 5.0);

        let p = Position::interpolate(
            Position::new(10.0, position::METER),
            Position::new(20.0, position::METER),
            0.5,
        );
        assert_relative_eq!(p.si(), 15.0);
    }

    #[test]
    fn max_and_min_prefer_first_on_ties() {
        let a = Length::new(1.0, KILOMETER);
        let b = Length::new(1000.0, METER);
        let c = Length::new(5.0, METER);
        assert_eq!(Length::max_of(a, b, &[]).unit(), KILOMETER);
        assert_eq!(Length::max_of(b, a, &[c]).unit(), METER);
        assert_eq!(Length::min_of(a, b, &[c]), c);
        assert_eq!(Length::min_of(c, a, &[Length::new(500.0, METER)]).si(), 5.0);
    }

    #[test]
    fn display_strings() {
        let m = Mass::new(12.5, KILOGRAM);
        assert_eq!(m.to_display_string(), "12.500 kg");
        assert_eq!(m.format(Some(GRAM), false, true), "12500.000 g");
        assert_eq!(m.format(None, true, true), "Rel 12.500 kg");
        assert_eq!(m.format(None, false, false), "12.500");
        let p = Position::new(2.0, position::KILOMETER);
        assert_eq!(p.format(None, true, false), "Abs 2.000");
    }
}
