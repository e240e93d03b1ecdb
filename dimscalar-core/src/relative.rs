//! Relative scalars: magnitudes and differences that form an additive group.

use crate::dimension::Dimension;
use crate::error::{QuantityError, Result};
use crate::kind::Polarity;
use crate::parse::parse_scalar;
use crate::scalar::{canonical_bits, Scalar};
use crate::unit::{AnyUnit, Unit};
use crate::units::dimensionless::DimensionlessDim;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use core::str::FromStr;

/// A relative quantity of dimension `D` (a length, a mass, a temperature difference, …).
///
/// The magnitude is stored in the standard unit of `D`; the display unit only affects rendering and the
/// unit-preserving operations. Equality, hashing and ordering look at the standard-unit magnitude alone, so
/// `1 km == 1000 m`.
///
/// ```rust
/// use dimscalar_core::length::{Length, KILOMETER, METER};
///
/// let a = Length::new(1.0, KILOMETER);
/// let b = Length::new(1000.0, METER);
/// assert_eq!(a, b);
/// assert_eq!((a - b).si(), 0.0);
/// ```
pub struct Rel<D> {
    si: f32,
    unit: Unit<D>,
    _dim: PhantomData<fn() -> D>,
}

impl<D> Clone for Rel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Rel<D> {}

impl<D: Dimension> Rel<D> {
    /// Zero, in the standard unit.
    pub const ZERO: Self = Self::from_si(0.0, D::STANDARD_UNIT);
    /// One standard unit.
    pub const ONE: Self = Self::from_si(1.0, D::STANDARD_UNIT);
    /// NaN, in the standard unit.
    pub const NAN: Self = Self::from_si(f32::NAN, D::STANDARD_UNIT);
    /// Positive infinity, in the standard unit.
    pub const POSITIVE_INFINITY: Self = Self::from_si(f32::INFINITY, D::STANDARD_UNIT);
    /// Negative infinity, in the standard unit.
    pub const NEGATIVE_INFINITY: Self = Self::from_si(f32::NEG_INFINITY, D::STANDARD_UNIT);
    /// Largest finite value, in the standard unit.
    pub const POS_MAXVALUE: Self = Self::from_si(f32::MAX, D::STANDARD_UNIT);
    /// Most negative finite value, in the standard unit.
    pub const NEG_MAXVALUE: Self = Self::from_si(f32::MIN, D::STANDARD_UNIT);

    /// Creates a scalar from a value expressed in `unit`.
    #[inline]
    pub fn new(value: f32, unit: Unit<D>) -> Self {
        Self::from_si(unit.to_si(value), unit)
    }

    /// Creates a scalar from a standard-unit magnitude, displayed in `unit`.
    #[inline]
    pub const fn from_si(si: f32, unit: Unit<D>) -> Self {
        Self {
            si,
            unit,
            _dim: PhantomData,
        }
    }

    /// Magnitude in the standard unit.
    #[inline]
    pub const fn si(&self) -> f32 {
        self.si
    }

    /// Display unit.
    #[inline]
    pub const fn unit(&self) -> Unit<D> {
        self.unit
    }

    /// Value in the display unit.
    #[inline]
    pub fn value(&self) -> f32 {
        self.unit.from_si(self.si)
    }

    /// Sum, displayed in this value's unit.
    pub fn plus(self, other: Self) -> Self {
        Self::from_si(self.si + other.si, self.unit)
    }

    /// Difference, displayed in this value's unit.
    pub fn minus(self, other: Self) -> Self {
        Self::from_si(self.si - other.si, self.unit)
    }

    /// Multiplies the magnitude by a double-precision factor.
    pub fn scale(self, factor: f64) -> Self {
        Self::from_si((self.si as f64 * factor) as f32, self.unit)
    }

    /// Dimensional product (`Speed × Duration → Length`) or scaling by a plain `f32`.
    ///
    /// ```rust
    /// use dimscalar_core::duration::{Duration, SECOND};
    /// use dimscalar_core::speed::{Speed, METER_PER_SECOND};
    /// use dimscalar_core::length::Length;
    ///
    /// let d: Length = Speed::new(20.0, METER_PER_SECOND).multiply_by(Duration::new(5.0, SECOND));
    /// assert_eq!(d.si(), 100.0);
    /// ```
    #[inline]
    pub fn multiply_by<R>(self, rhs: R) -> <Self as Mul<R>>::Output
    where
        Self: Mul<R>,
    {
        self * rhs
    }

    /// Dimensional quotient (`Mass ÷ Volume → Density`, `Length ÷ Length → Dimensionless`) or division by a plain
    /// `f32`.
    #[inline]
    pub fn divide_by<R>(self, rhs: R) -> <Self as Div<R>>::Output
    where
        Self: Div<R>,
    {
        self / rhs
    }

    /// Checked addition of a value whose unit is only known at runtime.
    pub fn try_plus_value(self, value: f32, unit: AnyUnit) -> Result<Self> {
        let unit = Unit::<D>::try_from(unit)?;
        Ok(self.plus(Self::new(value, unit)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display-unit transforms
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! display_unit_ops {
    ($($(#[$doc:meta])* $name:ident => $op:expr;)+) => {
        impl<D: Dimension> Rel<D> {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(self) -> Self {
                    let f: fn(f32) -> f32 = $op;
                    Self::new(f(self.value()), self.unit)
                }
            )+
        }
    };
}

display_unit_ops! {
    /// Absolute value.
    abs => f32::abs;
    /// Arc cosine of the display value.
    acos => f32::acos;
    /// Arc sine of the display value.
    asin => f32::asin;
    /// Arc tangent of the display value.
    atan => f32::atan;
    /// Cube root of the display value.
    cbrt => f32::cbrt;
    /// Smallest integer not below the display value.
    ceil => f32::ceil;
    /// Cosine of the display value.
    cos => f32::cos;
    /// Hyperbolic cosine of the display value.
    cosh => f32::cosh;
    /// `e` raised to the display value.
    exp => f32::exp;
    /// `e^x - 1` of the display value.
    expm1 => f32::exp_m1;
    /// Largest integer not above the display value.
    floor => f32::floor;
    /// Natural logarithm of the display value.
    log => f32::ln;
    /// Base-10 logarithm of the display value.
    log10 => f32::log10;
    /// `ln(1 + x)` of the display value.
    log1p => f32::ln_1p;
    /// Rounds the display value to the nearest integer, ties to even.
    rint => f32::round_ties_even;
    /// Rounds the display value to the nearest integer, ties towards positive infinity.
    round => |v| (v as f64 + 0.5).floor() as f32;
    /// Sign of the display value (`-1`, `0` or `1`; NaN stays NaN).
    signum => |v| if v == 0.0 { v } else { v.signum() };
    /// Sine of the display value.
    sin => f32::sin;
    /// Hyperbolic sine of the display value.
    sinh => f32::sinh;
    /// Square root of the display value.
    sqrt => f32::sqrt;
    /// Tangent of the display value.
    tan => f32::tan;
    /// Hyperbolic tangent of the display value.
    tanh => f32::tanh;
    /// Reciprocal of the display value.
    inv => |v| 1.0 / v;
}

impl<D: Dimension> Rel<D> {
    /// Display value raised to `exponent`.
    #[inline]
    pub fn pow(self, exponent: f64) -> Self {
        Self::new((self.value() as f64).powf(exponent) as f32, self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar contract
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Scalar for Rel<D> {
    type Dim = D;
    const POLARITY: Polarity = Polarity::Relative;

    #[inline]
    fn instantiate(value: f32, unit: Unit<D>) -> Self {
        Self::new(value, unit)
    }

    #[inline]
    fn instantiate_si(si: f32, display_unit: Unit<D>) -> Self {
        Self::from_si(si, display_unit)
    }

    #[inline]
    fn si(&self) -> f32 {
        self.si
    }

    #[inline]
    fn display_unit(&self) -> Unit<D> {
        self.unit
    }
}

impl<D: Dimension> PartialEq for Rel<D> {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.si) == canonical_bits(other.si)
    }
}

impl<D: Dimension> Eq for Rel<D> {}

impl<D: Dimension> Hash for Rel<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        D::KIND.hash(state);
        canonical_bits(self.si).hash(state);
    }
}

impl<D: Dimension> PartialOrd for Rel<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Dimension> Ord for Rel<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<D: Dimension> fmt::Display for Rel<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl<D: Dimension> fmt::Debug for Rel<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rel<{}>({} si, {})", D::KIND, self.si, self.unit)
    }
}

impl<D: Dimension> FromStr for Rel<D> {
    type Err = QuantityError;

    /// Parses `"<number> <unit text>"`, e.g. `"12.5 kg"`.
    fn from_str(text: &str) -> Result<Self> {
        parse_scalar(text)
    }
}

impl<D: Dimension> Default for Rel<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Group operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Rel<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl<D: Dimension> AddAssign for Rel<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(rhs);
    }
}

impl<D: Dimension> Sub for Rel<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl<D: Dimension> SubAssign for Rel<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(rhs);
    }
}

impl<D: Dimension> Neg for Rel<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_si(-self.si, self.unit)
    }
}

impl<D: Dimension> Mul<f32> for Rel<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_si(self.si * rhs, self.unit)
    }
}

impl<D: Dimension> Mul<Rel<D>> for f32 {
    type Output = Rel<D>;
    #[inline]
    fn mul(self, rhs: Rel<D>) -> Rel<D> {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f32> for Rel<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<D: Dimension> Div<f32> for Rel<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_si(self.si / rhs, self.unit)
    }
}

impl<D: Dimension> DivAssign<f32> for Rel<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Two values of the same kind divide into a dimensionless ratio.
impl<D: Dimension> Div for Rel<D> {
    type Output = Rel<DimensionlessDim>;
    #[inline]
    fn div(self, rhs: Self) -> Rel<DimensionlessDim> {
        Rel::from_si(self.si / rhs.si, DimensionlessDim::STANDARD_UNIT)
    }
}

impl<D: Dimension> Sum for Rel<D> {
    /// Sums in the unit of the first element (standard unit for an empty iterator).
    fn sum<I: Iterator<Item = Self>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, Rel::plus),
            None => Self::ZERO,
        }
    }
}
