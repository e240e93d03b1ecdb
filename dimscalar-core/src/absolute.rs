//! Absolute scalars: values anchored to an origin (positions, instants, absolute temperatures, directions).
//!
//! An absolute value can be translated by a relative value of the paired kind, and two absolute values subtract
//! into a relative one. Adding two absolute values is not defined.

use crate::dimension::AbsoluteDimension;
use crate::error::{QuantityError, Result};
use crate::kind::Polarity;
use crate::parse::parse_scalar;
use crate::relative::Rel;
use crate::scalar::{canonical_bits, Scalar};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

/// An absolute quantity of dimension `A`.
///
/// ```rust
/// use dimscalar_core::absolute_temperature::{AbsoluteTemperature, DEGREE_CELSIUS, KELVIN};
/// use dimscalar_core::temperature::Temperature;
///
/// let freezing = AbsoluteTemperature::new(0.0, DEGREE_CELSIUS);
/// let room = AbsoluteTemperature::new(293.15, KELVIN);
/// let warming: Temperature = room - freezing;
/// assert!((warming.si() - 20.0).abs() < 1e-3);
/// ```
pub struct Abs<A> {
    si: f32,
    unit: Unit<A>,
    _dim: PhantomData<fn() -> A>,
}

impl<A> Clone for Abs<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Abs<A> {}

impl<A: AbsoluteDimension> Abs<A> {
    /// The origin, in the standard unit.
    pub const ZERO: Self = Self::from_si(0.0, A::STANDARD_UNIT);
    /// NaN, in the standard unit.
    pub const NAN: Self = Self::from_si(f32::NAN, A::STANDARD_UNIT);
    /// Positive infinity, in the standard unit.
    pub const POSITIVE_INFINITY: Self = Self::from_si(f32::INFINITY, A::STANDARD_UNIT);
    /// Negative infinity, in the standard unit.
    pub const NEGATIVE_INFINITY: Self = Self::from_si(f32::NEG_INFINITY, A::STANDARD_UNIT);
    /// Largest finite value, in the standard unit.
    pub const POS_MAXVALUE: Self = Self::from_si(f32::MAX, A::STANDARD_UNIT);
    /// Most negative finite value, in the standard unit.
    pub const NEG_MAXVALUE: Self = Self::from_si(f32::MIN, A::STANDARD_UNIT);

    /// Creates a value from a reading in `unit` (offset included).
    #[inline]
    pub fn new(value: f32, unit: Unit<A>) -> Self {
        Self::from_si(unit.to_si(value), unit)
    }

    /// Creates a value from a standard-unit magnitude, displayed in `unit`.
    #[inline]
    pub const fn from_si(si: f32, unit: Unit<A>) -> Self {
        Self {
            si,
            unit,
            _dim: PhantomData,
        }
    }

    /// Magnitude in the standard unit, measured from the standard origin.
    #[inline]
    pub const fn si(&self) -> f32 {
        self.si
    }

    /// Display unit.
    #[inline]
    pub const fn unit(&self) -> Unit<A> {
        self.unit
    }

    /// Reading in the display unit.
    #[inline]
    pub fn value(&self) -> f32 {
        self.unit.from_si(self.si)
    }

    /// Translates by a relative value, keeping this value's display unit.
    pub fn plus(self, delta: Rel<A::Relative>) -> Self {
        Self::from_si(self.si + delta.si(), self.unit)
    }

    /// Translates backwards by a relative value, keeping this value's display unit.
    pub fn minus_rel(self, delta: Rel<A::Relative>) -> Self {
        Self::from_si(self.si - delta.si(), self.unit)
    }

    /// Difference of two absolute values, displayed in the relative counterpart of this value's unit.
    pub fn minus(self, other: Self) -> Rel<A::Relative> {
        Rel::from_si(self.si - other.si, self.unit.relative())
    }
}

impl<A: AbsoluteDimension> Scalar for Abs<A> {
    type Dim = A;
    const POLARITY: Polarity = Polarity::Absolute;

    #[inline]
    fn instantiate(value: f32, unit: Unit<A>) -> Self {
        Self::new(value, unit)
    }

    #[inline]
    fn instantiate_si(si: f32, display_unit: Unit<A>) -> Self {
        Self::from_si(si, display_unit)
    }

    #[inline]
    fn si(&self) -> f32 {
        self.si
    }

    #[inline]
    fn display_unit(&self) -> Unit<A> {
        self.unit
    }
}

impl<A: AbsoluteDimension> PartialEq for Abs<A> {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.si) == canonical_bits(other.si)
    }
}

impl<A: AbsoluteDimension> Eq for Abs<A> {}

impl<A: AbsoluteDimension> Hash for Abs<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        A::KIND.hash(state);
        canonical_bits(self.si).hash(state);
    }
}

impl<A: AbsoluteDimension> PartialOrd for Abs<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: AbsoluteDimension> Ord for Abs<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<A: AbsoluteDimension> fmt::Display for Abs<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl<A: AbsoluteDimension> fmt::Debug for Abs<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Abs<{}>({} si, {})", A::KIND, self.si, self.unit)
    }
}

impl<A: AbsoluteDimension> FromStr for Abs<A> {
    type Err = QuantityError;

    fn from_str(text: &str) -> Result<Self> {
        parse_scalar(text)
    }
}

impl<A: AbsoluteDimension> Add<Rel<A::Relative>> for Abs<A> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Rel<A::Relative>) -> Self {
        self.plus(rhs)
    }
}

impl<A: AbsoluteDimension> AddAssign<Rel<A::Relative>> for Abs<A> {
    #[inline]
    fn add_assign(&mut self, rhs: Rel<A::Relative>) {
        *self = self.plus(rhs);
    }
}

impl<A: AbsoluteDimension> Sub<Rel<A::Relative>> for Abs<A> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Rel<A::Relative>) -> Self {
        self.minus_rel(rhs)
    }
}

impl<A: AbsoluteDimension> SubAssign<Rel<A::Relative>> for Abs<A> {
    #[inline]
    fn sub_assign(&mut self, rhs: Rel<A::Relative>) {
        *self = self.minus_rel(rhs);
    }
}

impl<A: AbsoluteDimension> Sub for Abs<A> {
    type Output = Rel<A::Relative>;
    #[inline]
    fn sub(self, rhs: Self) -> Rel<A::Relative> {
        self.minus(rhs)
    }
}

/// `relative + absolute`, for each absolute/relative pair. The result keeps the absolute operand's unit.
macro_rules! rel_plus_abs {
    ($($rel:ty => $abs:ty),+ $(,)?) => {
        $(
            impl Add<Abs<$abs>> for Rel<$rel> {
                type Output = Abs<$abs>;
                #[inline]
                fn add(self, rhs: Abs<$abs>) -> Abs<$abs> {
                    rhs.plus(self)
                }
            }
        )+
    };
}

rel_plus_abs! {
    crate::units::length::LengthDim => crate::units::position::PositionDim,
    crate::units::duration::DurationDim => crate::units::time::TimeDim,
    crate::units::temperature::TemperatureDim => crate::units::absolute_temperature::AbsoluteTemperatureDim,
    crate::units::angle::AngleDim => crate::units::direction::DirectionDim,
}
