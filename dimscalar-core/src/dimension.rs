//! Dimension traits and SI base exponents.

use crate::kind::QuantityKind;
use crate::unit::Unit;
use core::fmt;
use core::ops::{Div, Mul};

/// Marker trait for **dimensions** (Length, Duration, Mass …).
///
/// Every quantity kind has one empty marker enum implementing this trait, usually through
/// `#[derive(Dimension)]`. The marker ties the compile-time type to the runtime [`QuantityKind`], names the
/// standard (SI) unit of the kind and lists its registered units.
pub trait Dimension: Sized + 'static {
    /// Runtime identity of this dimension.
    const KIND: QuantityKind;

    /// The standard (SI) unit in which magnitudes are stored.
    const STANDARD_UNIT: Unit<Self>;

    /// Registered units of this dimension, standard unit first.
    fn units() -> &'static [Unit<Self>];
}

/// A dimension anchored to an origin (position, time, absolute temperature, direction).
///
/// `Relative` is the dimension of differences between two absolute values.
pub trait AbsoluteDimension: Dimension {
    /// Dimension of the difference of two absolute values.
    type Relative: Dimension;
}

/// A money-per-something dimension (money per area, money per duration, …).
pub trait MoneyPerDimension: Dimension {
    /// The denominator dimension.
    type Per: Dimension;
}

// ─────────────────────────────────────────────────────────────────────────────
// SI base exponents
// ─────────────────────────────────────────────────────────────────────────────

/// Base quantities tracked by [`SiDimensions`].
///
/// Currency is not an SI base, but money kinds have to stay apart from dimensionless values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiBase {
    /// Currency (`¤`).
    Money = 0,
    /// Plane angle (`rad`).
    Radian,
    /// Solid angle (`sr`).
    Steradian,
    /// Mass (`kg`).
    Kilogram,
    /// Length (`m`).
    Meter,
    /// Time (`s`).
    Second,
    /// Electric current (`A`).
    Ampere,
    /// Thermodynamic temperature (`K`).
    Kelvin,
    /// Amount of substance (`mol`).
    Mole,
    /// Luminous intensity (`cd`).
    Candela,
}

const BASE_COUNT: usize = 10;

const BASE_SYMBOLS: [&str; BASE_COUNT] = ["¤", "rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

/// Exponents of the base quantities, e.g. `kg·m/s^2` for force.
///
/// Exponents saturate at the `i8` bounds under products, quotients and inversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SiDimensions([i8; BASE_COUNT]);

impl SiDimensions {
    /// All exponents zero.
    pub const NONE: Self = Self([0; BASE_COUNT]);

    /// Returns a copy with the exponent of `base` set to `exponent`.
    ///
    /// ```rust
    /// use dimscalar_core::{SiBase, SiDimensions};
    /// let speed = SiDimensions::NONE.with(SiBase::Meter, 1).with(SiBase::Second, -1);
    /// assert_eq!(speed.to_string(), "m/s");
    /// ```
    pub const fn with(self, base: SiBase, exponent: i8) -> Self {
        let mut exps = self.0;
        exps[base as usize] = exponent;
        Self(exps)
    }

    /// Exponent of one base quantity.
    pub const fn exponent(self, base: SiBase) -> i8 {
        self.0[base as usize]
    }

    /// `true` when every exponent is zero.
    pub const fn is_none(self) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Negates every exponent.
    pub fn invert(self) -> Self {
        Self(self.0.map(i8::saturating_neg))
    }

    fn zip_with(self, other: Self, f: impl Fn(i8, i8) -> i8) -> Self {
        let mut exps = [0; BASE_COUNT];
        for (i, e) in exps.iter_mut().enumerate() {
            *e = f(self.0[i], other.0[i]);
        }
        Self(exps)
    }
}

impl Mul for SiDimensions {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, i8::saturating_add)
    }
}

impl Div for SiDimensions {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, i8::saturating_sub)
    }
}

impl fmt::Display for SiDimensions {
    /// Renders as `kg·m^2/s^3`; dimensionless renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_side(
            f: &mut fmt::Formatter<'_>,
            exps: &[i8; BASE_COUNT],
            sign: i8,
        ) -> Result<bool, fmt::Error> {
            let mut first = true;
            for (i, &e) in exps.iter().enumerate() {
                let shown = e.saturating_mul(sign);
                if shown <= 0 {
                    continue;
                }
                if !first {
                    f.write_str("·")?;
                }
                first = false;
                f.write_str(BASE_SYMBOLS[i])?;
                if shown != 1 {
                    write!(f, "^{shown}")?;
                }
            }
            Ok(!first)
        }

        let wrote_numerator = write_side(f, &self.0, 1)?;
        if self.0.iter().any(|&e| e < 0) {
            if !wrote_numerator {
                f.write_str("1")?;
            }
            f.write_str("/")?;
            write_side(f, &self.0, -1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORCE: SiDimensions = SiDimensions::NONE
        .with(SiBase::Kilogram, 1)
        .with(SiBase::Meter, 1)
        .with(SiBase::Second, -2);

    #[test]
    fn product_and_quotient_add_exponents() {
        let length = SiDimensions::NONE.with(SiBase::Meter, 1);
        let energy = FORCE * length;
        assert_eq!(energy.exponent(SiBase::Meter), 2);
        assert_eq!(energy / length, FORCE);
        assert!((FORCE / FORCE).is_none());
    }

    #[test]
    fn display_forms() {
        assert_eq!(FORCE.to_string(), "kg·m/s^2");
        assert_eq!(SiDimensions::NONE.to_string(), "");
        let frequency = SiDimensions::NONE.with(SiBase::Second, -1);
        assert_eq!(frequency.to_string(), "1/s");
        assert_eq!(frequency.invert().to_string(), "s");
    }

    #[test]
    fn exponents_saturate() {
        let length = SiDimensions::NONE.with(SiBase::Meter, 1);
        let mut huge = length;
        for _ in 0..200 {
            huge = huge * length;
        }
        assert_eq!(huge.exponent(SiBase::Meter), i8::MAX);
        let tiny = SiDimensions::NONE.with(SiBase::Meter, i8::MIN);
        assert_eq!((tiny / length).exponent(SiBase::Meter), i8::MIN);
        assert_eq!(tiny.invert().exponent(SiBase::Meter), i8::MAX);
        assert_eq!(tiny.to_string(), "1/m^127");
    }
}
