//! Runtime dispatch: from a unit known only at runtime to the matching concrete scalar type.
//!
//! [`AnyScalar`] has one variant per concrete type and the two entry points [`instantiate`] and [`instantiate_si`]
//! match exhaustively on [`QuantityKind`]. Both are generated from the kind table, so a kind without a concrete
//! type cannot compile.
//!
//! ```rust
//! use dimscalar_core::length::{Length, KILOMETER};
//! use dimscalar_core::{instantiate, AnyScalar, QuantityKind};
//!
//! let any = instantiate(2.5, KILOMETER.erase()).unwrap();
//! assert_eq!(any.kind(), QuantityKind::Length);
//! let length = Length::try_from(any).unwrap();
//! assert_eq!(length.si(), 2500.0);
//! ```

use crate::absolute::Abs;
use crate::error::{QuantityError, Result};
use crate::kind::{Polarity, QuantityKind};
use crate::macros::for_each_kind;
use crate::parse::parse_any;
use crate::relative::Rel;
use crate::scalar::{canonical, Scalar};
use crate::unit::{AnyUnit, Unit};
use core::cmp::Ordering;
use core::fmt;

fn unrecognized(unit: &AnyUnit) -> QuantityError {
    let error = QuantityError::UnrecognizedUnit {
        unit: unit.abbreviation().into_owned(),
        kind: unit.kind(),
    };
    log::debug!("dispatch failed: {}", error);
    error
}

macro_rules! define_any_scalar {
    (
        relative { $($rel:ident => $rdim:path),* $(,)? }
        absolute { $($abs:ident => $adim:path),* $(,)? }
    ) => {
        /// A scalar whose concrete type is only known at runtime.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum AnyScalar {
            $(
                #[doc = concat!("A `", stringify!($rel), "` value.")]
                $rel(Rel<$rdim>),
            )*
            $(
                #[doc = concat!("A `", stringify!($abs), "` value.")]
                $abs(Abs<$adim>),
            )*
        }

        impl AnyScalar {
            /// Kind of the wrapped scalar.
            pub const fn kind(&self) -> QuantityKind {
                match self {
                    $(AnyScalar::$rel(_) => QuantityKind::$rel,)*
                    $(AnyScalar::$abs(_) => QuantityKind::$abs,)*
                }
            }

            /// Magnitude in the kind's standard unit.
            pub fn si(&self) -> f32 {
                match self {
                    $(AnyScalar::$rel(s) => s.si(),)*
                    $(AnyScalar::$abs(s) => s.si(),)*
                }
            }

            /// Display unit of the wrapped scalar.
            pub fn display_unit(&self) -> AnyUnit {
                match self {
                    $(AnyScalar::$rel(s) => s.unit().erase(),)*
                    $(AnyScalar::$abs(s) => s.unit().erase(),)*
                }
            }

            /// Renders like [`Scalar::format`] in the display unit.
            pub fn format(&self, verbose: bool, with_unit: bool) -> String {
                match self {
                    $(AnyScalar::$rel(s) => s.format(None, verbose, with_unit),)*
                    $(AnyScalar::$abs(s) => s.format(None, verbose, with_unit),)*
                }
            }
        }

        /// Builds the concrete scalar for `unit`'s kind from a value expressed in `unit`.
        ///
        /// Fails with [`QuantityError::UnrecognizedUnit`] for units of the anonymous [`QuantityKind::Si`] kind.
        pub fn instantiate(value: f32, unit: AnyUnit) -> Result<AnyScalar> {
            let scalar = match unit.kind() {
                $(QuantityKind::$rel => AnyScalar::$rel(Rel::new(value, Unit::try_from(unit)?)),)*
                $(QuantityKind::$abs => AnyScalar::$abs(Abs::new(value, Unit::try_from(unit)?)),)*
                QuantityKind::Si => return Err(unrecognized(&unit)),
            };
            log::trace!("instantiate {} {} -> {}", value, unit, scalar.kind());
            Ok(scalar)
        }

        /// Builds the concrete scalar for `display_unit`'s kind from a standard-unit magnitude.
        ///
        /// Compound units carry their own scale, so `si` is read back through that unit exactly.
        pub fn instantiate_si(si: f32, display_unit: AnyUnit) -> Result<AnyScalar> {
            let scalar = match display_unit.kind() {
                $(QuantityKind::$rel => AnyScalar::$rel(Rel::from_si(si, Unit::try_from(display_unit)?)),)*
                $(QuantityKind::$abs => AnyScalar::$abs(Abs::from_si(si, Unit::try_from(display_unit)?)),)*
                QuantityKind::Si => return Err(unrecognized(&display_unit)),
            };
            log::trace!("instantiate_si {} in {} -> {}", si, display_unit, scalar.kind());
            Ok(scalar)
        }

        $(
            impl From<Rel<$rdim>> for AnyScalar {
                fn from(value: Rel<$rdim>) -> Self {
                    AnyScalar::$rel(value)
                }
            }

            impl TryFrom<AnyScalar> for Rel<$rdim> {
                type Error = QuantityError;

                fn try_from(value: AnyScalar) -> Result<Self> {
                    match value {
                        AnyScalar::$rel(s) => Ok(s),
                        other => Err(QuantityError::incompatible(QuantityKind::$rel, other.kind())),
                    }
                }
            }
        )*

        $(
            impl From<Abs<$adim>> for AnyScalar {
                fn from(value: Abs<$adim>) -> Self {
                    AnyScalar::$abs(value)
                }
            }

            impl TryFrom<AnyScalar> for Abs<$adim> {
                type Error = QuantityError;

                fn try_from(value: AnyScalar) -> Result<Self> {
                    match value {
                        AnyScalar::$abs(s) => Ok(s),
                        other => Err(QuantityError::incompatible(QuantityKind::$abs, other.kind())),
                    }
                }
            }
        )*
    };
}

for_each_kind!(define_any_scalar);

impl AnyScalar {
    /// Absolute or relative.
    pub const fn polarity(&self) -> Polarity {
        self.kind().polarity()
    }

    /// Value in the display unit.
    pub fn value(&self) -> f32 {
        self.display_unit().from_si(self.si())
    }

    /// Value in `unit`; fails with `IncompatibleKind` when `unit` belongs to another kind.
    pub fn value_in(&self, unit: AnyUnit) -> Result<f32> {
        if unit.kind() != self.kind() {
            return Err(QuantityError::incompatible(self.kind(), unit.kind()));
        }
        Ok(unit.from_si(self.si()))
    }

    /// Same magnitude, displayed in `unit` of the same kind.
    pub fn in_unit(&self, unit: AnyUnit) -> Result<AnyScalar> {
        if unit.kind() != self.kind() {
            return Err(QuantityError::incompatible(self.kind(), unit.kind()));
        }
        instantiate_si(self.si(), unit)
    }

    /// Total order over the SI magnitude, defined only between scalars of one kind.
    pub fn try_cmp(&self, other: &AnyScalar) -> Result<Ordering> {
        if self.kind() != other.kind() {
            return Err(QuantityError::incompatible(self.kind(), other.kind()));
        }
        Ok(canonical(self.si()).total_cmp(&canonical(other.si())))
    }

    /// Sum of two relative scalars of one kind, or an absolute scalar translated by its relative kind.
    ///
    /// The result keeps this scalar's display unit. Any other combination fails with `IncompatibleKind`.
    pub fn try_plus(&self, other: &AnyScalar) -> Result<AnyScalar> {
        let expected = match self.polarity() {
            Polarity::Relative => self.kind(),
            Polarity::Absolute => self.kind().relative().unwrap_or(self.kind()),
        };
        if other.kind() != expected {
            return Err(QuantityError::incompatible(expected, other.kind()));
        }
        instantiate_si(self.si() + other.si(), self.display_unit())
    }

    /// Parses `"<number> <unit text>"` as a scalar of `kind`.
    ///
    /// ```rust
    /// use dimscalar_core::{AnyScalar, QuantityKind};
    ///
    /// let mass = AnyScalar::parse(QuantityKind::Mass, "12.5 kg").unwrap();
    /// assert_eq!(mass.si(), 12.5);
    /// assert!(AnyScalar::parse(QuantityKind::Mass, "").is_err());
    /// ```
    pub fn parse(kind: QuantityKind, text: &str) -> Result<AnyScalar> {
        let (value, unit) = parse_any(kind, text)?;
        instantiate(value, unit)
    }
}

impl fmt::Display for AnyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::SiDimensions;
    use crate::length::{self, Length};
    use crate::mass;
    use crate::money_per_area::{self, MoneyPerArea};
    use crate::position::{self, Position};
    use crate::{area, money};
    use approx::assert_relative_eq;

    #[test]
    fn dispatch_covers_every_kind() {
        for &kind in QuantityKind::ALL {
            for unit in kind.units() {
                let scalar = instantiate(1.0, unit).unwrap();
                assert_eq!(scalar.kind(), kind);
                assert_eq!(scalar.display_unit(), unit);
                assert_relative_eq!(scalar.value(), 1.0, epsilon = 1e-3);
                assert_eq!(scalar.polarity(), kind.polarity());
            }
        }
    }

    #[test]
    fn anonymous_si_units_are_unrecognized() {
        let unit = AnyUnit::si(SiDimensions::NONE.with(crate::SiBase::Mole, 1));
        let err = instantiate(1.0, unit).unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnrecognizedUnit {
                unit: "mol".to_string(),
                kind: QuantityKind::Si
            }
        );
        assert!(instantiate_si(1.0, unit).is_err());
    }

    #[test]
    fn instantiate_si_reads_back_through_compound_scale() {
        let usd_per_km2 = AnyUnit::money_per(money::USD.erase(), area::SQUARE_KILOMETER.erase()).unwrap();
        let any = instantiate_si(2e-6, usd_per_km2).unwrap();
        assert_eq!(any.kind(), QuantityKind::MoneyPerArea);
        assert_relative_eq!(any.value(), 2.0, max_relative = 1e-5);
        let typed = MoneyPerArea::try_from(any).unwrap();
        assert_eq!(typed.unit().abbreviation(), "USD/km^2");
        assert_relative_eq!(typed.value_in(money_per_area::EUR_PER_SQUARE_METER), 2e-6);
    }

    #[test]
    fn typed_round_trip() {
        let l = Length::new(3.0, length::KILOMETER);
        let any = AnyScalar::from(l);
        assert_eq!(Length::try_from(any), Ok(l));
        assert_eq!(
            Position::try_from(any),
            Err(QuantityError::IncompatibleKind {
                expected: QuantityKind::Position,
                found: QuantityKind::Length
            })
        );
        assert_eq!(any.value_in(length::METER.erase()), Ok(3000.0));
        assert!(any.value_in(mass::KILOGRAM.erase()).is_err());
        assert_eq!(any.in_unit(length::METER.erase()).unwrap().value(), 3000.0);
        assert_eq!(any.to_string(), "3.000 km");
    }

    #[test]
    fn checked_comparison_and_addition() {
        let a = instantiate(1.0, length::KILOMETER.erase()).unwrap();
        let b = instantiate(500.0, length::METER.erase()).unwrap();
        let m = instantiate(1.0, mass::KILOGRAM.erase()).unwrap();
        assert_eq!(a.try_cmp(&b), Ok(Ordering::Greater));
        assert!(matches!(a.try_cmp(&m), Err(QuantityError::IncompatibleKind { .. })));

        let sum = a.try_plus(&b).unwrap();
        assert_eq!(sum.display_unit(), length::KILOMETER.erase());
        assert_relative_eq!(sum.value(), 1.5);
        assert!(a.try_plus(&m).is_err());

        let p = instantiate(10.0, position::METER.erase()).unwrap();
        let moved = p.try_plus(&b).unwrap();
        assert_eq!(moved.kind(), QuantityKind::Position);
        assert_eq!(moved.si(), 510.0);
        assert!(p.try_plus(&p).is_err());
    }

    #[test]
    fn parse_by_kind() {
        let any = AnyScalar::parse(QuantityKind::Position, "12 km").unwrap();
        assert_eq!(any.kind(), QuantityKind::Position);
        assert_eq!(any.si(), 12_000.0);
        assert!(AnyScalar::parse(QuantityKind::Length, "12 kg").is_err());
        assert!(AnyScalar::parse(QuantityKind::Si, "12").is_err());
    }
}
