//! The closed set of quantity kinds.

use crate::dimension::{Dimension, SiBase, SiDimensions};
use crate::macros::for_each_kind;
use crate::unit::{AnyUnit, Unit};
use core::fmt;

/// Whether a quantity is anchored to an origin or is a difference/magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Anchored to an origin (position, time, absolute temperature, direction).
    Absolute,
    /// A magnitude or difference; forms an additive group.
    Relative,
}

impl Polarity {
    /// Tag used by verbose display strings.
    pub const fn tag(self) -> &'static str {
        match self {
            Polarity::Absolute => "Abs",
            Polarity::Relative => "Rel",
        }
    }
}

macro_rules! define_quantity_kind {
    (
        relative { $($rel:ident => $rdim:path),* $(,)? }
        absolute { $($abs:ident => $adim:path),* $(,)? }
    ) => {
        /// Identifies a physical dimension.
        ///
        /// Every variant except [`QuantityKind::Si`] has exactly one concrete scalar type and one standard unit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum QuantityKind {
            $(
                #[doc = concat!("Relative kind `", stringify!($rel), "`.")]
                $rel,
            )*
            $(
                #[doc = concat!("Absolute kind `", stringify!($abs), "`.")]
                $abs,
            )*
            /// Anonymous SI kind of units built from raw base exponents; it has no concrete scalar type.
            Si,
        }

        impl QuantityKind {
            /// Every kind that has a concrete scalar type.
            pub const ALL: &'static [QuantityKind] = &[
                $(QuantityKind::$rel,)*
                $(QuantityKind::$abs,)*
            ];

            /// Name of the kind, e.g. `"Length"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(QuantityKind::$rel => stringify!($rel),)*
                    $(QuantityKind::$abs => stringify!($abs),)*
                    QuantityKind::Si => "SI",
                }
            }

            /// Absolute or relative.
            pub const fn polarity(self) -> Polarity {
                match self {
                    $(QuantityKind::$abs => Polarity::Absolute,)*
                    _ => Polarity::Relative,
                }
            }

            /// The standard (SI) unit, or `None` for [`QuantityKind::Si`].
            pub fn standard_unit(self) -> Option<AnyUnit> {
                match self {
                    $(QuantityKind::$rel => Some(<$rdim as Dimension>::STANDARD_UNIT.erase()),)*
                    $(QuantityKind::$abs => Some(<$adim as Dimension>::STANDARD_UNIT.erase()),)*
                    QuantityKind::Si => None,
                }
            }

            /// Registered units of the kind, standard unit first.
            pub fn units(self) -> Vec<AnyUnit> {
                match self {
                    $(QuantityKind::$rel => erase_all(<$rdim as Dimension>::units()),)*
                    $(QuantityKind::$abs => erase_all(<$adim as Dimension>::units()),)*
                    QuantityKind::Si => Vec::new(),
                }
            }

            /// Resolves unit text (abbreviation, name or another registered text form) within this kind.
            pub fn find_unit(self, text: &str) -> Option<AnyUnit> {
                let found = match self {
                    $(QuantityKind::$rel => Unit::<$rdim>::lookup(text).map(Unit::erase),)*
                    $(QuantityKind::$abs => Unit::<$adim>::lookup(text).map(Unit::erase),)*
                    QuantityKind::Si => None,
                };
                log::trace!("unit lookup {:?} in {}: {:?}", text, self, found.map(|u| u.abbreviation()));
                found
            }
        }
    };
}

for_each_kind!(define_quantity_kind);

fn erase_all<D: Dimension>(units: &[Unit<D>]) -> Vec<AnyUnit> {
    units.iter().map(|u| u.erase()).collect()
}

impl QuantityKind {
    /// For an absolute kind, the kind of the difference of two values.
    pub const fn relative(self) -> Option<QuantityKind> {
        match self {
            QuantityKind::Position => Some(QuantityKind::Length),
            QuantityKind::Time => Some(QuantityKind::Duration),
            QuantityKind::AbsoluteTemperature => Some(QuantityKind::Temperature),
            QuantityKind::Direction => Some(QuantityKind::Angle),
            _ => None,
        }
    }

    /// For a money-per kind, the kind of the denominator.
    pub const fn money_per_denominator(self) -> Option<QuantityKind> {
        match self {
            QuantityKind::MoneyPerArea => Some(QuantityKind::Area),
            QuantityKind::MoneyPerDuration => Some(QuantityKind::Duration),
            QuantityKind::MoneyPerEnergy => Some(QuantityKind::Energy),
            QuantityKind::MoneyPerLength => Some(QuantityKind::Length),
            QuantityKind::MoneyPerMass => Some(QuantityKind::Mass),
            QuantityKind::MoneyPerVolume => Some(QuantityKind::Volume),
            _ => None,
        }
    }

    /// The money-per kind whose denominator is `per`.
    pub const fn money_per(per: QuantityKind) -> Option<QuantityKind> {
        match per {
            QuantityKind::Area => Some(QuantityKind::MoneyPerArea),
            QuantityKind::Duration => Some(QuantityKind::MoneyPerDuration),
            QuantityKind::Energy => Some(QuantityKind::MoneyPerEnergy),
            QuantityKind::Length => Some(QuantityKind::MoneyPerLength),
            QuantityKind::Mass => Some(QuantityKind::MoneyPerMass),
            QuantityKind::Volume => Some(QuantityKind::MoneyPerVolume),
            _ => None,
        }
    }

    /// Base exponents of the kind's standard unit; `None` for [`QuantityKind::Si`], whose exponents live on the
    /// unit.
    pub const fn si_dimensions(self) -> Option<SiDimensions> {
        use SiBase::*;
        const N: SiDimensions = SiDimensions::NONE;

        let dims = match self {
            QuantityKind::Dimensionless => N,
            QuantityKind::Acceleration => N.with(Meter, 1).with(Second, -2),
            QuantityKind::Angle | QuantityKind::Direction => N.with(Radian, 1),
            QuantityKind::AngleSolid => N.with(Steradian, 1),
            QuantityKind::Area => N.with(Meter, 2),
            QuantityKind::Density => N.with(Kilogram, 1).with(Meter, -3),
            QuantityKind::Duration | QuantityKind::Time => N.with(Second, 1),
            QuantityKind::ElectricalCharge => N.with(Second, 1).with(Ampere, 1),
            QuantityKind::ElectricalCurrent => N.with(Ampere, 1),
            QuantityKind::ElectricalPotential => {
                N.with(Kilogram, 1).with(Meter, 2).with(Second, -3).with(Ampere, -1)
            }
            QuantityKind::ElectricalResistance => {
                N.with(Kilogram, 1).with(Meter, 2).with(Second, -3).with(Ampere, -2)
            }
            QuantityKind::Energy | QuantityKind::Torque => {
                N.with(Kilogram, 1).with(Meter, 2).with(Second, -2)
            }
            QuantityKind::FlowMass => N.with(Kilogram, 1).with(Second, -1),
            QuantityKind::FlowVolume => N.with(Meter, 3).with(Second, -1),
            QuantityKind::Force => N.with(Kilogram, 1).with(Meter, 1).with(Second, -2),
            QuantityKind::Frequency => N.with(Second, -1),
            QuantityKind::Length | QuantityKind::Position => N.with(Meter, 1),
            QuantityKind::LinearDensity => N.with(Meter, -1),
            QuantityKind::Mass => N.with(Kilogram, 1),
            QuantityKind::Money => N.with(Money, 1),
            QuantityKind::MoneyPerArea => N.with(Money, 1).with(Meter, -2),
            QuantityKind::MoneyPerDuration => N.with(Money, 1).with(Second, -1),
            QuantityKind::MoneyPerEnergy => {
                N.with(Money, 1).with(Kilogram, -1).with(Meter, -2).with(Second, 2)
            }
            QuantityKind::MoneyPerLength => N.with(Money, 1).with(Meter, -1),
            QuantityKind::MoneyPerMass => N.with(Money, 1).with(Kilogram, -1),
            QuantityKind::MoneyPerVolume => N.with(Money, 1).with(Meter, -3),
            QuantityKind::Power => N.with(Kilogram, 1).with(Meter, 2).with(Second, -3),
            QuantityKind::Pressure => N.with(Kilogram, 1).with(Meter, -1).with(Second, -2),
            QuantityKind::Speed => N.with(Meter, 1).with(Second, -1),
            QuantityKind::Temperature | QuantityKind::AbsoluteTemperature => N.with(Kelvin, 1),
            QuantityKind::Volume => N.with(Meter, 3),
            QuantityKind::Si => return None,
        };
        Some(dims)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
