//! Dimensional algebra between relative scalars.
//!
//! Each declared edge `A × B → C` or `A ÷ B → C` is an operator impl between concrete [`Rel`] types. The result is
//! computed from the SI magnitudes alone and displayed in the standard unit of `C`. Products are declared in both
//! operand orders together with the two quotients they imply, so `Speed × Duration`, `Duration × Speed`,
//! `Length ÷ Duration` and `Length ÷ Speed` all exist.
//!
//! ```rust
//! use dimscalar_core::density::Density;
//! use dimscalar_core::mass::{Mass, KILOGRAM};
//! use dimscalar_core::volume::{Volume, CUBIC_METER};
//!
//! let rho: Density = Mass::new(10.0, KILOGRAM) / Volume::new(2.0, CUBIC_METER);
//! assert_eq!(rho.si(), 5.0);
//! ```
//!
//! Scaling by a [`Dimensionless`](crate::dimensionless::Dimensionless) value keeps the other operand's kind and
//! display unit. Division of two values of one kind always yields a dimensionless ratio.

use crate::dimension::Dimension;
use crate::relative::Rel;
use crate::units::acceleration::AccelerationDim;
use crate::units::angle::AngleDim;
use crate::units::angle_solid::AngleSolidDim;
use crate::units::area::AreaDim;
use crate::units::density::DensityDim;
use crate::units::dimensionless::DimensionlessDim;
use crate::units::duration::DurationDim;
use crate::units::electrical_charge::ElectricalChargeDim;
use crate::units::electrical_current::ElectricalCurrentDim;
use crate::units::electrical_potential::ElectricalPotentialDim;
use crate::units::electrical_resistance::ElectricalResistanceDim;
use crate::units::energy::EnergyDim;
use crate::units::flow_mass::FlowMassDim;
use crate::units::flow_volume::FlowVolumeDim;
use crate::units::force::ForceDim;
use crate::units::frequency::FrequencyDim;
use crate::units::length::LengthDim;
use crate::units::linear_density::LinearDensityDim;
use crate::units::mass::MassDim;
use crate::units::money::MoneyDim;
use crate::units::money_per_area::MoneyPerAreaDim;
use crate::units::money_per_duration::MoneyPerDurationDim;
use crate::units::money_per_energy::MoneyPerEnergyDim;
use crate::units::money_per_length::MoneyPerLengthDim;
use crate::units::money_per_mass::MoneyPerMassDim;
use crate::units::money_per_volume::MoneyPerVolumeDim;
use crate::units::power::PowerDim;
use crate::units::pressure::PressureDim;
use crate::units::speed::SpeedDim;
use crate::units::temperature::TemperatureDim;
use crate::units::torque::TorqueDim;
use crate::units::volume::VolumeDim;
use core::ops::{Div, Mul};

// ─────────────────────────────────────────────────────────────────────────────
// Edge macros
// ─────────────────────────────────────────────────────────────────────────────

/// `A × B → C`, one direction only.
macro_rules! mul_edge {
    ($a:ty, $b:ty => $c:ty) => {
        impl Mul<Rel<$b>> for Rel<$a> {
            type Output = Rel<$c>;
            #[inline]
            fn mul(self, rhs: Rel<$b>) -> Rel<$c> {
                Rel::from_si(self.si() * rhs.si(), <$c as Dimension>::STANDARD_UNIT)
            }
        }
    };
}

/// `A ÷ B → C`.
macro_rules! div_edge {
    ($a:ty, $b:ty => $c:ty) => {
        impl Div<Rel<$b>> for Rel<$a> {
            type Output = Rel<$c>;
            #[inline]
            fn div(self, rhs: Rel<$b>) -> Rel<$c> {
                Rel::from_si(self.si() / rhs.si(), <$c as Dimension>::STANDARD_UNIT)
            }
        }
    };
}

/// `A × B → C` with `B × A`, `C ÷ A` and `C ÷ B`.
macro_rules! product {
    ($($a:ty, $b:ty => $c:ty;)+) => {
        $(
            mul_edge!($a, $b => $c);
            mul_edge!($b, $a => $c);
            div_edge!($c, $a => $b);
            div_edge!($c, $b => $a);
        )+
    };
}

/// Scaling by a dimensionless ratio, keeping the scaled operand's display unit.
macro_rules! scale_by_dimensionless {
    ($($d:ty),+ $(,)?) => {
        $(
            impl Mul<Rel<DimensionlessDim>> for Rel<$d> {
                type Output = Rel<$d>;
                #[inline]
                fn mul(self, rhs: Rel<DimensionlessDim>) -> Rel<$d> {
                    Rel::from_si(self.si() * rhs.si(), self.unit())
                }
            }

            impl Mul<Rel<$d>> for Rel<DimensionlessDim> {
                type Output = Rel<$d>;
                #[inline]
                fn mul(self, rhs: Rel<$d>) -> Rel<$d> {
                    rhs * self
                }
            }

            impl Div<Rel<DimensionlessDim>> for Rel<$d> {
                type Output = Rel<$d>;
                #[inline]
                fn div(self, rhs: Rel<DimensionlessDim>) -> Rel<$d> {
                    Rel::from_si(self.si() / rhs.si(), self.unit())
                }
            }
        )+
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge table
// ─────────────────────────────────────────────────────────────────────────────

product! {
    // motion
    AccelerationDim, DurationDim => SpeedDim;
    AccelerationDim, MassDim => ForceDim;
    SpeedDim, FrequencyDim => AccelerationDim;
    DurationDim, SpeedDim => LengthDim;
    LengthDim, FrequencyDim => SpeedDim;
    LinearDensityDim, SpeedDim => FrequencyDim;
    AreaDim, SpeedDim => FlowVolumeDim;
    FlowMassDim, SpeedDim => ForceDim;
    DurationDim, FlowMassDim => MassDim;
    DurationDim, FlowVolumeDim => VolumeDim;
    MassDim, FrequencyDim => FlowMassDim;
    VolumeDim, FrequencyDim => FlowVolumeDim;

    // geometry
    AreaDim, LengthDim => VolumeDim;
    AreaDim, LinearDensityDim => LengthDim;
    VolumeDim, LinearDensityDim => AreaDim;
    LengthDim, LinearDensityDim => DimensionlessDim;
    DurationDim, FrequencyDim => DimensionlessDim;
    DensityDim, VolumeDim => MassDim;

    // mechanics
    AreaDim, PressureDim => ForceDim;
    ForceDim, LengthDim => EnergyDim;
    ForceDim, SpeedDim => PowerDim;
    PressureDim, VolumeDim => EnergyDim;
    DurationDim, PowerDim => EnergyDim;
    EnergyDim, FrequencyDim => PowerDim;
    EnergyDim, LinearDensityDim => ForceDim;

    // electrical
    DurationDim, ElectricalCurrentDim => ElectricalChargeDim;
    ElectricalCurrentDim, ElectricalPotentialDim => PowerDim;
    ElectricalCurrentDim, ElectricalResistanceDim => ElectricalPotentialDim;

    // money
    AreaDim, MoneyPerAreaDim => MoneyDim;
    DurationDim, MoneyPerDurationDim => MoneyDim;
    EnergyDim, MoneyPerEnergyDim => MoneyDim;
    LengthDim, MoneyPerLengthDim => MoneyDim;
    MassDim, MoneyPerMassDim => MoneyDim;
    VolumeDim, MoneyPerVolumeDim => MoneyDim;
    FrequencyDim, MoneyDim => MoneyPerDurationDim;
    LinearDensityDim, MoneyDim => MoneyPerLengthDim;
}

mul_edge!(LengthDim, LengthDim => AreaDim);
div_edge!(AreaDim, LengthDim => LengthDim);

// Torque shares its exponents with energy; only the quotient edges are declared so that force × length stays
// energy.
div_edge!(TorqueDim, ForceDim => LengthDim);
div_edge!(TorqueDim, LengthDim => ForceDim);
div_edge!(TorqueDim, DurationDim => PowerDim);
div_edge!(TorqueDim, PowerDim => DurationDim);
div_edge!(TorqueDim, PressureDim => VolumeDim);
div_edge!(TorqueDim, VolumeDim => PressureDim);
mul_edge!(TorqueDim, FrequencyDim => PowerDim);
mul_edge!(FrequencyDim, TorqueDim => PowerDim);
mul_edge!(TorqueDim, LinearDensityDim => ForceDim);
mul_edge!(LinearDensityDim, TorqueDim => ForceDim);

scale_by_dimensionless!(
    AccelerationDim,
    AngleDim,
    AngleSolidDim,
    AreaDim,
    DensityDim,
    DurationDim,
    ElectricalChargeDim,
    ElectricalCurrentDim,
    ElectricalPotentialDim,
    ElectricalResistanceDim,
    EnergyDim,
    FlowMassDim,
    FlowVolumeDim,
    ForceDim,
    FrequencyDim,
    LengthDim,
    LinearDensityDim,
    MassDim,
    MoneyDim,
    MoneyPerAreaDim,
    MoneyPerDurationDim,
    MoneyPerEnergyDim,
    MoneyPerLengthDim,
    MoneyPerMassDim,
    MoneyPerVolumeDim,
    PowerDim,
    PressureDim,
    SpeedDim,
    TemperatureDim,
    TorqueDim,
    VolumeDim,
);

impl Mul for Rel<DimensionlessDim> {
    type Output = Rel<DimensionlessDim>;
    #[inline]
    fn mul(self, rhs: Rel<DimensionlessDim>) -> Rel<DimensionlessDim> {
        Rel::from_si(self.si() * rhs.si(), self.unit())
    }
}
