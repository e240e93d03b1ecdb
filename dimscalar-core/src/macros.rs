//! Macros for the kind table and unit definitions.

/// Invokes `$callback!` with the full kind table.
///
/// Every piece of code that needs one arm per concrete scalar type (the `QuantityKind` enum, `AnyScalar`, the
/// dispatch factory) is generated from this single list, so adding a kind here is the only registration step.
macro_rules! for_each_kind {
    ($callback:ident) => {
        $callback! {
            relative {
                Dimensionless => $crate::units::dimensionless::DimensionlessDim,
                Acceleration => $crate::units::acceleration::AccelerationDim,
                Angle => $crate::units::angle::AngleDim,
                AngleSolid => $crate::units::angle_solid::AngleSolidDim,
                Area => $crate::units::area::AreaDim,
                Density => $crate::units::density::DensityDim,
                Duration => $crate::units::duration::DurationDim,
                ElectricalCharge => $crate::units::electrical_charge::ElectricalChargeDim,
                ElectricalCurrent => $crate::units::electrical_current::ElectricalCurrentDim,
                ElectricalPotential => $crate::units::electrical_potential::ElectricalPotentialDim,
                ElectricalResistance => $crate::units::electrical_resistance::ElectricalResistanceDim,
                Energy => $crate::units::energy::EnergyDim,
                FlowMass => $crate::units::flow_mass::FlowMassDim,
                FlowVolume => $crate::units::flow_volume::FlowVolumeDim,
                Force => $crate::units::force::ForceDim,
                Frequency => $crate::units::frequency::FrequencyDim,
                Length => $crate::units::length::LengthDim,
                LinearDensity => $crate::units::linear_density::LinearDensityDim,
                Mass => $crate::units::mass::MassDim,
                Money => $crate::units::money::MoneyDim,
                MoneyPerArea => $crate::units::money_per_area::MoneyPerAreaDim,
                MoneyPerDuration => $crate::units::money_per_duration::MoneyPerDurationDim,
                MoneyPerEnergy => $crate::units::money_per_energy::MoneyPerEnergyDim,
                MoneyPerLength => $crate::units::money_per_length::MoneyPerLengthDim,
                MoneyPerMass => $crate::units::money_per_mass::MoneyPerMassDim,
                MoneyPerVolume => $crate::units::money_per_volume::MoneyPerVolumeDim,
                Power => $crate::units::power::PowerDim,
                Pressure => $crate::units::pressure::PressureDim,
                Speed => $crate::units::speed::SpeedDim,
                Temperature => $crate::units::temperature::TemperatureDim,
                Torque => $crate::units::torque::TorqueDim,
                Volume => $crate::units::volume::VolumeDim,
            }
            absolute {
                Position => $crate::units::position::PositionDim,
                Time => $crate::units::time::TimeDim,
                AbsoluteTemperature => $crate::units::absolute_temperature::AbsoluteTemperatureDim,
                Direction => $crate::units::direction::DirectionDim,
            }
        }
    };
}

/// Declares the units of a relative kind plus its private `UNITS` registry slice.
///
/// Each entry is `NAME = "long name", "abbreviation", ["other", "text", "forms"], scale_to_standard;`. The first
/// entry should be the standard unit.
macro_rules! define_units {
    ($unit:ty; $( $name:ident = $long:literal, $abbr:literal, [$($alias:literal),* $(,)?], $scale:expr; )+) => {
        $(
            #[doc = concat!("The ", $long, " (`", $abbr, "`); one of it is `", stringify!($scale), "` standard units.")]
            pub const $name: $unit = <$unit>::new($long, $abbr, &[$($alias),*], $scale);
        )+

        /// Registered units of this kind, standard unit first.
        const UNITS: &[$unit] = &[$($name),+];
    };
}

/// Declares the units of an absolute kind, each derived from a relative unit plus an origin offset (in the
/// standard unit).
macro_rules! define_absolute_units {
    ($unit:ty; $( $name:ident = $relative:expr, $offset:expr; )+) => {
        $(
            #[doc = concat!("Absolute `", stringify!($relative), "` with its origin at `", stringify!($offset), "` standard units.")]
            pub const $name: $unit = <$unit>::absolute($relative, $offset);
        )+

        /// Registered units of this kind, standard unit first.
        const UNITS: &[$unit] = &[$($name),+];
    };
}

/// Declares compound money-per units from a money unit and a denominator unit.
macro_rules! define_money_per_units {
    ($unit:ty; $( $name:ident = $money:expr, $per:expr; )+) => {
        $(
            #[doc = concat!("`", stringify!($money), "` per `", stringify!($per), "`.")]
            pub const $name: $unit = <$unit>::money_per($money, $per);
        )+

        /// Registered units of this kind, standard unit first.
        const UNITS: &[$unit] = &[$($name),+];
    };
}

pub(crate) use define_absolute_units;
pub(crate) use define_money_per_units;
pub(crate) use define_units;
pub(crate) use for_each_kind;
