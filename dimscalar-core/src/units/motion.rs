//! Kinematic kinds and flows.

pub mod speed {
    //! Speed. The standard unit is the meter per second.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for speed.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Speed, standard = METER_PER_SECOND, units = UNITS)]
    pub enum SpeedDim {}

    /// A speed.
    pub type Speed = Rel<SpeedDim>;
    /// A unit of speed.
    pub type SpeedUnit = Unit<SpeedDim>;

    define_units! { SpeedUnit;
        METER_PER_SECOND = "meter per second", "m/s", ["mps"], 1.0;
        METER_PER_HOUR = "meter per hour", "m/h", [], 1.0 / 3600.0;
        KM_PER_SECOND = "kilometer per second", "km/s", [], 1e3;
        KM_PER_HOUR = "kilometer per hour", "km/h", ["kph", "kmph"], 1.0 / 3.6;
        FOOT_PER_SECOND = "foot per second", "ft/s", ["fps"], 0.3048;
        MILE_PER_HOUR = "mile per hour", "mi/h", ["mph"], 0.44704;
        KNOT = "knot", "kt", ["kn"], 1852.0 / 3600.0;
    }
}

pub mod acceleration {
    //! Acceleration. The standard unit is the meter per second squared.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for acceleration.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Acceleration, standard = METER_PER_SECOND_2, units = UNITS)]
    pub enum AccelerationDim {}

    /// An acceleration.
    pub type Acceleration = Rel<AccelerationDim>;
    /// A unit of acceleration.
    pub type AccelerationUnit = Unit<AccelerationDim>;

    define_units! { AccelerationUnit;
        METER_PER_SECOND_2 = "meter per second squared", "m/s^2", ["m/s2", "m/s²"], 1.0;
        KM_PER_HOUR_2 = "kilometer per hour squared", "km/h^2", ["km/h2"], 1000.0 / (3600.0 * 3600.0);
        KM_PER_HOUR_PER_SECOND = "kilometer per hour per second", "km/h/s", [], 1.0 / 3.6;
        FOOT_PER_SECOND_2 = "foot per second squared", "ft/s^2", ["ft/s2"], 0.3048;
        STANDARD_GRAVITY = "standard gravity", "g0", ["g"], 9.80665;
        GAL = "gal", "Gal", [], 0.01;
    }
}

pub mod flow_mass {
    //! Mass flow rate. The standard unit is the kilogram per second.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for mass flow.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = FlowMass, standard = KILOGRAM_PER_SECOND, units = UNITS)]
    pub enum FlowMassDim {}

    /// A mass flow.
    pub type FlowMass = Rel<FlowMassDim>;
    /// A unit of mass flow.
    pub type FlowMassUnit = Unit<FlowMassDim>;

    define_units! { FlowMassUnit;
        KILOGRAM_PER_SECOND = "kilogram per second", "kg/s", [], 1.0;
        KILOGRAM_PER_HOUR = "kilogram per hour", "kg/h", [], 1.0 / 3600.0;
        TONNE_PER_HOUR = "tonne per hour", "t/h", [], 1000.0 / 3600.0;
        POUND_PER_SECOND = "pound per second", "lb/s", [], 0.45359237;
    }
}

pub mod flow_volume {
    //! Volume flow rate. The standard unit is the cubic meter per second.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for volume flow.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = FlowVolume, standard = CUBIC_METER_PER_SECOND, units = UNITS)]
    pub enum FlowVolumeDim {}

    /// A volume flow.
    pub type FlowVolume = Rel<FlowVolumeDim>;
    /// A unit of volume flow.
    pub type FlowVolumeUnit = Unit<FlowVolumeDim>;

    define_units! { FlowVolumeUnit;
        CUBIC_METER_PER_SECOND = "cubic meter per second", "m^3/s", ["m3/s"], 1.0;
        CUBIC_METER_PER_HOUR = "cubic meter per hour", "m^3/h", ["m3/h"], 1.0 / 3600.0;
        LITER_PER_SECOND = "liter per second", "L/s", ["l/s"], 1e-3;
        LITER_PER_MINUTE = "liter per minute", "L/min", ["l/min"], 1e-3 / 60.0;
        GALLON_US_PER_MINUTE = "gallon (US) per minute", "gal(US)/min", ["gpm"], 3.785411784e-3 / 60.0;
    }
}
