//! Mechanical kinds: force, energy, power, pressure and torque.

pub mod force {
    //! Force. The standard unit is the newton.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for force.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Force, standard = NEWTON, units = UNITS)]
    pub enum ForceDim {}

    /// A force.
    pub type Force = Rel<ForceDim>;
    /// A unit of force.
    pub type ForceUnit = Unit<ForceDim>;

    define_units! { ForceUnit;
        NEWTON = "newton", "N", [], 1.0;
        KILONEWTON = "kilonewton", "kN", [], 1e3;
        MEGANEWTON = "meganewton", "MN", [], 1e6;
        DYNE = "dyne", "dyn", [], 1e-5;
        KILOGRAM_FORCE = "kilogram-force", "kgf", [], 9.80665;
        POUND_FORCE = "pound-force", "lbf", [], 4.4482216152605;
    }
}

pub mod energy {
    //! Energy. The standard unit is the joule.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for energy.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Energy, standard = JOULE, units = UNITS)]
    pub enum EnergyDim {}

    /// An energy.
    pub type Energy = Rel<EnergyDim>;
    /// A unit of energy.
    pub type EnergyUnit = Unit<EnergyDim>;

    define_units! { EnergyUnit;
        JOULE = "joule", "J", [], 1.0;
        KILOJOULE = "kilojoule", "kJ", [], 1e3;
        MEGAJOULE = "megajoule", "MJ", [], 1e6;
        WATT_HOUR = "watt-hour", "Wh", [], 3600.0;
        KILOWATT_HOUR = "kilowatt-hour", "kWh", [], 3.6e6;
        MEGAWATT_HOUR = "megawatt-hour", "MWh", [], 3.6e9;
        CALORIE = "calorie", "cal", [], 4.184;
        KILOCALORIE = "kilocalorie", "kcal", [], 4184.0;
        BTU = "British thermal unit", "BTU", [], 1055.05585262;
        ELECTRONVOLT = "electronvolt", "eV", [], 1.602_176_634e-19;
    }
}

pub mod power {
    //! Power. The standard unit is the watt.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for power.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Power, standard = WATT, units = UNITS)]
    pub enum PowerDim {}

    /// A power.
    pub type Power = Rel<PowerDim>;
    /// A unit of power.
    pub type PowerUnit = Unit<PowerDim>;

    define_units! { PowerUnit;
        WATT = "watt", "W", [], 1.0;
        MILLIWATT = "milliwatt", "mW", [], 1e-3;
        KILOWATT = "kilowatt", "kW", [], 1e3;
        MEGAWATT = "megawatt", "MW", [], 1e6;
        GIGAWATT = "gigawatt", "GW", [], 1e9;
        HORSEPOWER_METRIC = "horsepower (metric)", "hp(M)", ["PS"], 735.49875;
    }
}

pub mod pressure {
    //! Pressure. The standard unit is the pascal.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for pressure.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Pressure, standard = PASCAL, units = UNITS)]
    pub enum PressureDim {}

    /// A pressure.
    pub type Pressure = Rel<PressureDim>;
    /// A unit of pressure.
    pub type PressureUnit = Unit<PressureDim>;

    define_units! { PressureUnit;
        PASCAL = "pascal", "Pa", [], 1.0;
        HECTOPASCAL = "hectopascal", "hPa", [], 1e2;
        KILOPASCAL = "kilopascal", "kPa", [], 1e3;
        MEGAPASCAL = "megapascal", "MPa", [], 1e6;
        BAR = "bar", "bar", [], 1e5;
        MILLIBAR = "millibar", "mbar", [], 1e2;
        ATMOSPHERE_STANDARD = "standard atmosphere", "atm", [], 101_325.0;
        MM_MERCURY = "millimeter of mercury", "mmHg", [], 133.322387415;
        POUND_PER_SQUARE_INCH = "pound per square inch", "psi", [], 6894.757293168;
    }
}

pub mod torque {
    //! Torque. Shares its base exponents with energy but is a distinct kind. The standard unit is the newton
    //! meter.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for torque.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Torque, standard = NEWTON_METER, units = UNITS)]
    pub enum TorqueDim {}

    /// A torque.
    pub type Torque = Rel<TorqueDim>;
    /// A unit of torque.
    pub type TorqueUnit = Unit<TorqueDim>;

    define_units! { TorqueUnit;
        NEWTON_METER = "newton meter", "N.m", ["Nm", "N·m"], 1.0;
        KILOGRAM_FORCE_METER = "kilogram-force meter", "kgf.m", ["kgfm"], 9.80665;
        POUND_FOOT = "pound-foot", "lbf.ft", ["lbft"], 1.3558179483314004;
    }
}
