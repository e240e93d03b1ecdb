//! Electrical kinds.

pub mod electrical_charge {
    //! Electrical charge. The standard unit is the coulomb.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for electrical charge.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = ElectricalCharge, standard = COULOMB, units = UNITS)]
    pub enum ElectricalChargeDim {}

    /// An electrical charge.
    pub type ElectricalCharge = Rel<ElectricalChargeDim>;
    /// A unit of electrical charge.
    pub type ElectricalChargeUnit = Unit<ElectricalChargeDim>;

    define_units! { ElectricalChargeUnit;
        COULOMB = "coulomb", "C", [], 1.0;
        MILLIAMPERE_HOUR = "milliampere hour", "mAh", [], 3.6;
        AMPERE_HOUR = "ampere hour", "Ah", [], 3600.0;
        ATOMIC_UNIT = "elementary charge", "e", [], 1.602_176_634e-19;
    }
}

pub mod electrical_current {
    //! Electrical current. The standard unit is the ampere.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for electrical current.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = ElectricalCurrent, standard = AMPERE, units = UNITS)]
    pub enum ElectricalCurrentDim {}

    /// An electrical current.
    pub type ElectricalCurrent = Rel<ElectricalCurrentDim>;
    /// A unit of electrical current.
    pub type ElectricalCurrentUnit = Unit<ElectricalCurrentDim>;

    define_units! { ElectricalCurrentUnit;
        AMPERE = "ampere", "A", ["amp"], 1.0;
        MICROAMPERE = "microampere", "μA", ["uA"], 1e-6;
        MILLIAMPERE = "milliampere", "mA", [], 1e-3;
        KILOAMPERE = "kiloampere", "kA", [], 1e3;
    }
}

pub mod electrical_potential {
    //! Electrical potential. The standard unit is the volt.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for electrical potential.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = ElectricalPotential, standard = VOLT, units = UNITS)]
    pub enum ElectricalPotentialDim {}

    /// An electrical potential.
    pub type ElectricalPotential = Rel<ElectricalPotentialDim>;
    /// A unit of electrical potential.
    pub type ElectricalPotentialUnit = Unit<ElectricalPotentialDim>;

    define_units! { ElectricalPotentialUnit;
        VOLT = "volt", "V", [], 1.0;
        MICROVOLT = "microvolt", "μV", ["uV"], 1e-6;
        MILLIVOLT = "millivolt", "mV", [], 1e-3;
        KILOVOLT = "kilovolt", "kV", [], 1e3;
        MEGAVOLT = "megavolt", "MV", [], 1e6;
    }
}

pub mod electrical_resistance {
    //! Electrical resistance. The standard unit is the ohm.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for electrical resistance.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = ElectricalResistance, standard = OHM, units = UNITS)]
    pub enum ElectricalResistanceDim {}

    /// An electrical resistance.
    pub type ElectricalResistance = Rel<ElectricalResistanceDim>;
    /// A unit of electrical resistance.
    pub type ElectricalResistanceUnit = Unit<ElectricalResistanceDim>;

    define_units! { ElectricalResistanceUnit;
        OHM = "ohm", "Ω", ["ohm"], 1.0;
        MILLIOHM = "milliohm", "mΩ", ["mohm"], 1e-3;
        KILOOHM = "kiloohm", "kΩ", ["kohm"], 1e3;
        MEGAOHM = "megaohm", "MΩ", ["Mohm"], 1e6;
    }
}
