//! Dimensionless values, mass and density.

pub mod dimensionless {
    //! Dimensionless values, including the result of dividing two values of the same kind.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for dimensionless values.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Dimensionless, standard = SI, units = UNITS)]
    pub enum DimensionlessDim {}

    /// A dimensionless value.
    pub type Dimensionless = Rel<DimensionlessDim>;
    /// A unit of dimensionless values.
    pub type DimensionlessUnit = Unit<DimensionlessDim>;

    define_units! { DimensionlessUnit;
        SI = "unit", "", ["-"], 1.0;
    }
}

pub mod mass {
    //! Mass. The standard unit is the kilogram.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for mass.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Mass, standard = KILOGRAM, units = UNITS)]
    pub enum MassDim {}

    /// A mass.
    pub type Mass = Rel<MassDim>;
    /// A unit of mass.
    pub type MassUnit = Unit<MassDim>;

    define_units! { MassUnit;
        KILOGRAM = "kilogram", "kg", ["kilo", "kilograms"], 1.0;
        MICROGRAM = "microgram", "μg", ["ug"], 1e-9;
        MILLIGRAM = "milligram", "mg", [], 1e-6;
        GRAM = "gram", "g", ["grams"], 1e-3;
        TONNE = "tonne", "t", ["metric ton"], 1e3;
        POUND = "pound", "lb", ["lbs"], 0.45359237;
        OUNCE = "ounce", "oz", [], 0.028349523125;
        DALTON = "dalton", "Da", ["u"], 1.660_539_066_60e-27;
    }
}

pub mod density {
    //! Density (mass per volume). The standard unit is the kilogram per cubic meter.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for density.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Density, standard = KG_PER_METER_3, units = UNITS)]
    pub enum DensityDim {}

    /// A density.
    pub type Density = Rel<DensityDim>;
    /// A unit of density.
    pub type DensityUnit = Unit<DensityDim>;

    define_units! { DensityUnit;
        KG_PER_METER_3 = "kilogram per cubic meter", "kg/m^3", ["kg/m3"], 1.0;
        GRAM_PER_CENTIMETER_3 = "gram per cubic centimeter", "g/cm^3", ["g/cm3", "g/cc"], 1e3;
        GRAM_PER_LITER = "gram per liter", "g/L", ["g/l"], 1.0;
    }
}
