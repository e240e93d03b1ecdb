//! Spatial kinds: lengths, areas, volumes and angles.

pub mod length {
    //! Length (relative). The standard unit is the meter.
    //!
    //! ```rust
    //! use dimscalar_core::length::{Length, KILOMETER, METER};
    //!
    //! let total = Length::new(100.0, METER) + Length::new(1.0, KILOMETER);
    //! assert_eq!(total.si(), 1100.0);
    //! assert_eq!(total.unit(), METER);
    //! ```

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for length.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Length, standard = METER, units = UNITS)]
    pub enum LengthDim {}

    /// A length.
    pub type Length = Rel<LengthDim>;
    /// A unit of length.
    pub type LengthUnit = Unit<LengthDim>;

    define_units! { LengthUnit;
        METER = "meter", "m", ["metre", "meters"], 1.0;
        MILLIMETER = "millimeter", "mm", ["millimetre"], 1e-3;
        CENTIMETER = "centimeter", "cm", ["centimetre"], 1e-2;
        DECIMETER = "decimeter", "dm", ["decimetre"], 1e-1;
        DECAMETER = "decameter", "dam", ["decametre"], 1e1;
        HECTOMETER = "hectometer", "hm", ["hectometre"], 1e2;
        KILOMETER = "kilometer", "km", ["kilometre"], 1e3;
        MICROMETER = "micrometer", "μm", ["um", "micrometre"], 1e-6;
        INCH = "inch", "in", ["\""], 0.0254;
        FOOT = "foot", "ft", ["'", "feet"], 0.3048;
        YARD = "yard", "yd", [], 0.9144;
        MILE = "mile", "mi", [], 1609.344;
        NAUTICAL_MILE = "nautical mile", "NM", ["nmi"], 1852.0;
        ASTRONOMICAL_UNIT = "astronomical unit", "AU", ["au"], 149_597_870_700.0;
        LIGHTYEAR = "lightyear", "ly", ["light-year"], 9_460_730_472_580_800.0;
    }
}

pub mod position {
    //! Position (absolute): a location along an axis, with differences measured as [`Length`](super::length).

    use super::length;
    use crate::macros::define_absolute_units;
    use crate::{Abs, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for position.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Position, standard = METER, units = UNITS, relative = length::LengthDim)]
    pub enum PositionDim {}

    /// A position.
    pub type Position = Abs<PositionDim>;
    /// A unit of position.
    pub type PositionUnit = Unit<PositionDim>;

    define_absolute_units! { PositionUnit;
        METER = length::METER, 0.0;
        MILLIMETER = length::MILLIMETER, 0.0;
        CENTIMETER = length::CENTIMETER, 0.0;
        DECIMETER = length::DECIMETER, 0.0;
        KILOMETER = length::KILOMETER, 0.0;
        INCH = length::INCH, 0.0;
        FOOT = length::FOOT, 0.0;
        YARD = length::YARD, 0.0;
        MILE = length::MILE, 0.0;
        NAUTICAL_MILE = length::NAUTICAL_MILE, 0.0;
        ASTRONOMICAL_UNIT = length::ASTRONOMICAL_UNIT, 0.0;
    }
}

pub mod area {
    //! Area. The standard unit is the square meter.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for area.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Area, standard = SQUARE_METER, units = UNITS)]
    pub enum AreaDim {}

    /// An area.
    pub type Area = Rel<AreaDim>;
    /// A unit of area.
    pub type AreaUnit = Unit<AreaDim>;

    define_units! { AreaUnit;
        SQUARE_METER = "square meter", "m^2", ["m2", "m²"], 1.0;
        SQUARE_MILLIMETER = "square millimeter", "mm^2", ["mm2", "mm²"], 1e-6;
        SQUARE_CENTIMETER = "square centimeter", "cm^2", ["cm2", "cm²"], 1e-4;
        SQUARE_KILOMETER = "square kilometer", "km^2", ["km2", "km²"], 1e6;
        ARE = "are", "a", [], 1e2;
        HECTARE = "hectare", "ha", [], 1e4;
        SQUARE_INCH = "square inch", "in^2", ["in2"], 6.4516e-4;
        SQUARE_FOOT = "square foot", "ft^2", ["ft2", "sq ft"], 0.09290304;
        SQUARE_MILE = "square mile", "mi^2", ["mi2"], 2_589_988.110336;
        ACRE = "acre", "ac", [], 4046.8564224;
    }
}

pub mod volume {
    //! Volume. The standard unit is the cubic meter.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for volume.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Volume, standard = CUBIC_METER, units = UNITS)]
    pub enum VolumeDim {}

    /// A volume.
    pub type Volume = Rel<VolumeDim>;
    /// A unit of volume.
    pub type VolumeUnit = Unit<VolumeDim>;

    define_units! { VolumeUnit;
        CUBIC_METER = "cubic meter", "m^3", ["m3", "m³"], 1.0;
        CUBIC_CENTIMETER = "cubic centimeter", "cm^3", ["cm3", "cc"], 1e-6;
        CUBIC_KILOMETER = "cubic kilometer", "km^3", ["km3"], 1e9;
        LITER = "liter", "L", ["l", "litre"], 1e-3;
        MILLILITER = "milliliter", "mL", ["ml", "millilitre"], 1e-6;
        CUBIC_FOOT = "cubic foot", "ft^3", ["ft3"], 0.028316846592;
        GALLON_US = "gallon (US)", "gal(US)", ["gal"], 3.785411784e-3;
        GALLON_IMP = "gallon (imperial)", "gal(imp)", [], 4.54609e-3;
        BARREL_OIL = "barrel (oil)", "bbl", [], 0.158987294928;
    }
}

pub mod linear_density {
    //! Linear density (per length), e.g. a count per meter. The standard unit is the reciprocal meter.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for linear density.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = LinearDensity, standard = PER_METER, units = UNITS)]
    pub enum LinearDensityDim {}

    /// A linear density.
    pub type LinearDensity = Rel<LinearDensityDim>;
    /// A unit of linear density.
    pub type LinearDensityUnit = Unit<LinearDensityDim>;

    define_units! { LinearDensityUnit;
        PER_METER = "per meter", "/m", ["1/m"], 1.0;
        PER_MILLIMETER = "per millimeter", "/mm", ["1/mm"], 1e3;
        PER_CENTIMETER = "per centimeter", "/cm", ["1/cm"], 1e2;
        PER_KILOMETER = "per kilometer", "/km", ["1/km"], 1e-3;
        PER_FOOT = "per foot", "/ft", ["1/ft"], 1.0 / 0.3048;
        PER_MILE = "per mile", "/mi", ["1/mi"], 1.0 / 1609.344;
    }
}

pub mod angle {
    //! Angle (relative). The standard unit is the radian.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use core::f64::consts::PI;
    use dimscalar_derive::Dimension;

    /// Dimension tag for plane angle.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Angle, standard = RADIAN, units = UNITS)]
    pub enum AngleDim {}

    /// An angle.
    pub type Angle = Rel<AngleDim>;
    /// A unit of angle.
    pub type AngleUnit = Unit<AngleDim>;

    define_units! { AngleUnit;
        RADIAN = "radian", "rad", [], 1.0;
        DEGREE = "degree", "deg", ["°", "degrees"], PI / 180.0;
        ARCMINUTE = "arcminute", "arcmin", ["'"], PI / 10_800.0;
        ARCSECOND = "arcsecond", "arcsec", ["\""], PI / 648_000.0;
        GRAD = "gradian", "grad", ["gon"], PI / 200.0;
    }
}

pub mod direction {
    //! Direction (absolute angle), measured counterclockwise from east. Differences are
    //! [`Angle`](super::angle) values.

    use super::angle;
    use crate::macros::define_absolute_units;
    use crate::{Abs, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for direction.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Direction, standard = RADIAN, units = UNITS, relative = angle::AngleDim)]
    pub enum DirectionDim {}

    /// A direction.
    pub type Direction = Abs<DirectionDim>;
    /// A unit of direction.
    pub type DirectionUnit = Unit<DirectionDim>;

    define_absolute_units! { DirectionUnit;
        RADIAN = angle::RADIAN, 0.0;
        DEGREE = angle::DEGREE, 0.0;
    }
}

pub mod angle_solid {
    //! Solid angle. The standard unit is the steradian.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use core::f64::consts::PI;
    use dimscalar_derive::Dimension;

    /// Dimension tag for solid angle.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = AngleSolid, standard = STERADIAN, units = UNITS)]
    pub enum AngleSolidDim {}

    /// A solid angle.
    pub type AngleSolid = Rel<AngleSolidDim>;
    /// A unit of solid angle.
    pub type AngleSolidUnit = Unit<AngleSolidDim>;

    define_units! { AngleSolidUnit;
        STERADIAN = "steradian", "sr", [], 1.0;
        SQUARE_DEGREE = "square degree", "sq.deg", ["deg^2", "deg2"], (PI / 180.0) * (PI / 180.0);
    }
}
