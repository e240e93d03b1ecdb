//! Temperature differences and absolute temperatures.

pub mod temperature {
    //! Temperature difference (relative). The standard unit is the kelvin; a degree Celsius difference equals a
    //! kelvin difference.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for temperature differences.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Temperature, standard = KELVIN, units = UNITS)]
    pub enum TemperatureDim {}

    /// A temperature difference.
    pub type Temperature = Rel<TemperatureDim>;
    /// A unit of temperature difference.
    pub type TemperatureUnit = Unit<TemperatureDim>;

    define_units! { TemperatureUnit;
        KELVIN = "kelvin", "K", [], 1.0;
        DEGREE_CELSIUS = "degree Celsius", "dC", ["°C", "C"], 1.0;
        DEGREE_FAHRENHEIT = "degree Fahrenheit", "dF", ["°F", "F"], 5.0 / 9.0;
        DEGREE_RANKINE = "degree Rankine", "dR", ["°R", "R"], 5.0 / 9.0;
    }
}

pub mod absolute_temperature {
    //! Absolute temperature. Differences are [`Temperature`](super::temperature) values.
    //!
    //! ```rust
    //! use dimscalar_core::absolute_temperature::{AbsoluteTemperature, DEGREE_CELSIUS, KELVIN};
    //! use dimscalar_core::Scalar;
    //!
    //! let boiling = AbsoluteTemperature::new(100.0, DEGREE_CELSIUS);
    //! assert!((boiling.value_in(KELVIN) - 373.15).abs() < 1e-3);
    //! ```

    use super::temperature;
    use crate::macros::define_absolute_units;
    use crate::{Abs, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for absolute temperature.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(
        kind = AbsoluteTemperature,
        standard = KELVIN,
        units = UNITS,
        relative = temperature::TemperatureDim
    )]
    pub enum AbsoluteTemperatureDim {}

    /// An absolute temperature.
    pub type AbsoluteTemperature = Abs<AbsoluteTemperatureDim>;
    /// A unit of absolute temperature.
    pub type AbsoluteTemperatureUnit = Unit<AbsoluteTemperatureDim>;

    define_absolute_units! { AbsoluteTemperatureUnit;
        KELVIN = temperature::KELVIN, 0.0;
        DEGREE_CELSIUS = temperature::DEGREE_CELSIUS, 273.15;
        DEGREE_FAHRENHEIT = temperature::DEGREE_FAHRENHEIT, 459.67 * 5.0 / 9.0;
        DEGREE_RANKINE = temperature::DEGREE_RANKINE, 0.0;
    }
}
