//! Money and the compound money-per kinds.
//!
//! Currencies all have scale 1 and are never converted into each other; EUR is the standard money unit, so money
//! produced by dimensional algebra is expressed in EUR.

pub mod money {
    //! Money. The standard unit is the euro.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for money.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Money, standard = EUR, units = UNITS)]
    pub enum MoneyDim {}

    /// An amount of money.
    pub type Money = Rel<MoneyDim>;
    /// A currency.
    pub type MoneyUnit = Unit<MoneyDim>;

    define_units! { MoneyUnit;
        EUR = "euro", "EUR", ["€"], 1.0;
        USD = "US dollar", "USD", ["$", "US$"], 1.0;
        GBP = "pound sterling", "GBP", ["£"], 1.0;
        JPY = "Japanese yen", "JPY", ["¥"], 1.0;
        CHF = "Swiss franc", "CHF", [], 1.0;
        CNY = "Chinese yuan", "CNY", ["RMB"], 1.0;
    }
}

macro_rules! money_per_kind {
    ($module:ident, $dim:ident, $alias:ident, $unit_alias:ident, $kind:ident, $per_mod:ident :: $per_dim:ident, $doc:literal; $($name:ident = $money:ident / $per:ident;)+) => {
        #[doc = concat!("Money per ", $doc, ". The standard unit is EUR per the standard ", $doc, " unit; any other currency and denominator unit can be combined at runtime.")]
        pub mod $module {
            use super::money;
            use crate::macros::define_money_per_units;
            use crate::units::$per_mod;
            use crate::{Rel, Unit};
            use dimscalar_derive::Dimension;

            #[doc = concat!("Dimension tag for money per ", $doc, ".")]
            #[derive(Clone, Copy, Debug, Dimension)]
            #[dimension(kind = $kind, standard = UNITS[0], units = UNITS, per = $per_mod::$per_dim)]
            pub enum $dim {}

            #[doc = concat!("An amount of money per ", $doc, ".")]
            pub type $alias = Rel<$dim>;
            #[doc = concat!("A unit of money per ", $doc, ".")]
            pub type $unit_alias = Unit<$dim>;

            define_money_per_units! { $unit_alias;
                $($name = money::$money, $per_mod::$per;)+
            }
        }
    };
}

money_per_kind!(money_per_area, MoneyPerAreaDim, MoneyPerArea, MoneyPerAreaUnit, MoneyPerArea, area::AreaDim, "area";
    EUR_PER_SQUARE_METER = EUR / SQUARE_METER;
    USD_PER_SQUARE_METER = USD / SQUARE_METER;
    EUR_PER_HECTARE = EUR / HECTARE;
    USD_PER_SQUARE_FOOT = USD / SQUARE_FOOT;
);

money_per_kind!(money_per_duration, MoneyPerDurationDim, MoneyPerDuration, MoneyPerDurationUnit, MoneyPerDuration, duration::DurationDim, "duration";
    EUR_PER_SECOND = EUR / SECOND;
    EUR_PER_HOUR = EUR / HOUR;
    EUR_PER_DAY = EUR / DAY;
    USD_PER_HOUR = USD / HOUR;
);

money_per_kind!(money_per_energy, MoneyPerEnergyDim, MoneyPerEnergy, MoneyPerEnergyUnit, MoneyPerEnergy, energy::EnergyDim, "energy";
    EUR_PER_JOULE = EUR / JOULE;
    EUR_PER_KILOWATT_HOUR = EUR / KILOWATT_HOUR;
    USD_PER_KILOWATT_HOUR = USD / KILOWATT_HOUR;
    EUR_PER_MEGAWATT_HOUR = EUR / MEGAWATT_HOUR;
);

money_per_kind!(money_per_length, MoneyPerLengthDim, MoneyPerLength, MoneyPerLengthUnit, MoneyPerLength, length::LengthDim, "length";
    EUR_PER_METER = EUR / METER;
    EUR_PER_KILOMETER = EUR / KILOMETER;
    USD_PER_MILE = USD / MILE;
    USD_PER_FOOT = USD / FOOT;
);

money_per_kind!(money_per_mass, MoneyPerMassDim, MoneyPerMass, MoneyPerMassUnit, MoneyPerMass, mass::MassDim, "mass";
    EUR_PER_KILOGRAM = EUR / KILOGRAM;
    EUR_PER_TONNE = EUR / TONNE;
    USD_PER_POUND = USD / POUND;
);

money_per_kind!(money_per_volume, MoneyPerVolumeDim, MoneyPerVolume, MoneyPerVolumeUnit, MoneyPerVolume, volume::VolumeDim, "volume";
    EUR_PER_CUBIC_METER = EUR / CUBIC_METER;
    EUR_PER_LITER = EUR / LITER;
    USD_PER_GALLON_US = USD / GALLON_US;
    USD_PER_BARREL_OIL = USD / BARREL_OIL;
);
