//! Predefined quantity kinds and their units, grouped by domain.
//!
//! Each kind lives in its own module holding the dimension marker (`LengthDim`), the scalar alias (`Length`), the
//! unit alias (`LengthUnit`) and the unit constants (`METER`, `KILOMETER`, …). The first unit of every kind is its
//! standard (SI) unit, in which magnitudes are stored.
//!
//! ## Modules
//!
//! - space: [`length`], [`position`], [`area`], [`volume`], [`linear_density`], [`angle`], [`direction`],
//!   [`angle_solid`]
//! - time: [`duration`], [`time`], [`frequency`]
//! - motion: [`speed`], [`acceleration`], [`flow_mass`], [`flow_volume`]
//! - matter: [`dimensionless`], [`mass`], [`density`]
//! - mechanics: [`force`], [`energy`], [`power`], [`pressure`], [`torque`]
//! - electrical: [`electrical_charge`], [`electrical_current`], [`electrical_potential`],
//!   [`electrical_resistance`]
//! - thermal: [`temperature`], [`absolute_temperature`]
//! - money: [`money`], [`money_per_area`], [`money_per_duration`], [`money_per_energy`], [`money_per_length`],
//!   [`money_per_mass`], [`money_per_volume`]

mod electrical;
mod matter;
mod mechanics;
mod monetary;
mod motion;
mod space;
mod temporal;
mod thermal;

pub use electrical::{
    electrical_charge, electrical_current, electrical_potential, electrical_resistance,
};
pub use matter::{density, dimensionless, mass};
pub use mechanics::{energy, force, power, pressure, torque};
pub use monetary::{
    money, money_per_area, money_per_duration, money_per_energy, money_per_length, money_per_mass,
    money_per_volume,
};
pub use motion::{acceleration, flow_mass, flow_volume, speed};
pub use space::{angle, angle_solid, area, direction, length, linear_density, position, volume};
pub use temporal::{duration, frequency, time};
pub use thermal::{absolute_temperature, temperature};
