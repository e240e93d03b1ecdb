//! Dimension-checked single-precision scalar quantities.
//!
//! `dimscalar` is the user-facing crate in this workspace. It re-exports the full API from `dimscalar-core`: the
//! [`Rel`]/[`Abs`] scalar types, the per-kind unit modules (`length`, `mass`, `money_per_area`, …), the dimensional
//! algebra between them and the runtime dispatch factory.
//!
//! A value stores its magnitude as an `f32` in the standard (SI) unit of its kind, together with a display unit.
//! Equality, hashing and ordering only look at the standard-unit magnitude; the display unit is used for rendering
//! and by the operations that preserve units.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add meters to kilograms, or two positions).
//! - Provides the declared products and quotients between kinds (`Force × Length → Energy`, `Mass ÷ Volume →
//!   Density`, `Energy × MoneyPerEnergy → Money`, …).
//! - Bridges runtime units to concrete types: [`instantiate`] returns an [`AnyScalar`] for any registered unit.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary user-defined compound units: products without a declared edge degrade to an anonymous
//!   [`SiScalar`].
//! - Double precision: magnitudes are `f32`.
//! - Currency conversion: currencies share one money kind with scale 1.
//!
//! # Quick start
//!
//! ```rust
//! use dimscalar::duration::{Duration, SECOND};
//! use dimscalar::length::{Length, METER};
//! use dimscalar::speed::{Speed, METER_PER_SECOND};
//! use dimscalar::Scalar;
//!
//! let d: Length = Speed::new(20.0, METER_PER_SECOND) * Duration::new(5.0, SECOND);
//! assert_eq!(d.si(), 100.0);
//! assert_eq!(d.unit(), METER);
//! assert_eq!(d.to_display_string(), "100.000 m");
//! ```
//!
//! Parse text and dispatch on a runtime kind:
//!
//! ```rust
//! use dimscalar::{AnyScalar, Mass, QuantityKind};
//!
//! let m: Mass = "12.5 kg".parse().unwrap();
//! assert_eq!(m.si(), 12.5);
//!
//! let any = AnyScalar::parse(QuantityKind::Mass, "250 g").unwrap();
//! assert_eq!(Mass::try_from(any).unwrap().si(), 0.25);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: serde support for scalars, units and kinds.
//! - `config`: TOML-loaded [`DisplaySettings`] (implies `serde`).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use dimscalar_core::*;

pub use dimscalar_core::absolute_temperature::AbsoluteTemperature;
pub use dimscalar_core::acceleration::Acceleration;
pub use dimscalar_core::angle::Angle;
pub use dimscalar_core::angle_solid::AngleSolid;
pub use dimscalar_core::area::Area;
pub use dimscalar_core::density::Density;
pub use dimscalar_core::dimensionless::Dimensionless;
pub use dimscalar_core::direction::Direction;
pub use dimscalar_core::duration::Duration;
pub use dimscalar_core::electrical_charge::ElectricalCharge;
pub use dimscalar_core::electrical_current::ElectricalCurrent;
pub use dimscalar_core::electrical_potential::ElectricalPotential;
pub use dimscalar_core::electrical_resistance::ElectricalResistance;
pub use dimscalar_core::energy::Energy;
pub use dimscalar_core::flow_mass::FlowMass;
pub use dimscalar_core::flow_volume::FlowVolume;
pub use dimscalar_core::force::Force;
pub use dimscalar_core::frequency::Frequency;
pub use dimscalar_core::length::Length;
pub use dimscalar_core::linear_density::LinearDensity;
pub use dimscalar_core::mass::Mass;
pub use dimscalar_core::money::Money;
pub use dimscalar_core::money_per_area::MoneyPerArea;
pub use dimscalar_core::money_per_duration::MoneyPerDuration;
pub use dimscalar_core::money_per_energy::MoneyPerEnergy;
pub use dimscalar_core::money_per_length::MoneyPerLength;
pub use dimscalar_core::money_per_mass::MoneyPerMass;
pub use dimscalar_core::money_per_volume::MoneyPerVolume;
pub use dimscalar_core::position::Position;
pub use dimscalar_core::power::Power;
pub use dimscalar_core::pressure::Pressure;
pub use dimscalar_core::speed::Speed;
pub use dimscalar_core::temperature::Temperature;
pub use dimscalar_core::time::Time;
pub use dimscalar_core::torque::Torque;
pub use dimscalar_core::volume::Volume;
