//! Core types for dimension-checked single-precision scalar quantities.
//!
//! `dimscalar-core` provides the value model behind `dimscalar`:
//!
//! - A *dimension* is an empty marker type implementing [`Dimension`] (`LengthDim`, `MassDim`, …), tied to one
//!   runtime [`QuantityKind`].
//! - A *unit* is a process-wide constant: a typed [`Unit<D>`] or its erased form [`AnyUnit`], carrying a scale (and
//!   for absolute kinds an offset) to the kind's standard unit.
//! - A value is a [`Rel<D>`] (magnitudes and differences) or an [`Abs<A>`] (values anchored to an origin). Both
//!   store an `f32` magnitude in the standard unit plus a display unit, and share the [`Scalar`] contract.
//! - Declared dimensional algebra edges are operator impls (`Speed × Duration → Length`).
//! - The dispatch factory ([`instantiate`], [`instantiate_si`]) turns a runtime unit into the matching concrete
//!   type, wrapped in [`AnyScalar`].
//!
//! Most users should depend on `dimscalar` (the facade crate).
//!
//! # Quick start
//!
//! ```rust
//! use dimscalar_core::length::{Length, KILOMETER, METER};
//! use dimscalar_core::duration::{Duration, SECOND};
//! use dimscalar_core::speed::Speed;
//! use dimscalar_core::Scalar;
//!
//! let d = Length::new(1.0, KILOMETER) + Length::new(500.0, METER);
//! assert_eq!(d.to_display_string(), "1.500 km");
//!
//! let v: Speed = d / Duration::new(100.0, SECOND);
//! assert_eq!(v.si(), 15.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimscalar_core::length::{Length, METER};
//! use dimscalar_core::mass::{Mass, KILOGRAM};
//!
//! let _ = Length::new(1.0, METER) + Mass::new(1.0, KILOGRAM);
//! ```
//!
//! Absolute values cannot be added to each other:
//!
//! ```compile_fail
//! use dimscalar_core::position::{Position, METER};
//!
//! let _ = Position::new(1.0, METER) + Position::new(2.0, METER);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: serde support for scalars, units and kinds; scalars serialize as `{"value", "unit"}`.
//! - `config`: loads [`DisplaySettings`] from TOML (implies `serde`).
//!
//! # Panics and errors
//!
//! Fallible operations (parsing, runtime dispatch, cross-kind checks, configuration) return [`Result`] with a
//! [`QuantityError`]. Arithmetic follows IEEE-754: division by zero and invalid operations produce infinities and
//! NaN rather than errors.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod absolute;
mod algebra;
mod dimension;
mod error;
mod factory;
mod format;
mod kind;
mod macros;
mod parse;
mod relative;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impl;
mod si;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use absolute::Abs;
pub use dimension::{AbsoluteDimension, Dimension, MoneyPerDimension, SiBase, SiDimensions};
pub use error::{ParseFailure, QuantityError, Result};
pub use factory::{instantiate, instantiate_si, AnyScalar};
pub use format::DisplaySettings;
pub use kind::{Polarity, QuantityKind};
pub use relative::Rel;
pub use scalar::Scalar;
pub use si::SiScalar;
pub use unit::{AnyUnit, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity kinds and their units.
pub mod units;

pub use units::{
    absolute_temperature, acceleration, angle, angle_solid, area, density, dimensionless, direction, duration,
    electrical_charge, electrical_current, electrical_potential, electrical_resistance, energy, flow_mass,
    flow_volume, force, frequency, length, linear_density, mass, money, money_per_area, money_per_duration,
    money_per_energy, money_per_length, money_per_mass, money_per_volume, position, power, pressure, speed,
    temperature, time, torque, volume,
};
