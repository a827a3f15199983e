//! Core type system for compile-time dimensional analysis.
//!
//! `dimensional-core` tags every physical value with the exponents of its dimension:
//!
//! - A [`Rational`] is an exact, always-normalized fraction used for exponents.
//! - A [`DimensionVector`] holds one exponent per base dimension; the crate basis is [`Exponents`] with
//!   [`BASE_DIMENSIONS`] slots (mass, length, time, current, angle, temperature, luminosity, amount).
//! - A *dimension* is a zero-sized tag implementing [`Dimension`]. Composite tags ([`Product`], [`Quotient`],
//!   [`Power`], [`Root`]) compute their exponents during constant evaluation.
//! - A value tagged with a dimension is a [`Quantity<D, R>`], backed by an `f64` by default. The stored value is
//!   always in the canonical unit of `D`.
//! - A *unit* is a zero-sized marker implementing [`Unit`]; it only matters when a value enters or leaves a
//!   quantity ([`Quantity::of`], [`Quantity::value_in`]).
//!
//! Most users should depend on `dimensional` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Adding, subtracting or comparing quantities of different dimensions is rejected while compiling.
//!   The check is a constant assertion evaluated when the operation is instantiated: it fails `cargo build` and
//!   `cargo test`, but not `cargo check`, and code that is never instantiated is not checked.
//! - Multiplying and dividing quantities produces the right dimension, including rational exponents (`m^(1/2)`).
//! - Zero runtime overhead for dimension tags (phantom types and constants only).
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit strings at runtime.
//! - Affine units (degrees Celsius): only ratio units are modeled, see [`temperature`] for helpers.
//!
//! # Quick start
//!
//! ```rust
//! use dimensional_core::length::{Centimeter, Length};
//! use dimensional_core::time::{Second, Time};
//! use dimensional_core::velocity::Velocity;
//! use dimensional_core::Quantity;
//!
//! let d = Quantity::<Length>::of::<Centimeter>(250.0);
//! let t = Quantity::<Time>::of::<Second>(2.0);
//! let v = (d / t).cast::<Velocity>();
//! assert!((v.value() - 1.25).abs() < 1e-12);
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```compile_fail
//! use dimensional_core::length::Length;
//! use dimensional_core::time::Time;
//! use dimensional_core::Quantity;
//!
//! let total = Quantity::<Length>::new(1.0) - Quantity::<Time>::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimensional-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimensional-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Quantity`] and [`Rational`]; quantities serialize as their raw canonical
//!   value, or with their dimension through [`serde_with_dimension`].
//!
//! # Panics and errors
//!
//! Operators panic where the equivalent integer operation would: building a [`Rational`] with a zero denominator,
//! rational overflow, or dividing a quantity by zero. Each has a `checked_*` or `try_*` counterpart returning
//! [`Result`]. Failures of checked operations are reported through the `log` facade at debug level.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod dimension_vector;
mod error;
mod math;
mod quantity;
mod rational;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{same_dimension, Dimension, Dimensionless, Power, Product, Quotient, Root};
pub use dimension_vector::{BaseDimension, DimensionVector, Exponents, BASE_DIMENSIONS};
pub use error::{Error, Result};
pub use quantity::{max, min, Quantity};
pub use rational::Rational;
pub use unit::{InUnit, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions and units
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions and units (grouped by dimension).
///
/// These are defined in `dimensional-core` so they can carry inherent helpers and operator impls without running
/// into Rust's orphan rules.
pub mod units;

pub use units::angular;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::temperature;
pub use units::time;
pub use units::unitless;
pub use units::velocity;

pub use units::angular::{to_angular, to_linear, Angle, AngleRange, CompassAngle};
pub use units::unitless::Number;
