//! Compile-time dimensional analysis for physical quantities.
//!
//! `dimensional` is the user-facing crate in this workspace. It re-exports the full API from `dimensional-core` plus
//! the predefined dimensions and units (lengths, times, masses, angles, temperatures and their composites).
//!
//! The core idea is: a value is a `Quantity<D>`, where `D` is a zero-sized tag carrying the exponents of its
//! dimension over eight base dimensions. The value is stored in the canonical SI unit of `D`; units only appear when a
//! value enters ([`Quantity::of`]) or leaves ([`Quantity::value_in`]) the typed world.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Tracks the dimension of products, quotients, powers and roots, with rational exponents.
//! - Keeps angles in range ([`AngleRange`]), converts compass headings ([`CompassAngle`]) and relates arc length to
//!   angle through a radius ([`to_angular`], [`to_linear`]).
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit strings at runtime.
//! - Affine units such as degrees Celsius (see [`temperature`] for helpers).
//!
//! # Quick start
//!
//! ```rust
//! use dimensional::{Centimeter, Length, Quantity, Second, Time, Velocity};
//!
//! let d = Quantity::<Length>::of::<Centimeter>(500.0);
//! let t = Quantity::<Time>::of::<Second>(2.0);
//! let v: Quantity<Velocity> = (d / t).cast();
//! assert!((v.value() - 2.5).abs() < 1e-12);
//! ```
//!
//! Dimensionless numbers mix with `f64`:
//!
//! ```rust
//! use dimensional::Number;
//!
//! let mut n = Number::new(1.0);
//! n += 2.0;
//! assert!(n == 3.0);
//! ```
//!
//! # Incorrect usage (compile error)
//!
//! ```compile_fail
//! use dimensional::{Length, Quantity, Time};
//!
//! let d = Quantity::<Length>::new(1.0);
//! let t = Quantity::<Time>::new(1.0);
//! let _ = d + t; // dimension mismatch
//! ```
//!
//! ```compile_fail
//! use dimensional::{Length, Quantity};
//!
//! let d = Quantity::<Length>::new(1.0);
//! let _ = d < 1.0; // only dimensionless quantities compare with bare numbers
//! ```
//!
//! ```compile_fail
//! use dimensional::{Length, Quantity, Time};
//!
//! let d = Quantity::<Length>::new(1.0);
//! let t = Quantity::<Time>::new(1.0);
//! let _ = d < t; // comparisons need equal dimensions
//! ```
//!
//! ```compile_fail
//! use dimensional::{max, Length, Quantity, Time};
//!
//! let d = Quantity::<Length>::new(1.0);
//! let t = Quantity::<Time>::new(1.0);
//! let _ = max(d, t);
//! ```
//!
//! ```compile_fail
//! use dimensional::{to_angular, Length, Quantity, Time};
//!
//! let t = Quantity::<Time>::new(1.0);
//! let r = Quantity::<Length>::new(1.0);
//! let _ = to_angular(t, r); // the arc must be a length
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `dimensional::angular` (radians, degrees, turns, wrapping and trigonometry helpers, angle ranges, headings)
//! - `dimensional::length` (metres, centimetres, inches, area, volume)
//! - `dimensional::time` (seconds, minutes, hours, days)
//! - `dimensional::mass` (kilograms, grams, pounds)
//! - `dimensional::temperature` (kelvin, Celsius helpers)
//! - `dimensional::velocity` (velocity and acceleration)
//! - `dimensional::frequency` (frequency, angular velocity and acceleration)
//! - `dimensional::unitless` (`Number` and its interop with `f64`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimensional-core`.
//! - `serde`: enables `serde` support for `Quantity` and `Rational`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimensional = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension errors are compile errors. At runtime, dividing by a zero quantity or building a rational with a zero
//! denominator panics; [`Quantity::checked_div`], [`Rational::try_new`] and the `checked_*` rational operations
//! return [`Error`] instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimensional_core::*;

/// Derive macros used by `dimensional-core` to define dimension tags and unit markers.
///
/// These macros expand in terms of crate-root paths (`crate::Unit`, `crate::Dimension`, …), so they are intended for
/// use inside `dimensional-core` (or crates exposing the same crate-root API). Most users should not need them.
pub use dimensional_derive::{Dimension, Unit};

pub use dimensional_core::units::angular;
pub use dimensional_core::units::frequency;
pub use dimensional_core::units::length;
pub use dimensional_core::units::mass;
pub use dimensional_core::units::temperature;
pub use dimensional_core::units::time;
pub use dimensional_core::units::unitless;
pub use dimensional_core::units::velocity;

pub use dimensional_core::units::angular::*;
pub use dimensional_core::units::frequency::*;
pub use dimensional_core::units::length::*;
pub use dimensional_core::units::mass::*;
pub use dimensional_core::units::temperature::*;
pub use dimensional_core::units::time::*;
pub use dimensional_core::units::velocity::*;
