//! Predefined dimensions and units grouped by dimension.
//!
//! `dimensional-core` ships a small set of built-in dimension tags and unit markers so that construction, read-back
//! and formatting work out of the box.
//!
//! ## Modules
//!
//! - [`angular`]: the angle dimension, angle units, wraparound helpers, [`angular::AngleRange`],
//!   [`angular::CompassAngle`] and the angle/length conversions.
//! - [`frequency`]: frequency, angular velocity and angular acceleration.
//! - [`length`]: length, area and volume (SI metre is the canonical unit).
//! - [`mass`]: mass units (SI kilogram is the canonical unit).
//! - [`temperature`]: thermodynamic temperature (kelvin) with Celsius helpers.
//! - [`time`]: time units (SI second is the canonical unit).
//! - [`unitless`]: the dimensionless [`unitless::Number`] and its interop with raw `f64`.
//! - [`velocity`]: velocity and acceleration built from [`length`] and [`time`].

pub mod angular;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod unitless;
pub mod velocity;
