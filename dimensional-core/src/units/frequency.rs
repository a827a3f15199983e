//! Frequency, angular velocity and angular acceleration.
//!
//! Angular rates carry the angle base dimension explicitly (`rad·s^-1`), so they do not mix with plain frequencies
//! (`s^-1`).
//!
//! ```rust
//! use dimensional_core::frequency::{AngularVelocity, RadianPerSecond, RevolutionPerMinute};
//! use dimensional_core::Quantity;
//!
//! let w = Quantity::<AngularVelocity>::of::<RevolutionPerMinute>(60.0);
//! assert!((w.value_in::<RadianPerSecond>() - core::f64::consts::TAU).abs() < 1e-12);
//! ```

use core::f64::consts::TAU;
use dimensional_derive::{Dimension, Unit};

/// Dimension tag for frequency (`s^-1`).
#[derive(Dimension)]
#[dimension(time = -1)]
pub enum Frequency {}

/// Dimension tag for angular velocity (`rad·s^-1`).
#[derive(Dimension)]
#[dimension(angle = 1, time = -1)]
pub enum AngularVelocity {}

/// Dimension tag for angular acceleration (`rad·s^-2`).
#[derive(Dimension)]
#[dimension(angle = 1, time = -2)]
pub enum AngularAcceleration {}

/// Hertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = Frequency, ratio = 1.0)]
pub struct Hertz;

/// Radian per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/s", dimension = AngularVelocity, ratio = 1.0)]
pub struct RadianPerSecond;

/// Degree per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°/s", dimension = AngularVelocity, ratio = TAU / 360.0)]
pub struct DegreePerSecond;

/// Revolution per minute.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", dimension = AngularVelocity, ratio = TAU / 60.0)]
pub struct RevolutionPerMinute;

/// Radian per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/s²", dimension = AngularAcceleration, ratio = 1.0)]
pub struct RadianPerSecondSquared;

/// Revolution per minute squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm²", dimension = AngularAcceleration, ratio = TAU / 3_600.0)]
pub struct RevolutionPerMinuteSquared;
