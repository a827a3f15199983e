//! Velocity and acceleration.
//!
//! Dividing a length by a time yields a `Quotient<Length, Time>`, which has the same exponents as [`Velocity`] and can
//! be used wherever a velocity is expected, or renamed with [`Quantity::cast`](crate::Quantity::cast).
//!
//! ```rust
//! use dimensional_core::length::{Kilometer, Length};
//! use dimensional_core::time::{Hour, Time};
//! use dimensional_core::velocity::{KilometerPerHour, Velocity};
//! use dimensional_core::Quantity;
//!
//! let v: Quantity<Velocity> = (Quantity::<Length>::of::<Kilometer>(90.0) / Quantity::<Time>::of::<Hour>(1.0)).cast();
//! assert!((v.value() - 25.0).abs() < 1e-12);
//! assert!((v.value_in::<KilometerPerHour>() - 90.0).abs() < 1e-12);
//! ```

use dimensional_derive::{Dimension, Unit};

/// Dimension tag for velocity (`m·s^-1`).
#[derive(Dimension)]
#[dimension(length = 1, time = -1)]
pub enum Velocity {}

/// Dimension tag for acceleration (`m·s^-2`).
#[derive(Dimension)]
#[dimension(length = 1, time = -2)]
pub enum Acceleration {}

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = Velocity, ratio = 1.0)]
pub struct MeterPerSecond;

/// Kilometre per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", dimension = Velocity, ratio = 1_000.0 / 3_600.0)]
pub struct KilometerPerHour;

/// Metre per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s²", dimension = Acceleration, ratio = 1.0)]
pub struct MeterPerSecondSquared;

/// Standard gravity (`9.80665 m·s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g₀", dimension = Acceleration, ratio = 9.806_65)]
pub struct StandardGravity;
