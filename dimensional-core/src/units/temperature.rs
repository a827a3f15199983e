//! Thermodynamic temperature.
//!
//! Only the kelvin is modeled as a [`Unit`](crate::Unit): quantities are ratio-scaled, and the Celsius scale is an
//! offset of the kelvin scale rather than a multiple of it. [`Quantity::from_celsius`] and [`Quantity::to_celsius`]
//! convert absolute readings at the boundary.
//!
//! ```rust
//! use dimensional_core::temperature::Temperature;
//! use dimensional_core::{max, Quantity};
//!
//! let a = Quantity::<Temperature>::from_celsius(10.0);
//! let b = Quantity::<Temperature>::new(1.0);
//! assert_eq!(max(a, b), a);
//! ```

use crate::Quantity;
use dimensional_derive::{Dimension, Unit};

/// Offset between the Celsius and kelvin scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Dimension tag for thermodynamic temperature.
#[derive(Dimension)]
#[dimension(temperature = 1)]
pub enum Temperature {}

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Temperature, ratio = 1.0)]
pub struct Kelvin;

/// Millikelvin (`1e-3 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mK", dimension = Temperature, ratio = 1e-3)]
pub struct Millikelvin;

impl Quantity<Temperature> {
    /// Absolute temperature from a Celsius reading.
    #[inline]
    pub fn from_celsius(celsius: f64) -> Self {
        Self::new(celsius + CELSIUS_OFFSET)
    }

    /// Absolute temperature as a Celsius reading.
    #[inline]
    pub fn to_celsius(self) -> f64 {
        self.value() - CELSIUS_OFFSET
    }
}
