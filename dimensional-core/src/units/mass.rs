//! Mass units.
//!
//! The canonical unit of [`Mass`] is the SI kilogram, so [`Gram::RATIO`](crate::Unit::RATIO) is `1e-3`.

use dimensional_derive::{Dimension, Unit};

/// Dimension tag for mass.
#[derive(Dimension)]
#[dimension(mass = 1)]
pub enum Mass {}

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, ratio = 1.0)]
pub struct Kilogram;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, ratio = 1e-3)]
pub struct Gram;

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Mass, ratio = 1_000.0)]
pub struct Tonne;

/// Avoirdupois pound (exactly `0.45359237 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Mass, ratio = 0.453_592_37)]
pub struct Pound;
