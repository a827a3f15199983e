//! Length, area and volume.
//!
//! The canonical unit of [`Length`] is the metre ([`Meter::RATIO`](crate::Unit::RATIO) `== 1.0`); imperial units
//! use their exact international definitions (the inch is exactly `0.0254 m`).
//!
//! ```rust
//! use dimensional_core::length::{Area, Foot, Inch, Length};
//! use dimensional_core::Quantity;
//!
//! let side = Quantity::<Length>::of::<Foot>(1.0);
//! assert!((side.value_in::<Inch>() - 12.0).abs() < 1e-12);
//!
//! let area = (side * side).cast::<Area>();
//! assert!((area.value() - 0.09290304).abs() < 1e-12);
//! ```

use crate::Quantity;
use dimensional_derive::{Dimension, Unit};

/// Dimension tag for length.
#[derive(Dimension)]
#[dimension(length = 1)]
pub enum Length {}

/// Dimension tag for area (`m^2`).
#[derive(Dimension)]
#[dimension(length = 2)]
pub enum Area {}

/// Dimension tag for volume (`m^3`).
#[derive(Dimension)]
#[dimension(length = 3)]
pub enum Volume {}

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1.0)]
pub struct Meter;

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, ratio = 1_000.0)]
pub struct Kilometer;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, ratio = 1e-2)]
pub struct Centimeter;

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, ratio = 1e-3)]
pub struct Millimeter;

/// International inch (exactly `0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, ratio = 0.0254)]
pub struct Inch;

/// International foot (exactly `0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, ratio = 0.3048)]
pub struct Foot;

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", dimension = Area, ratio = 1.0)]
pub struct SquareMeter;

/// Cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m³", dimension = Volume, ratio = 1.0)]
pub struct CubicMeter;

/// Litre (`1e-3 m³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", dimension = Volume, ratio = 1e-3)]
pub struct Liter;

/// One metre.
pub const METER: Quantity<Length> = Quantity::new(1.0);
