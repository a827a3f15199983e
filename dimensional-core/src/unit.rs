//! Unit types and traits.

use crate::dimension::Dimension;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *canonical unit* of its dimension (the SI coherent unit:
///   metre, second, kilogram, radian, kelvin, …). A quantity always stores the canonical value, so constructing
///   `2 cm` stores `2 * Centimeter::RATIO == 0.02`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"cm"`).
///
/// * `Dim` ties the unit to its [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// A quantity of `value` in this unit.
    ///
    /// ```rust
    /// use dimensional_core::length::Centimeter;
    /// use dimensional_core::Unit;
    ///
    /// let d = Centimeter::quantity(2.0);
    /// assert!((d.value() - 0.02).abs() < 1e-15);
    /// ```
    #[inline]
    fn quantity(value: f64) -> Quantity<Self::Dim> {
        Quantity::new(value * Self::RATIO)
    }
}

/// A quantity rendered in a chosen unit, as `<value> <symbol>`.
///
/// Returned by [`Quantity::display_in`].
#[derive(Clone, Copy)]
pub struct InUnit<U: Unit> {
    value: f64,
    unit: PhantomData<U>,
}

impl<U: Unit> InUnit<U> {
    pub(crate) const fn new(value: f64) -> Self {
        InUnit {
            value,
            unit: PhantomData,
        }
    }

    /// The numeric value expressed in `U`.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }
}

impl<U: Unit> Display for InUnit<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.value, f)?;
        write!(f, " {}", U::SYMBOL)
    }
}

impl<U: Unit> Debug for InUnit<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:?} {}", self.value, U::SYMBOL)
    }
}
