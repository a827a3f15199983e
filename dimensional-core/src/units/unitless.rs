//! Dimensionless numbers and their interop with raw `f64`.
//!
//! [`Number`] is `Quantity<Dimensionless>`. Unlike other quantities, a dimensionless quantity can be mixed freely
//! with bare `f64` values: `+`, `-`, compound assignment and comparisons work with the `f64` on either side. The
//! operators are written for every dimension tag but reject, while compiling, any tag whose exponents are not all zero,
//! so a ratio such as `Quotient<Length, Length>` qualifies and a length does not.
//!
//! The bare number is always an `f64`; integer literals need a decimal point (`n += 2.0`, not `n += 2`).
//!
//! ```rust
//! use dimensional_core::Number;
//!
//! assert!(Number::new(1.0) + 2.0 == 3.0);
//! assert!(1.0 + Number::new(2.0) <= 3.0);
//! assert!(1.0 / Number::new(2.0) >= 0.0);
//! ```
//!
//! ```compile_fail
//! use dimensional_core::length::Length;
//! use dimensional_core::Quantity;
//!
//! let _ = Quantity::<Length>::new(1.0) + 2.0;
//! ```
//!
//! ```compile_fail
//! use dimensional_core::Number;
//!
//! let mut n = Number::new(1.0);
//! n += 2;
//! ```

use crate::dimension::AssertDimensionless;
use crate::error::Error;
use crate::{Dimension, Dimensionless, Quantity};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, DivAssign, MulAssign, Sub, SubAssign};

/// A dimensionless quantity.
pub type Number = Quantity<Dimensionless>;

impl Quantity<Dimensionless> {
    /// Adds one and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        *self += 1.0;
        *self
    }

    /// Subtracts one and returns the new value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        *self -= 1.0;
        *self
    }
}

impl From<f64> for Quantity<Dimensionless> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    #[inline]
    fn from(number: Quantity<Dimensionless>) -> Self {
        number.value()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless ⊕ f64
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        let () = AssertDimensionless::<D>::OK;
        Self::new(self.value() + rhs)
    }
}

impl<D: Dimension> Sub<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        let () = AssertDimensionless::<D>::OK;
        Self::new(self.value() - rhs)
    }
}

impl<D: Dimension> Add<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn add(self, rhs: Quantity<D>) -> Quantity<D> {
        let () = AssertDimensionless::<D>::OK;
        Quantity::new(self + rhs.value())
    }
}

impl<D: Dimension> Sub<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn sub(self, rhs: Quantity<D>) -> Quantity<D> {
        let () = AssertDimensionless::<D>::OK;
        Quantity::new(self - rhs.value())
    }
}

impl<D: Dimension> AddAssign<f64> for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl<D: Dimension> SubAssign<f64> for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// f64 ⊕= dimensionless
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> AddAssign<Quantity<D>> for f64 {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D>) {
        let () = AssertDimensionless::<D>::OK;
        *self += rhs.value();
    }
}

impl<D: Dimension> SubAssign<Quantity<D>> for f64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D>) {
        let () = AssertDimensionless::<D>::OK;
        *self -= rhs.value();
    }
}

impl<D: Dimension> MulAssign<Quantity<D>> for f64 {
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<D>) {
        let () = AssertDimensionless::<D>::OK;
        *self *= rhs.value();
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl<D: Dimension> DivAssign<Quantity<D>> for f64 {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<D>) {
        let () = AssertDimensionless::<D>::OK;
        if rhs.value() == 0.0 {
            panic!("{}", Error::DivisionByZero.panic_message());
        }
        *self /= rhs.value();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons with f64
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> PartialEq<f64> for Quantity<D> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        let () = AssertDimensionless::<D>::OK;
        self.value() == *other
    }
}

impl<D: Dimension> PartialEq<Quantity<D>> for f64 {
    #[inline]
    fn eq(&self, other: &Quantity<D>) -> bool {
        other == self
    }
}

impl<D: Dimension> PartialOrd<f64> for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        let () = AssertDimensionless::<D>::OK;
        self.value().partial_cmp(other)
    }
}

impl<D: Dimension> PartialOrd<Quantity<D>> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn number_from_and_into_f64() {
        let n: Number = 1.5.into();
        assert_eq!(n.value(), 1.5);
        let x: f64 = n.into();
        assert_eq!(x, 1.5);
    }

    #[test]
    fn display_has_no_units() {
        assert_eq!(Number::new(123.456).to_string(), "123.456");
    }

    #[test]
    fn ratio_of_lengths_is_a_number() {
        let ratio = Quantity::<Length>::new(3.0) / Quantity::<Length>::new(4.0);
        assert!(ratio == 0.75);
        let n: Number = ratio.cast();
        assert_eq!(f64::from(n), 0.75);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators with f64
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mixed_arithmetic() {
        assert!(Number::new(1.0) + 2.0 == 3.0);
        assert!(1.0 + Number::new(2.0) <= 3.0);
        assert!(1.0 / Number::new(2.0) >= 0.0);
        assert_eq!((5.0 - Number::new(2.0)).value(), 3.0);
        assert_eq!((Number::new(5.0) - 2.0).value(), 3.0);
        assert_eq!((Number::new(5.0) * 2.0).value(), 10.0);
        assert_eq!((2.0 * Number::new(5.0)).value(), 10.0);
        assert_eq!((Number::new(5.0) / 2.0).value(), 2.5);
    }

    #[test]
    fn comparisons_both_ways() {
        let n = Number::new(2.0);
        assert!(n == 2.0);
        assert!(2.0 == n);
        assert!(n < 3.0);
        assert!(3.0 > n);
        assert!(1.0 <= n);
        assert!(n != 2.5);
    }

    #[test]
    fn number_assignment_sequence() {
        let mut n = Number::new(1.0);
        n += 2.0;
        assert_eq!(n, 3.0);
        assert_eq!(n.decrement(), 2.0);
        n -= 3.0;
        assert_eq!(n, -1.0);
        n *= 2.0;
        assert_eq!(n, -2.0);
        n /= 2.0;
        assert_eq!(n, -1.0);
        assert_eq!(n.increment(), 0.0);
        assert_eq!(n, 0.0);
    }

    #[test]
    fn f64_assignment_sequence() {
        let mut d = 1.0_f64;
        d += Number::new(2.0);
        assert_eq!(d, 3.0);
        d -= Number::new(2.0);
        assert_eq!(d, 1.0);
        d *= Number::new(2.0);
        assert_eq!(d, 2.0);
        d /= Number::new(2.0);
        assert_eq!(d, 1.0);
    }

    #[test]
    #[should_panic(expected = "divide a quantity by zero")]
    fn f64_div_assign_by_zero_panics() {
        let mut d = 1.0_f64;
        d /= Number::new(0.0);
    }

    proptest! {
        #[test]
        fn prop_number_matches_f64(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            prop_assert_eq!((Number::new(a) + b).value(), a + b);
            prop_assert_eq!((a - Number::new(b)).value(), a - b);
            let mut d = a;
            d *= Number::new(b);
            assert_abs_diff_eq!(d, a * b, epsilon = 1e-6);
        }
    }
}
