//! Time units.
//!
//! The canonical unit of [`Time`] is the SI second. Minutes, hours and days use their conventional civil lengths
//! (`60 s`, `3600 s`, `86400 s`).
//!
//! ```rust
//! use dimensional_core::time::{Hour, Minute, Time};
//! use dimensional_core::Quantity;
//!
//! let t = Quantity::<Time>::of::<Hour>(1.5);
//! assert_eq!(t.value_in::<Minute>(), 90.0);
//! ```

use crate::Quantity;
use dimensional_derive::{Dimension, Unit};

/// Dimension tag for time.
#[derive(Dimension)]
#[dimension(time = 1)]
pub enum Time {}

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1.0)]
pub struct Second;

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = 1e-3)]
pub struct Millisecond;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = 60.0)]
pub struct Minute;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = 3_600.0)]
pub struct Hour;

/// Day (`86400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Time, ratio = 86_400.0)]
pub struct Day;

/// One second.
pub const SECOND: Quantity<Time> = Quantity::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn day_is_24_hours() {
        let day = Quantity::<Time>::of::<Day>(1.0);
        assert_eq!(day.value_in::<Hour>(), 24.0);
        assert_eq!(day.value(), 86_400.0);
    }

    #[test]
    fn milliseconds() {
        let t = Quantity::<Time>::of::<Millisecond>(1_500.0);
        assert_abs_diff_eq!(t.value(), 1.5, epsilon = 1e-12);
        assert_eq!(t.display_in::<Millisecond>().to_string(), "1500 ms");
    }

    #[test]
    fn second_constant_display() {
        assert_eq!((SECOND * 2.0).to_string(), "2 s");
    }

    proptest! {
        #[test]
        fn prop_minute_roundtrip(v in -1e6..1e6f64) {
            let t = Quantity::<Time>::of::<Minute>(v);
            prop_assert!((t.value_in::<Minute>() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
