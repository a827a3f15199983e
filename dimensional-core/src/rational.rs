//! Exact rational numbers used as dimension exponents.
//!
//! A [`Rational`] is always stored in lowest terms with a strictly positive denominator, so two rationals are equal
//! exactly when their fields are equal. Every operation is `const`-evaluable: exponent vectors of derived dimensions are
//! computed at compile time, and a failure there (zero denominator, overflow) becomes a compile error.
//!
//! Intermediate products are formed in `i128` and only narrowed back to `i64` after reduction, so an operation fails
//! with [`Error::Overflow`] only when the *reduced* result does not fit.
//!
//! ```rust
//! use dimensional_core::Rational;
//!
//! let half = Rational::new(4, 8);
//! assert_eq!(half.numerator(), 1);
//! assert_eq!(half.denominator(), 2);
//! assert_eq!(half + Rational::new(1, 3), Rational::new(5, 6));
//! ```

use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact fraction of two `i64`, kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRational"))]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Unwraps a const result, turning the error into a panic (a compile error in const context).
const fn unwrap_const(result: Result<Rational>) -> Rational {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err.panic_message()),
    }
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    /// `1/1`.
    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    /// Builds `numerator / denominator` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denominator == 0` or the reduced fraction does not fit in `i64`. In a `const` context the panic is
    /// reported as a compile error.
    ///
    /// ```rust
    /// use dimensional_core::Rational;
    /// let r = Rational::new(6, -4);
    /// assert_eq!((r.numerator(), r.denominator()), (-3, 2));
    /// ```
    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        unwrap_const(Self::try_new(numerator, denominator))
    }

    /// Fallible form of [`Rational::new`].
    ///
    /// ```rust
    /// use dimensional_core::{Error, Rational};
    /// assert_eq!(Rational::try_new(1, 0), Err(Error::ZeroDenominator));
    /// ```
    #[inline]
    pub const fn try_new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::reduce(numerator as i128, denominator as i128)
    }

    /// Lifts an integer (`n/1`).
    #[inline]
    pub const fn integer(value: i64) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }

    // Both inputs come from products of at most two i64 values plus one addition, so their magnitudes stay below
    // 2^127 and neither the gcd nor the sign flip can overflow i128.
    const fn reduce(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        let mut n = numerator / divisor;
        let mut d = denominator / divisor;
        if d < 0 {
            n = -n;
            d = -d;
        }
        if n < i64::MIN as i128 || n > i64::MAX as i128 || d > i64::MAX as i128 {
            return Err(Error::Overflow);
        }
        Ok(Rational {
            numerator: n as i64,
            denominator: d as i64,
        })
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Denominator (always `> 0`).
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// `true` for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// `true` when the denominator is `1`.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// Equality usable in constant evaluation.
    #[inline]
    pub const fn const_eq(self, other: Rational) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Nearest `f64` to this fraction.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Nearest `f32` to this fraction.
    #[inline]
    pub const fn to_f32(self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    const fn try_add(self, rhs: Rational) -> Result<Self> {
        Self::reduce(
            self.numerator as i128 * rhs.denominator as i128
                + rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    const fn try_sub(self, rhs: Rational) -> Result<Self> {
        Self::reduce(
            self.numerator as i128 * rhs.denominator as i128
                - rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    const fn try_mul(self, rhs: Rational) -> Result<Self> {
        Self::reduce(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    const fn try_div(self, rhs: Rational) -> Result<Self> {
        Self::reduce(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )
    }

    /// Const addition.
    ///
    /// # Panics
    ///
    /// Panics if the reduced sum does not fit in `i64`.
    #[inline]
    pub const fn add(self, rhs: Rational) -> Rational {
        unwrap_const(self.try_add(rhs))
    }

    /// Const subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the reduced difference does not fit in `i64`.
    #[inline]
    pub const fn sub(self, rhs: Rational) -> Rational {
        unwrap_const(self.try_sub(rhs))
    }

    /// Const multiplication.
    ///
    /// # Panics
    ///
    /// Panics if the reduced product does not fit in `i64`.
    #[inline]
    pub const fn mul(self, rhs: Rational) -> Rational {
        unwrap_const(self.try_mul(rhs))
    }

    /// Const division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or the reduced quotient does not fit in `i64`.
    #[inline]
    pub const fn div(self, rhs: Rational) -> Rational {
        unwrap_const(self.try_div(rhs))
    }

    /// Const negation.
    ///
    /// # Panics
    ///
    /// Panics for a numerator of `i64::MIN`.
    #[inline]
    pub const fn neg(self) -> Rational {
        unwrap_const(Self::reduce(
            -(self.numerator as i128),
            self.denominator as i128,
        ))
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub const fn recip(self) -> Rational {
        Rational::ONE.div(self)
    }

    /// Checked addition.
    pub fn checked_add(self, rhs: Rational) -> Result<Rational> {
        self.try_add(rhs).inspect_err(|err| {
            log::debug!("rational addition {} + {} failed: {}", self, rhs, err);
        })
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Rational) -> Result<Rational> {
        self.try_sub(rhs).inspect_err(|err| {
            log::debug!("rational subtraction {} - {} failed: {}", self, rhs, err);
        })
    }

    /// Checked multiplication.
    pub fn checked_mul(self, rhs: Rational) -> Result<Rational> {
        self.try_mul(rhs).inspect_err(|err| {
            log::debug!("rational multiplication {} * {} failed: {}", self, rhs, err);
        })
    }

    /// Checked division; dividing by zero yields [`Error::ZeroDenominator`].
    ///
    /// ```rust
    /// use dimensional_core::{Error, Rational};
    /// let r = Rational::new(1, 2).checked_div(Rational::ZERO);
    /// assert_eq!(r, Err(Error::ZeroDenominator));
    /// ```
    pub fn checked_div(self, rhs: Rational) -> Result<Rational> {
        self.try_div(rhs).inspect_err(|err| {
            log::debug!("rational division {} / {} failed: {}", self, rhs, err);
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Rational {
    type Output = Rational;
    #[inline]
    fn add(self, rhs: Rational) -> Rational {
        Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;
    #[inline]
    fn sub(self, rhs: Rational) -> Rational {
        Rational::sub(self, rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;
    #[inline]
    fn mul(self, rhs: Rational) -> Rational {
        Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Rational;
    #[inline]
    fn div(self, rhs: Rational) -> Rational {
        Rational::div(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Rational::integer(value)
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(value: i32) -> Self {
        Rational::integer(value as i64)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = Error;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        Rational::try_new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Wire form accepted on deserialization; normalized through [`Rational::try_new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRational {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = Error;

    fn try_from(raw: RawRational) -> Result<Self> {
        Rational::try_new(raw.numerator, raw.denominator)
    }
}
