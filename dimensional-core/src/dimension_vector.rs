//! Exponent vectors over a fixed basis of base dimensions.
//!
//! A [`DimensionVector<N>`] holds one [`Rational`] exponent per base dimension. The basis size `N` is part of the
//! type, so vectors over different bases cannot be combined or compared at all. This crate works over the
//! eight-slot basis described by [`BaseDimension`]; [`Exponents`] is the corresponding alias.
//!
//! ```rust
//! use dimensional_core::{BaseDimension, Exponents, Rational};
//!
//! let velocity = Exponents::base(BaseDimension::Length).sub(Exponents::base(BaseDimension::Time));
//! assert_eq!(velocity.get(BaseDimension::Time), Rational::integer(-1));
//! assert_eq!(velocity.to_string(), "m·s^-1");
//! ```
//!
//! Vectors of different sizes are different types:
//!
//! ```compile_fail
//! use dimensional_core::DimensionVector;
//!
//! let a = DimensionVector::<2>::ZERO;
//! let b = DimensionVector::<3>::ZERO;
//! let _ = a.add(b);
//! ```

use crate::error::{Error, Result};
use crate::rational::Rational;
use core::fmt;
use core::ops::{Add, Sub};

/// Number of base dimensions in this crate's basis.
pub const BASE_DIMENSIONS: usize = 8;

/// The base dimensions, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Mass (canonical unit: kilogram).
    Mass,
    /// Length (canonical unit: metre).
    Length,
    /// Time (canonical unit: second).
    Time,
    /// Electric current (canonical unit: ampere).
    Current,
    /// Plane angle (canonical unit: radian).
    Angle,
    /// Thermodynamic temperature (canonical unit: kelvin).
    Temperature,
    /// Luminous intensity (canonical unit: candela).
    Luminosity,
    /// Amount of substance (canonical unit: mole).
    Amount,
}

impl BaseDimension {
    /// Every base dimension, in slot order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Angle,
        BaseDimension::Temperature,
        BaseDimension::Luminosity,
        BaseDimension::Amount,
    ];

    /// Slot of this dimension in an [`Exponents`] vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the canonical unit, used when displaying quantities.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Angle => "rad",
            BaseDimension::Temperature => "K",
            BaseDimension::Luminosity => "cd",
            BaseDimension::Amount => "mol",
        }
    }
}

/// Exponent vector of the crate's basis.
pub type Exponents = DimensionVector<BASE_DIMENSIONS>;

/// One rational exponent per base dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DimensionVector<const N: usize> {
    exponents: [Rational; N],
}

impl<const N: usize> DimensionVector<N> {
    /// The dimensionless vector (all exponents zero).
    pub const ZERO: Self = DimensionVector {
        exponents: [Rational::ZERO; N],
    };

    /// Builds a vector from its slots.
    #[inline]
    pub const fn from_exponents(exponents: [Rational; N]) -> Self {
        DimensionVector { exponents }
    }

    /// The exponent slots.
    #[inline]
    pub const fn exponents(&self) -> &[Rational; N] {
        &self.exponents
    }

    /// Exponent at slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub const fn exponent(&self, index: usize) -> Rational {
        self.exponents[index]
    }

    /// Copy of `self` with slot `index` replaced by `exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub const fn with_exponent(self, index: usize, exponent: Rational) -> Self {
        let mut exponents = self.exponents;
        exponents[index] = exponent;
        DimensionVector { exponents }
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < N {
            if !self.exponents[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Slot-wise equality usable in constant evaluation.
    pub const fn const_eq(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if !self.exponents[i].const_eq(other.exponents[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Slot-wise sum; the exponents of a product of quantities.
    pub const fn add(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < N {
            exponents[i] = exponents[i].add(rhs.exponents[i]);
            i += 1;
        }
        DimensionVector { exponents }
    }

    /// Slot-wise difference; the exponents of a quotient of quantities.
    pub const fn sub(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < N {
            exponents[i] = exponents[i].sub(rhs.exponents[i]);
            i += 1;
        }
        DimensionVector { exponents }
    }

    /// Every exponent multiplied by `factor`; the exponents of a quantity raised to `factor`.
    pub const fn scale(self, factor: Rational) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < N {
            exponents[i] = exponents[i].mul(factor);
            i += 1;
        }
        DimensionVector { exponents }
    }

    /// Every exponent divided by `divisor`; the exponents of the `divisor`-th root of a quantity.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Use [`DimensionVector::checked_descale`] for a fallible form.
    pub const fn descale(self, divisor: Rational) -> Self {
        if divisor.is_zero() {
            panic!("{}", Error::ZeroDenominator.panic_message());
        }
        self.scale(divisor.recip())
    }

    /// Fallible form of [`DimensionVector::descale`].
    pub fn checked_descale(self, divisor: Rational) -> Result<Self> {
        let mut exponents = self.exponents;
        for slot in exponents.iter_mut() {
            *slot = slot.checked_div(divisor)?;
        }
        Ok(DimensionVector { exponents })
    }
}

impl DimensionVector<BASE_DIMENSIONS> {
    /// Unit exponent on `dimension`, zero elsewhere.
    ///
    /// ```rust
    /// use dimensional_core::{BaseDimension, Exponents, Rational};
    /// let length = Exponents::base(BaseDimension::Length);
    /// assert_eq!(length.get(BaseDimension::Length), Rational::ONE);
    /// assert_eq!(length.get(BaseDimension::Time), Rational::ZERO);
    /// ```
    #[inline]
    pub const fn base(dimension: BaseDimension) -> Self {
        Self::ZERO.with(dimension, Rational::ONE)
    }

    /// Copy of `self` with the exponent of `dimension` replaced.
    #[inline]
    pub const fn with(self, dimension: BaseDimension, exponent: Rational) -> Self {
        self.with_exponent(dimension.index(), exponent)
    }

    /// Exponent of `dimension`.
    #[inline]
    pub const fn get(&self, dimension: BaseDimension) -> Rational {
        self.exponents[dimension.index()]
    }
}

impl<const N: usize> Default for DimensionVector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Add for DimensionVector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        DimensionVector::add(self, rhs)
    }
}

impl<const N: usize> Sub for DimensionVector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        DimensionVector::sub(self, rhs)
    }
}

/// Canonical unit symbols joined by `·`, e.g. `kg·m^2·s^-2`; `1` when dimensionless.
///
/// Positive exponents come first, then negative ones, each group in slot order, so angular rates read `rad·s^-1`.
impl fmt::Display for DimensionVector<BASE_DIMENSIONS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positive = BaseDimension::ALL.into_iter().filter(|d| self.get(*d) > Rational::ZERO);
        let negative = BaseDimension::ALL.into_iter().filter(|d| self.get(*d) < Rational::ZERO);
        let mut first = true;
        for dimension in positive.chain(negative) {
            let exponent = self.get(dimension);
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(dimension.symbol())?;
            if exponent != Rational::ONE {
                if exponent.is_integer() {
                    write!(f, "^{}", exponent)?;
                } else {
                    write!(f, "^({})", exponent)?;
                }
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LENGTH: Exponents = Exponents::base(BaseDimension::Length);
    const TIME: Exponents = Exponents::base(BaseDimension::Time);

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_is_dimensionless() {
        assert!(Exponents::ZERO.is_dimensionless());
        assert!(!LENGTH.is_dimensionless());
        assert_eq!(Exponents::default(), Exponents::ZERO);
    }

    #[test]
    fn base_sets_a_single_slot() {
        for dimension in BaseDimension::ALL {
            let v = Exponents::base(dimension);
            for other in BaseDimension::ALL {
                let expected = if other == dimension {
                    Rational::ONE
                } else {
                    Rational::ZERO
                };
                assert_eq!(v.get(other), expected);
            }
        }
    }

    #[test]
    fn slot_order_follows_enum() {
        assert_eq!(BaseDimension::Mass.index(), 0);
        assert_eq!(BaseDimension::Length.index(), 1);
        assert_eq!(BaseDimension::Time.index(), 2);
        assert_eq!(BaseDimension::Angle.index(), 4);
        assert_eq!(BaseDimension::Temperature.index(), 5);
        assert_eq!(BaseDimension::Amount.index(), 7);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub_are_slot_wise() {
        let area = LENGTH + LENGTH;
        assert_eq!(area.get(BaseDimension::Length), Rational::integer(2));
        assert_eq!(area.get(BaseDimension::Time), Rational::ZERO);

        let velocity = LENGTH - TIME;
        assert_eq!(velocity.get(BaseDimension::Length), Rational::ONE);
        assert_eq!(velocity.get(BaseDimension::Time), Rational::integer(-1));

        assert_eq!(velocity + TIME, LENGTH);
    }

    #[test]
    fn scale_and_descale() {
        let acceleration = LENGTH.sub(TIME.scale(Rational::integer(2)));
        assert_eq!(acceleration.get(BaseDimension::Time), Rational::integer(-2));

        let root = acceleration.descale(Rational::integer(2));
        assert_eq!(root.get(BaseDimension::Length), Rational::new(1, 2));
        assert_eq!(root.get(BaseDimension::Time), Rational::integer(-1));
        assert_eq!(root.scale(Rational::integer(2)), acceleration);
    }

    #[test]
    fn checked_descale_by_zero_fails() {
        assert_eq!(
            LENGTH.checked_descale(Rational::ZERO),
            Err(Error::ZeroDenominator)
        );
        assert_eq!(
            LENGTH.checked_descale(Rational::integer(3)),
            Ok(LENGTH.with(BaseDimension::Length, Rational::new(1, 3)))
        );
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn descale_by_zero_panics() {
        let _ = LENGTH.descale(Rational::ZERO);
    }

    #[test]
    fn const_eq_matches_eq() {
        const SAME: bool = LENGTH.add(TIME).const_eq(&TIME.add(LENGTH));
        const DIFFERENT: bool = LENGTH.const_eq(&TIME);
        assert!(SAME);
        assert!(!DIFFERENT);
    }

    #[test]
    fn other_basis_sizes_work_the_same() {
        let a = DimensionVector::<2>::from_exponents([Rational::ONE, Rational::ZERO]);
        let b = DimensionVector::<2>::from_exponents([Rational::ZERO, Rational::new(-1, 2)]);
        let sum = a + b;
        assert_eq!(sum.exponents(), &[Rational::ONE, Rational::new(-1, 2)]);
        assert_eq!(sum.exponent(1), Rational::new(-1, 2));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_uses_canonical_symbols() {
        assert_eq!(Exponents::ZERO.to_string(), "1");
        assert_eq!(LENGTH.to_string(), "m");
        let force = Exponents::base(BaseDimension::Mass)
            .add(LENGTH)
            .sub(TIME.scale(Rational::integer(2)));
        assert_eq!(force.to_string(), "kg·m·s^-2");
        assert_eq!(
            LENGTH.scale(Rational::new(1, 2)).to_string(),
            "m^(1/2)"
        );
    }

    #[test]
    fn display_puts_positive_exponents_first() {
        let angle = Exponents::base(BaseDimension::Angle);
        assert_eq!(angle.sub(TIME).to_string(), "rad·s^-1");
        assert_eq!(
            angle.sub(TIME.scale(Rational::integer(2))).to_string(),
            "rad·s^-2"
        );
        let mixed = Exponents::base(BaseDimension::Mass).sub(TIME).add(angle);
        assert_eq!(mixed.to_string(), "kg·rad·s^-1");
        assert_eq!(Exponents::ZERO.sub(TIME).to_string(), "s^-1");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    fn vector() -> impl Strategy<Value = Exponents> {
        proptest::array::uniform8((-6i64..6, 1i64..4))
            .prop_map(|slots| Exponents::from_exponents(slots.map(|(n, d)| Rational::new(n, d))))
    }

    proptest! {
        #[test]
        fn prop_sub_inverts_add(u in vector(), v in vector()) {
            prop_assert_eq!((u + v) - v, u);
            prop_assert_eq!(u + v, v + u);
        }

        #[test]
        fn prop_descale_inverts_scale(u in vector(), n in 1i64..5, d in 1i64..5) {
            let r = Rational::new(n, d);
            prop_assert_eq!(u.scale(r).descale(r), u);
        }
    }
}
