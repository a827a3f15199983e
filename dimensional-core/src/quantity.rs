//! Quantity type and its implementations.

use crate::dimension::{AssertSameDimension, Dimension, Dimensionless, Power, Product, Quotient, Root};
use crate::dimension_vector::Exponents;
use crate::error::{Error, Result};
use crate::math;
use crate::rational::Rational;
use crate::unit::{InUnit, Unit};
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a dimension.
///
/// `Quantity<D, R>` wraps one value of representation `R` (an `f64` unless stated otherwise) together with the
/// zero-sized dimension tag `D`. The value is always expressed in the canonical unit of `D`.
///
/// * `+`, `-` and comparisons require both operands to have the same exponent vector and keep the left operand's tag.
/// * `*` and `/` between quantities produce [`Product`] and [`Quotient`] tags.
/// * `*` and `/` by a bare scalar or a [`Rational`] keep the tag.
///
/// ```rust
/// use dimensional_core::length::Length;
/// use dimensional_core::time::Time;
/// use dimensional_core::{BaseDimension, Quantity, Rational};
///
/// let d = Quantity::<Length>::new(100.0);
/// let t = Quantity::<Time>::new(20.0);
/// let v = d / t;
/// assert_eq!(v.value(), 5.0);
/// assert_eq!(v.dimension().get(BaseDimension::Time), Rational::integer(-1));
/// ```
///
/// Adding quantities of different dimensions does not compile:
///
/// ```compile_fail
/// use dimensional_core::length::Length;
/// use dimensional_core::time::Time;
/// use dimensional_core::Quantity;
///
/// let d = Quantity::<Length>::new(1.0);
/// let t = Quantity::<Time>::new(1.0);
/// let _ = d + t;
/// ```
pub struct Quantity<D: Dimension, R = f64> {
    value: R,
    dimension: PhantomData<fn() -> D>,
}

impl<D: Dimension, R> Quantity<D, R> {
    /// Creates a quantity from a value already expressed in the canonical unit of `D`.
    ///
    /// ```rust
    /// use dimensional_core::length::Length;
    /// use dimensional_core::Quantity;
    /// let d = Quantity::<Length>::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Quantity {
            value,
            dimension: PhantomData,
        }
    }

    /// Consumes the quantity and returns its canonical value.
    #[inline]
    pub fn into_value(self) -> R {
        self.value
    }

    /// Exponent vector of `D`.
    #[inline]
    pub const fn dimension(&self) -> Exponents {
        D::EXPONENTS
    }

    /// Re-tags the value with a dimension that has the same exponents.
    ///
    /// Useful to name the result of an operation, e.g. turning `Product<Time, Length>` into `Product<Length, Time>`.
    /// Casting to a different dimension fails to compile:
    ///
    /// ```compile_fail
    /// use dimensional_core::length::Length;
    /// use dimensional_core::time::Time;
    /// use dimensional_core::Quantity;
    ///
    /// let d = Quantity::<Length>::new(1.0);
    /// let _ = d.cast::<Time>();
    /// ```
    #[inline]
    pub fn cast<E: Dimension>(self) -> Quantity<E, R> {
        let () = AssertSameDimension::<D, E>::OK;
        Quantity::new(self.value)
    }

    /// Re-tags the value with any dimension, keeping the canonical value unchanged.
    ///
    /// Unlike [`cast`](Self::cast) this performs no dimension check. It is the escape hatch for values whose
    /// dimension is known only by convention, such as a dimensionless number read as a length in metres.
    ///
    /// ```rust
    /// use dimensional_core::length::Length;
    /// use dimensional_core::{Number, Quantity};
    ///
    /// let x: Quantity<Length> = Number::new(3.0).reinterpret();
    /// assert_eq!(x.value(), 3.0);
    /// ```
    #[inline]
    pub fn reinterpret<E: Dimension>(self) -> Quantity<E, R> {
        Quantity::new(self.value)
    }
}

impl<D: Dimension, R: Copy> Quantity<D, R> {
    /// Returns the canonical value.
    #[inline]
    pub fn value(self) -> R {
        self.value
    }
}

impl<D: Dimension, R: PartialOrd> Quantity<D, R> {
    /// The larger of `self` and `other`; `self` when they compare equal or are unordered.
    ///
    /// ```rust
    /// use dimensional_core::length::Length;
    /// use dimensional_core::Quantity;
    /// let a = Quantity::<Length>::new(3.0);
    /// let b = Quantity::<Length>::new(5.0);
    /// assert_eq!(a.max(b).value(), 5.0);
    /// ```
    #[inline]
    pub fn max<E: Dimension>(self, other: Quantity<E, R>) -> Self {
        let () = AssertSameDimension::<D, E>::OK;
        if other.value > self.value {
            Quantity::new(other.value)
        } else {
            self
        }
    }

    /// The smaller of `self` and `other`; `self` when they compare equal or are unordered.
    #[inline]
    pub fn min<E: Dimension>(self, other: Quantity<E, R>) -> Self {
        let () = AssertSameDimension::<D, E>::OK;
        if other.value < self.value {
            Quantity::new(other.value)
        } else {
            self
        }
    }
}

impl<D: Dimension, R> Quantity<D, R>
where
    R: Div<Output = R> + Default + PartialEq,
{
    /// Divides by another quantity, failing with [`Error::DivisionByZero`] instead of panicking.
    ///
    /// ```rust
    /// use dimensional_core::length::Length;
    /// use dimensional_core::{Error, Quantity};
    /// let a = Quantity::<Length>::new(1.0);
    /// let zero = Quantity::<Length>::new(0.0);
    /// assert_eq!(a.checked_div(zero).err(), Some(Error::DivisionByZero));
    /// ```
    pub fn checked_div<E: Dimension>(self, rhs: Quantity<E, R>) -> Result<Quantity<Quotient<D, E>, R>> {
        if rhs.value == R::default() {
            log::debug!(
                "quantity division by zero: {} / {}",
                D::EXPONENTS,
                E::EXPONENTS
            );
            return Err(Error::DivisionByZero);
        }
        Ok(Quantity::new(self.value / rhs.value))
    }
}

/// The larger of two same-dimension quantities; `a` on ties.
#[inline]
pub fn max<D: Dimension, E: Dimension, R: PartialOrd>(a: Quantity<D, R>, b: Quantity<E, R>) -> Quantity<D, R> {
    a.max(b)
}

/// The smaller of two same-dimension quantities; `a` on ties.
#[inline]
pub fn min<D: Dimension, E: Dimension, R: PartialOrd>(a: Quantity<D, R>, b: Quantity<E, R>) -> Quantity<D, R> {
    a.min(b)
}

// ─────────────────────────────────────────────────────────────────────────────
// f64-backed quantities: units, powers and constants
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Quantity<D, f64> {
    /// A quantity holding NaN.
    pub const NAN: Self = Self::new(f64::NAN);

    /// A quantity holding zero.
    pub const ZERO: Self = Self::new(0.0);

    /// Builds a quantity from a value expressed in unit `U`.
    ///
    /// ```rust
    /// use dimensional_core::length::{Inch, Length};
    /// use dimensional_core::Quantity;
    /// let d = Quantity::<Length>::of::<Inch>(2.0);
    /// assert!((d.value() - 0.0508).abs() < 1e-15);
    /// ```
    ///
    /// The unit must belong to `D`:
    ///
    /// ```compile_fail
    /// use dimensional_core::length::Length;
    /// use dimensional_core::time::Second;
    /// use dimensional_core::Quantity;
    /// let _ = Quantity::<Length>::of::<Second>(2.0);
    /// ```
    #[inline]
    pub const fn of<U: Unit>(value: f64) -> Self {
        let () = AssertSameDimension::<D, U::Dim>::OK;
        Self::new(value * U::RATIO)
    }

    /// The value expressed in unit `U`.
    ///
    /// ```rust
    /// use dimensional_core::length::{Centimeter, Length};
    /// use dimensional_core::Quantity;
    /// let d = Quantity::<Length>::new(0.25);
    /// assert!((d.value_in::<Centimeter>() - 25.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn value_in<U: Unit>(self) -> f64 {
        let () = AssertSameDimension::<D, U::Dim>::OK;
        self.value / U::RATIO
    }

    /// Wraps the value for display in unit `U`.
    ///
    /// ```rust
    /// use dimensional_core::length::{Centimeter, Length};
    /// use dimensional_core::Quantity;
    /// let d = Quantity::<Length>::new(0.25);
    /// assert_eq!(format!("{}", d.display_in::<Centimeter>()), "25 cm");
    /// ```
    #[inline]
    pub fn display_in<U: Unit>(self) -> InUnit<U> {
        InUnit::new(self.value_in::<U>())
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(math::abs(self.value))
    }

    /// Raises the quantity to the rational power `NUM/DEN`; the dimension exponents scale accordingly.
    ///
    /// ```rust
    /// use dimensional_core::length::Length;
    /// use dimensional_core::{BaseDimension, Quantity, Rational};
    /// let v = Quantity::<Length>::new(8.0).pow::<2, 3>();
    /// assert!((v.value() - 4.0).abs() < 1e-12);
    /// assert_eq!(v.dimension().get(BaseDimension::Length), Rational::new(2, 3));
    /// ```
    #[inline]
    pub fn pow<const NUM: i64, const DEN: i64>(self) -> Quantity<Power<D, NUM, DEN>, f64> {
        let exponent = Power::<D, NUM, DEN>::FACTOR;
        Quantity::new(math::powf(self.value, exponent.to_f64()))
    }

    /// Square root; halves every exponent.
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<D, 2>, f64> {
        Quantity::new(math::sqrt(self.value))
    }

    /// `self * self`.
    #[inline]
    pub fn squared(self) -> Quantity<Product<D, D>, f64> {
        self * self
    }

    /// `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    #[inline]
    pub fn recip(self) -> Quantity<Quotient<Dimensionless, D>, f64> {
        1.0 / self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, R: Clone> Clone for Quantity<D, R> {
    #[inline]
    fn clone(&self) -> Self {
        Quantity::new(self.value.clone())
    }
}

impl<D: Dimension, R: Copy> Copy for Quantity<D, R> {}

impl<D: Dimension, R: Default> Default for Quantity<D, R> {
    #[inline]
    fn default() -> Self {
        Quantity::new(R::default())
    }
}

impl<D: Dimension, R: fmt::Debug> fmt::Debug for Quantity<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &format_args!("{}", D::EXPONENTS))
            .finish()
    }
}

/// Formats as `<value> <canonical units>`, or just the value when dimensionless.
///
/// ```rust
/// use dimensional_core::velocity::Acceleration;
/// use dimensional_core::Quantity;
/// assert_eq!(Quantity::<Acceleration>::new(9.5).to_string(), "9.5 m·s^-2");
/// ```
impl<D: Dimension, R: fmt::Display> fmt::Display for Quantity<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if D::EXPONENTS.is_dimensionless() {
            Ok(())
        } else {
            write!(f, " {}", D::EXPONENTS)
        }
    }
}

impl<D: Dimension, E: Dimension, R: PartialEq> PartialEq<Quantity<E, R>> for Quantity<D, R> {
    #[inline]
    fn eq(&self, other: &Quantity<E, R>) -> bool {
        let () = AssertSameDimension::<D, E>::OK;
        self.value == other.value
    }
}

impl<D: Dimension, E: Dimension, R: PartialOrd> PartialOrd<Quantity<E, R>> for Quantity<D, R> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<E, R>) -> Option<Ordering> {
        let () = AssertSameDimension::<D, E>::OK;
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension, R: Add<Output = R> + Default> Sum for Quantity<D, R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Quantity::default(), |acc, q| Quantity::new(acc.value + q.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊕ quantity
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, E: Dimension, R: Add<Output = R>> Add<Quantity<E, R>> for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<E, R>) -> Self {
        let () = AssertSameDimension::<D, E>::OK;
        Quantity::new(self.value + rhs.value)
    }
}

impl<D: Dimension, E: Dimension, R: AddAssign> AddAssign<Quantity<E, R>> for Quantity<D, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<E, R>) {
        let () = AssertSameDimension::<D, E>::OK;
        self.value += rhs.value;
    }
}

impl<D: Dimension, E: Dimension, R: Sub<Output = R>> Sub<Quantity<E, R>> for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<E, R>) -> Self {
        let () = AssertSameDimension::<D, E>::OK;
        Quantity::new(self.value - rhs.value)
    }
}

impl<D: Dimension, E: Dimension, R: SubAssign> SubAssign<Quantity<E, R>> for Quantity<D, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<E, R>) {
        let () = AssertSameDimension::<D, E>::OK;
        self.value -= rhs.value;
    }
}

impl<D: Dimension, E: Dimension, R: Mul<Output = R>> Mul<Quantity<E, R>> for Quantity<D, R> {
    type Output = Quantity<Product<D, E>, R>;
    #[inline]
    fn mul(self, rhs: Quantity<E, R>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<D: Dimension, E: Dimension, R> Div<Quantity<E, R>> for Quantity<D, R>
where
    R: Div<Output = R> + Default + PartialEq,
{
    type Output = Quantity<Quotient<D, E>, R>;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; see [`Quantity::checked_div`].
    #[inline]
    fn div(self, rhs: Quantity<E, R>) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err.panic_message()),
        }
    }
}

impl<D: Dimension, R: Neg<Output = R>> Neg for Quantity<D, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quantity::new(-self.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊗ scalar (dimension unchanged)
// ─────────────────────────────────────────────────────────────────────────────

// Scalar and `Rational` operators exist for the `f64` and `f32` representations only. Integer-backed quantities
// still get `+`, `-`, `*`, `/` between quantities and comparisons, but not scaling by a bare scalar.

macro_rules! impl_scalar_ops {
    ($($scalar:ty => $from_rational:ident),+ $(,)?) => {
        $(
            impl<D: Dimension> Mul<$scalar> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Quantity::new(self.value * rhs)
                }
            }

            impl<D: Dimension> Mul<Quantity<D, $scalar>> for $scalar {
                type Output = Quantity<D, $scalar>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension> MulAssign<$scalar> for Quantity<D, $scalar> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    self.value *= rhs;
                }
            }

            /// # Panics
            ///
            /// Panics if `rhs` is zero.
            impl<D: Dimension> Div<$scalar> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    if rhs == 0.0 {
                        panic!("{}", Error::DivisionByZero.panic_message());
                    }
                    Quantity::new(self.value / rhs)
                }
            }

            impl<D: Dimension> DivAssign<$scalar> for Quantity<D, $scalar> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = *self / rhs;
                }
            }

            /// A bare scalar divided by a quantity has the inverse dimension.
            impl<D: Dimension> Div<Quantity<D, $scalar>> for $scalar {
                type Output = Quantity<Quotient<Dimensionless, D>, $scalar>;
                #[inline]
                fn div(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                    Quantity::<Dimensionless, $scalar>::new(self) / rhs
                }
            }

            impl<D: Dimension> Mul<Rational> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: Rational) -> Self {
                    Quantity::new(self.value * rhs.$from_rational())
                }
            }

            impl<D: Dimension> Mul<Quantity<D, $scalar>> for Rational {
                type Output = Quantity<D, $scalar>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            /// # Panics
            ///
            /// Panics if `rhs` is zero.
            impl<D: Dimension> Div<Rational> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: Rational) -> Self {
                    if rhs.is_zero() {
                        panic!("{}", Error::DivisionByZero.panic_message());
                    }
                    Quantity::new(self.value / rhs.$from_rational())
                }
            }
        )+
    };
}

impl_scalar_ops!(f64 => to_f64, f32 => to_f32);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, R: Serialize> Serialize for Quantity<D, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, R: Deserialize<'de>> Deserialize<'de> for Quantity<D, R> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = R::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their dimension.
///
/// Use this with `#[serde(with = "...")]` to keep the exponent vector in serialized data. On deserialization the
/// `dimension` field is optional, but when present it must match the field's type.
///
/// ```rust
/// use dimensional_core::length::Length;
/// use dimensional_core::Quantity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimensional_core::serde_with_dimension")]
///     max_distance: Quantity<Length>, // {"value": 100.0, "dimension": "m"}
///
///     min_distance: Quantity<Length>, // 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dimension {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use std::string::{String, ToString};

    /// Serializes a `Quantity<D>` as a struct with `value` and `dimension` fields.
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("dimension", &D::EXPONENTS.to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `dimension` fields.
    pub fn deserialize<'de, D, De>(deserializer: De) -> core::result::Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dimension,
        }

        struct QuantityVisitor<D>(PhantomData<fn() -> D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and dimension fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut dimension: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = dimension {
                    let expected = D::EXPONENTS.to_string();
                    if found != expected {
                        return Err(de::Error::custom(format_args!(
                            "dimension mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
