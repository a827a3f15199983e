//! Dimension tags and their exponent vectors.
//!
//! A *dimension* is a zero-sized tag type whose [`Dimension::EXPONENTS`] constant says what it is made of. Composite
//! tags ([`Product`], [`Quotient`], [`Power`], [`Root`]) compute their exponents from their parts during constant
//! evaluation, so `Quantity<Length> * Quantity<Length>` is a `Quantity<Product<Length, Length>>` whose exponent vector
//! is `m^2` without any runtime table.
//!
//! Two tags with the same exponents describe the same physical dimension even when they are different types (for
//! example `Product<Length, Time>` and `Product<Time, Length>`). Operations that need equal dimensions compare the
//! vectors while the program is compiled; a mismatch aborts compilation with `dimension mismatch`.

use crate::dimension_vector::Exponents;
use crate::rational::Rational;
use core::marker::PhantomData;

/// Trait implemented by every **dimension** tag.
///
/// Base and named dimensions are usually empty enums declared with the `Dimension` derive:
///
/// ```rust,ignore
/// #[derive(Dimension)]
/// #[dimension(length = 1, time = -2)]
/// pub enum Acceleration {}
/// ```
///
/// or by hand:
///
/// ```rust
/// use dimensional_core::{BaseDimension, Dimension, Exponents};
///
/// pub enum Length {}
/// impl Dimension for Length {
///     const EXPONENTS: Exponents = Exponents::base(BaseDimension::Length);
/// }
/// assert!(!Length::EXPONENTS.is_dimensionless());
/// ```
pub trait Dimension: 'static {
    /// Exponent of every base dimension.
    const EXPONENTS: Exponents;
}

/// Dimension of pure numbers (all exponents zero).
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const EXPONENTS: Exponents = Exponents::ZERO;
}

/// Dimension of `A · B`.
pub struct Product<A: Dimension, B: Dimension>(PhantomData<fn() -> (A, B)>);
impl<A: Dimension, B: Dimension> Dimension for Product<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.add(B::EXPONENTS);
}

/// Dimension of `A / B`.
pub struct Quotient<A: Dimension, B: Dimension>(PhantomData<fn() -> (A, B)>);
impl<A: Dimension, B: Dimension> Dimension for Quotient<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.sub(B::EXPONENTS);
}

/// Dimension of `A^(NUM/DEN)`.
///
/// `DEN == 0` is rejected during compilation:
///
/// ```compile_fail
/// use dimensional_core::{Dimension, Dimensionless, Power};
/// let exponents = <Power<Dimensionless, 1, 0> as Dimension>::EXPONENTS;
/// assert!(exponents.is_dimensionless());
/// ```
pub struct Power<A: Dimension, const NUM: i64, const DEN: i64 = 1>(PhantomData<fn() -> A>);

impl<A: Dimension, const NUM: i64, const DEN: i64> Power<A, NUM, DEN> {
    /// The exponent `NUM/DEN`, reduced.
    pub const FACTOR: Rational = Rational::new(NUM, DEN);
}

impl<A: Dimension, const NUM: i64, const DEN: i64> Dimension for Power<A, NUM, DEN> {
    const EXPONENTS: Exponents = A::EXPONENTS.scale(Self::FACTOR);
}

/// Dimension of the `N`-th root of `A`.
pub struct Root<A: Dimension, const N: i64>(PhantomData<fn() -> A>);

impl<A: Dimension, const N: i64> Root<A, N> {
    /// The root index as a rational.
    pub const INDEX: Rational = Rational::integer(N);
}

impl<A: Dimension, const N: i64> Dimension for Root<A, N> {
    const EXPONENTS: Exponents = A::EXPONENTS.descale(Self::INDEX);
}

/// `true` when `A` and `B` have identical exponent vectors.
///
/// ```rust
/// use dimensional_core::{same_dimension, Dimensionless, Quotient};
/// assert!(same_dimension::<Quotient<Dimensionless, Dimensionless>, Dimensionless>());
/// ```
#[inline]
pub const fn same_dimension<A: Dimension, B: Dimension>() -> bool {
    A::EXPONENTS.const_eq(&B::EXPONENTS)
}

/// Compile-time proof that `A` and `B` are the same dimension.
///
/// Referencing [`AssertSameDimension::OK`] from a function body forces the comparison during monomorphization.
pub(crate) struct AssertSameDimension<A: Dimension, B: Dimension>(PhantomData<fn() -> (A, B)>);

impl<A: Dimension, B: Dimension> AssertSameDimension<A, B> {
    pub(crate) const OK: () = assert!(same_dimension::<A, B>(), "dimension mismatch");
}

/// Compile-time proof that `A` is dimensionless.
pub(crate) struct AssertDimensionless<A: Dimension>(PhantomData<fn() -> A>);

impl<A: Dimension> AssertDimensionless<A> {
    pub(crate) const OK: () = assert!(
        A::EXPONENTS.is_dimensionless(),
        "dimension mismatch: expected a dimensionless quantity"
    );
}
