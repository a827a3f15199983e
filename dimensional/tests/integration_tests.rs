//! Integration-level tests for the `dimensional` facade crate.

use dimensional::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Exponent algebra
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rational_reduces_on_construction() {
    assert_eq!(Rational::new(4, 8), Rational::new(1, 2));
    assert_eq!(Rational::new(4, 8).numerator(), 1);
    assert_eq!(Rational::new(4, 8).denominator(), 2);
    assert_eq!(Rational::new(3, -6), Rational::new(-1, 2));
}

#[test]
fn rational_errors() {
    assert_eq!(Rational::try_new(1, 0), Err(Error::ZeroDenominator));
    assert_eq!(Rational::ONE.checked_div(Rational::ZERO), Err(Error::ZeroDenominator));
    assert_eq!(
        Rational::integer(i64::MAX).checked_add(Rational::ONE),
        Err(Error::Overflow)
    );
}

#[test]
fn dimension_vectors_add_under_multiplication() {
    let area = Quantity::<Length>::new(2.0) * Quantity::<Length>::new(3.0);
    assert_eq!(area.dimension(), Exponents::ZERO.with(BaseDimension::Length, Rational::integer(2)));
    assert_ne!(area.dimension(), Length::EXPONENTS);

    let rate = Quantity::<Length>::new(1.0) / Quantity::<Time>::new(1.0);
    assert_eq!(rate.dimension(), Length::EXPONENTS - Time::EXPONENTS);
    assert_eq!(rate.dimension(), Velocity::EXPONENTS);
}

#[test]
fn rational_exponents_through_roots() {
    let side = Quantity::<Area>::new(16.0).sqrt();
    assert_eq!(side.dimension(), Length::EXPONENTS);
    assert_abs_diff_eq!(side.value(), 4.0, epsilon = 1e-12);

    let odd = Quantity::<Length>::new(4.0).pow::<1, 2>();
    assert_eq!(odd.dimension().get(BaseDimension::Length), Rational::new(1, 2));
    assert_eq!(odd.dimension().to_string(), "m^(1/2)");
}

#[test]
fn mismatched_basis_sizes_are_distinct_types() {
    let small = DimensionVector::<5>::ZERO.with_exponent(0, Rational::ONE);
    let large = DimensionVector::<8>::ZERO.with_exponent(0, Rational::ONE);
    assert_eq!(small.exponent(0), large.exponent(0));
    assert_eq!(small.exponents().len(), 5);
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension closure
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn same_dimension_arithmetic() {
    let a = Quantity::<Length>::of::<Inch>(2.0);
    let b = Quantity::<Length>::of::<Centimeter>(2.0);
    let sum = a + b;
    assert_relative_eq!(sum.value_in::<Millimeter>(), 70.8, max_relative = 1e-12);
    assert!(a > b);
    assert_eq!(max(a, b), a);
    assert_eq!(min(a, b), b);
}

#[test]
fn reordered_composites_interoperate() {
    let lt = Quantity::<Length>::new(2.0) * Quantity::<Time>::new(3.0);
    let tl = Quantity::<Time>::new(3.0) * Quantity::<Length>::new(2.0);
    assert_eq!(lt, tl);
    assert_eq!((lt - tl).value(), 0.0);
}

#[test]
fn angle_comparison_with_explicit_tag() {
    assert!(Angle::new(5.1) >= Quantity::<Angular>::new(5.0));
}

#[test]
fn angular_acceleration_accumulates() {
    let mut orientation = Quantity::<AngularAcceleration>::new(1.0);
    orientation += Quantity::<AngularAcceleration>::of::<RevolutionPerMinuteSquared>(2.0);
    let mut other = Quantity::<AngularAcceleration>::of::<RevolutionPerMinuteSquared>(2.0);
    other -= orientation;
    assert_relative_eq!(other.value(), -1.0, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_angular_and_back() {
    let x = Quantity::<Length>::of::<Centimeter>(2.0);
    let y = to_angular(x, Quantity::<Length>::of::<Centimeter>(2.0));
    assert_eq!(y, Angle::new(1.0));
    let z = to_linear(y, Quantity::<Length>::of::<Centimeter>(2.0));
    assert_abs_diff_eq!(z.value_in::<Centimeter>(), 2.0, epsilon = 1e-12);
}

#[test]
fn number_reinterpreted_as_length() {
    let num = Number::new(0.0);
    let x: Quantity<Length> = num.reinterpret();
    assert_eq!(to_angular(x, Quantity::<Length>::of::<Centimeter>(2.0)).value(), 0.0);
}

#[test]
fn compass_headings() {
    assert_abs_diff_eq!(Angle::from(CompassAngle::from_degrees(15.0)).to_degrees(), 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!((-CompassAngle::from_degrees(15.0)).to_standard().to_degrees(), 105.0, epsilon = 1e-9);
    assert_eq!(
        CompassAngle::from_degrees(30.0).to_standard().to_degrees().round(),
        Angle::from_degrees(60.0).to_degrees().round()
    );
}

#[test]
fn angle_range_mixed_arithmetic() {
    let a: Angle = (Angle::from_degrees(2.0) + AngleRange::new(Angle::from_degrees(15.0))).into();
    let b: Angle = (AngleRange::new(Angle::from_degrees(15.0)) + Angle::from_degrees(2.0)).into();
    let c: Angle = (Angle::from_degrees(2.0) + AngleRange::from(CompassAngle::from_degrees(15.0))).into();
    assert_abs_diff_eq!(a.to_degrees(), 17.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.to_degrees(), 17.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.to_degrees(), 77.0, epsilon = 1e-9);
}

#[test]
fn temperatures_compare() {
    let hot = Quantity::<Temperature>::from_celsius(10.0);
    let cold = Quantity::<Temperature>::of::<Kelvin>(1.0);
    assert_eq!(max(hot, cold), hot);
}

// ─────────────────────────────────────────────────────────────────────────────
// Number interop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn number_operator_identities() {
    assert!(Number::new(1.0) + 2.0 == 3.0);
    assert!(1.0 + Number::new(2.0) <= 3.0);
    assert!(1.0 / Number::new(2.0) >= 0.0);
}

#[test]
fn number_assignment_sequence_ends_at_zero() {
    let mut n = Number::new(1.0);
    n += 2.0;
    n.decrement();
    n -= 3.0;
    n *= 2.0;
    n /= 2.0;
    n.increment();
    assert_eq!(n, 0.0);
}

#[test]
fn f64_assignment_sequence_ends_at_one() {
    let mut d = 1.0_f64;
    d += Number::new(2.0);
    d -= Number::new(2.0);
    d *= Number::new(2.0);
    d /= Number::new(2.0);
    assert_eq!(d, 1.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors and formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn checked_division() {
    let d = Quantity::<Length>::new(1.0);
    assert_eq!(d.checked_div(Quantity::<Time>::ZERO).err(), Some(Error::DivisionByZero));
    let v = d.checked_div(Quantity::<Time>::new(4.0)).unwrap();
    assert_eq!(v.value(), 0.25);
}

#[test]
fn display_formats() {
    assert_eq!(Quantity::<Acceleration>::new(9.5).to_string(), "9.5 m·s^-2");
    assert_eq!(Quantity::<Length>::new(1.5).display_in::<Centimeter>().to_string(), "150 cm");
    assert_eq!(Rational::new(-6, 4).to_string(), "-3/2");
    assert_eq!(Error::DivisionByZero.to_string(), "division of a quantity by zero");
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_angular_linear_roundtrip(l in -1e3..1e3f64, r in 1e-2..1e3f64) {
        let length = Quantity::<Length>::new(l);
        let radius = Quantity::<Length>::new(r);
        let back = to_linear(to_angular(length, radius), radius);
        prop_assert!((back.value() - l).abs() <= 1e-9 * l.abs().max(1.0));
    }

    #[test]
    fn prop_angle_range_periodic(deg in -720.0..720.0f64) {
        let a = AngleRange::new(Angle::from_degrees(deg));
        let b = AngleRange::new(Angle::from_degrees(deg + 360.0));
        prop_assert!(a.angle().abs_separation(b.angle()).value() < 1e-9);
        prop_assert_eq!(AngleRange::new(a.angle()), a);
    }

    #[test]
    fn prop_rational_normalized(n in -1_000i64..1_000, d in 1i64..1_000) {
        let r = Rational::new(n, d);
        prop_assert!(r.denominator() > 0);
        prop_assert_eq!(Rational::new(n * 3, d * 3), r);
    }
}
