//! Angular quantities and utilities.
//!
//! This module defines the **`Angular` dimension**, common angle units, a set of convenience methods on [`Angle`], and
//! the derived conversions that involve angles:
//!
//! * [`AngleRange`]: an angle kept in `(-π, π]` after every operation.
//! * [`CompassAngle`]: a heading measured clockwise from north, convertible to a standard angle (counter-clockwise
//!   from east).
//! * [`to_angular`] / [`to_linear`]: arc length to angle and back through a radius.
//!
//! # Design overview
//!
//! * **Canonical unit:** the radian. `Radian::RATIO == 1.0` and every other angle unit states how many radians one
//!   of it is, e.g. `Degree::RATIO == π / 180`.
//! * **Wrapping helpers:** wrap into `[0, 2π)` or `(-π, π]` with a single Euclidean remainder; no loops.
//!
//! ## Edge cases
//!
//! Wrapping and trig operations follow IEEE-754 semantics from `f64`: if the underlying numeric is `NaN` or `±∞`,
//! results will be `NaN`.
//!
//! ## Examples
//!
//! ```rust
//! use dimensional_core::angular::{Angle, AngleRange, Degree};
//!
//! let a = AngleRange::new(Angle::from_degrees(350.0));
//! assert!((a.angle().value_in::<Degree>() + 10.0).abs() < 1e-9);
//!
//! let b = a + Angle::from_degrees(20.0);
//! assert!((b.angle().to_degrees() - 10.0).abs() < 1e-9);
//! ```

use crate::dimension::AssertSameDimension;
use crate::length::Length;
use crate::math;
use crate::{Dimension, Quantity};
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use dimensional_derive::{Dimension, Unit};

/// Dimension tag for plane angles.
#[derive(Dimension)]
#[dimension(angle = 1)]
pub enum Angular {}

/// An angle in radians.
pub type Angle = Quantity<Angular>;

/// Radian (canonical unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Angular, ratio = 1.0)]
pub struct Radian;

/// Degree (`π / 180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°", dimension = Angular, ratio = PI / 180.0)]
pub struct Degree;

/// Arcminute (`1/60 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "′", dimension = Angular, ratio = PI / 10_800.0)]
pub struct Arcminute;

/// Arcsecond (`1/3600 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "″", dimension = Angular, ratio = PI / 648_000.0)]
pub struct Arcsecond;

/// Gradian (`1/400` of a turn).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gon", dimension = Angular, ratio = TAU / 400.0)]
pub struct Gradian;

/// Turn (one full revolution, `2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tr", dimension = Angular, ratio = TAU)]
pub struct Turn;

impl Quantity<Angular> {
    /// One full revolution (`2π rad`).
    pub const FULL_TURN: Angle = Angle::new(TAU);
    /// Half a revolution (`π rad`).
    pub const HALF_TURN: Angle = Angle::new(PI);
    /// A quarter revolution (`π/2 rad`).
    pub const QUARTER_TURN: Angle = Angle::new(FRAC_PI_2);

    /// Angle from a value in degrees.
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self::of::<Degree>(degrees)
    }

    /// The angle in degrees.
    #[inline]
    pub const fn to_degrees(self) -> f64 {
        self.value_in::<Degree>()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        math::sin(self.value())
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        math::cos(self.value())
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        math::tan(self.value())
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        (self.sin(), self.cos())
    }

    /// Wrap into the positive range `[0, 2π)` using Euclidean remainder.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(math::rem_euclid(self.value(), TAU))
    }

    /// Wrap into the signed range `(-π, π]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive. Values already inside the range are returned unchanged,
    /// so wrapping is idempotent.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let x = self.value();
        if x > -PI && x <= PI {
            return self;
        }
        if !x.is_finite() {
            log::trace!("wrapping non-finite angle {x} rad");
        }
        let y = math::rem_euclid(x + PI, TAU) - PI;
        Self::new(if y <= -PI { y + TAU } else { y })
    }

    /// Signed smallest angular separation `self - other`, in `(-π, π]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Absolute smallest angular separation.
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Angle <-> arc length
// ─────────────────────────────────────────────────────────────────────────────

/// Angle subtended by an arc of length `arc` on a circle of radius `radius`.
///
/// Both arguments must be lengths; any tag with the exponents of [`Length`] is accepted.
///
/// # Panics
///
/// Panics if `radius` is zero, like quantity division.
///
/// ```rust
/// use dimensional_core::angular::to_angular;
/// use dimensional_core::length::{Centimeter, Length};
/// use dimensional_core::Quantity;
///
/// let two_cm = Quantity::<Length>::of::<Centimeter>(2.0);
/// assert_eq!(to_angular(two_cm, two_cm).value(), 1.0);
/// ```
#[inline]
pub fn to_angular<L: Dimension, R: Dimension>(arc: Quantity<L>, radius: Quantity<R>) -> Angle {
    let () = AssertSameDimension::<L, Length>::OK;
    let () = AssertSameDimension::<R, Length>::OK;
    Angle::new((arc / radius).value())
}

/// Arc length covered by `angle` on a circle of radius `radius`.
///
/// ```rust
/// use dimensional_core::angular::{to_linear, Angle};
/// use dimensional_core::length::{Centimeter, Length};
/// use dimensional_core::Quantity;
///
/// let arc = to_linear(Angle::HALF_TURN, Quantity::<Length>::of::<Centimeter>(1.0));
/// assert!((arc.value_in::<Centimeter>() - core::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn to_linear<R: Dimension>(angle: Angle, radius: Quantity<R>) -> Quantity<Length> {
    let () = AssertSameDimension::<R, Length>::OK;
    Quantity::new(angle.value() * radius.value())
}

// ─────────────────────────────────────────────────────────────────────────────
// AngleRange
// ─────────────────────────────────────────────────────────────────────────────

/// An angle normalized into `(-π, π]`, re-normalized after every operation.
///
/// ```rust
/// use dimensional_core::angular::{Angle, AngleRange};
///
/// let r = AngleRange::new(Angle::from_degrees(190.0));
/// assert!((r.angle().to_degrees() + 170.0).abs() < 1e-9);
///
/// let sum: Angle = (Angle::from_degrees(2.0) + r).into();
/// assert!((sum.to_degrees() + 168.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct AngleRange(Angle);

impl AngleRange {
    /// Normalizes `angle` into `(-π, π]`.
    #[inline]
    pub fn new(angle: Angle) -> Self {
        AngleRange(angle.wrap_signed())
    }

    /// The normalized angle.
    #[inline]
    pub const fn angle(self) -> Angle {
        self.0
    }

    /// The normalized angle in radians.
    #[inline]
    pub fn value(self) -> f64 {
        self.0.value()
    }
}

impl From<Angle> for AngleRange {
    #[inline]
    fn from(angle: Angle) -> Self {
        AngleRange::new(angle)
    }
}

impl From<AngleRange> for Angle {
    #[inline]
    fn from(range: AngleRange) -> Self {
        range.0
    }
}

impl Add<Angle> for AngleRange {
    type Output = AngleRange;
    #[inline]
    fn add(self, rhs: Angle) -> AngleRange {
        AngleRange::new(self.0 + rhs)
    }
}

impl Sub<Angle> for AngleRange {
    type Output = AngleRange;
    #[inline]
    fn sub(self, rhs: Angle) -> AngleRange {
        AngleRange::new(self.0 - rhs)
    }
}

impl Add<AngleRange> for Angle {
    type Output = AngleRange;
    #[inline]
    fn add(self, rhs: AngleRange) -> AngleRange {
        AngleRange::new(self + rhs.0)
    }
}

impl Sub<AngleRange> for Angle {
    type Output = AngleRange;
    #[inline]
    fn sub(self, rhs: AngleRange) -> AngleRange {
        AngleRange::new(self - rhs.0)
    }
}

impl Add for AngleRange {
    type Output = AngleRange;
    #[inline]
    fn add(self, rhs: AngleRange) -> AngleRange {
        AngleRange::new(self.0 + rhs.0)
    }
}

impl Sub for AngleRange {
    type Output = AngleRange;
    #[inline]
    fn sub(self, rhs: AngleRange) -> AngleRange {
        AngleRange::new(self.0 - rhs.0)
    }
}

impl AddAssign<Angle> for AngleRange {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl SubAssign<Angle> for AngleRange {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Neg for AngleRange {
    type Output = AngleRange;
    #[inline]
    fn neg(self) -> AngleRange {
        AngleRange::new(-self.0)
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CompassAngle
// ─────────────────────────────────────────────────────────────────────────────

/// A heading measured clockwise from north.
///
/// Standard angles are measured counter-clockwise from east; the two are related by `standard = 90° - heading`.
///
/// ```rust
/// use dimensional_core::angular::{Angle, CompassAngle};
///
/// let east = CompassAngle::from_degrees(90.0);
/// assert_eq!(east.to_standard().value(), 0.0);
///
/// let standard: Angle = CompassAngle::from_degrees(15.0).into();
/// assert!((standard.to_degrees() - 75.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct CompassAngle(Angle);

impl CompassAngle {
    /// Heading from an angle measured clockwise from north.
    #[inline]
    pub const fn new(heading: Angle) -> Self {
        CompassAngle(heading)
    }

    /// Heading from a value in degrees.
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        CompassAngle(Angle::from_degrees(degrees))
    }

    /// Heading of a standard angle.
    #[inline]
    pub fn from_standard(angle: Angle) -> Self {
        CompassAngle(Angle::QUARTER_TURN - angle)
    }

    /// The heading, clockwise from north.
    #[inline]
    pub const fn heading(self) -> Angle {
        self.0
    }

    /// The equivalent standard angle, counter-clockwise from east.
    #[inline]
    pub fn to_standard(self) -> Angle {
        Angle::QUARTER_TURN - self.0
    }
}

impl From<CompassAngle> for Angle {
    #[inline]
    fn from(heading: CompassAngle) -> Self {
        heading.to_standard()
    }
}

impl From<CompassAngle> for AngleRange {
    #[inline]
    fn from(heading: CompassAngle) -> Self {
        AngleRange::new(heading.to_standard())
    }
}

impl Neg for CompassAngle {
    type Output = CompassAngle;
    #[inline]
    fn neg(self) -> CompassAngle {
        CompassAngle(-self.0)
    }
}

impl fmt::Display for CompassAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.to_degrees(), f)?;
        f.write_str("° heading")
    }
}
