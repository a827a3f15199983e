//! Float intrinsics that route to `libm` when `std` is disabled.

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::fabs(x)
    }
}

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::sqrt(x)
    }
}

#[inline]
pub(crate) fn powf(x: f64, exponent: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powf(exponent)
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::pow(x, exponent)
    }
}

#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = crate::libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::sin(x)
    }
}

#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::cos(x)
    }
}

#[inline]
pub(crate) fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.tan()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::tan(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rem_euclid_is_non_negative() {
        assert_abs_diff_eq!(rem_euclid(-1.0, 360.0), 359.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rem_euclid(725.0, 360.0), 5.0, epsilon = 1e-12);
        assert_eq!(rem_euclid(0.0, 360.0), 0.0);
    }

    #[test]
    fn intrinsics() {
        assert_eq!(abs(-2.5), 2.5);
        assert_abs_diff_eq!(sqrt(9.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(powf(8.0, 1.0 / 3.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sin(core::f64::consts::FRAC_PI_2), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cos(0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tan(core::f64::consts::FRAC_PI_4), 1.0, epsilon = 1e-12);
    }
}
