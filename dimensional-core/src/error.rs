//! Error type for the checked arithmetic paths.
//!
//! Dimension mismatches never reach this type: they are rejected while the program is compiled. What remains are the
//! value-level failures of exact rational arithmetic and quantity division.

/// Result type for checked operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Value-level failures of rational and quantity arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rational was built (or divided) with a zero denominator.
    #[error("rational with zero denominator")]
    ZeroDenominator,

    /// A quantity was divided by a zero-valued quantity or scalar.
    #[error("division of a quantity by zero")]
    DivisionByZero,

    /// An intermediate product or sum left the range of `i64`.
    #[error("integer overflow in rational arithmetic")]
    Overflow,
}

impl Error {
    /// Message used when the panicking operator forms hit this error.
    pub(crate) const fn panic_message(self) -> &'static str {
        match self {
            Error::ZeroDenominator => "attempt to build a rational with a zero denominator",
            Error::DivisionByZero => "attempt to divide a quantity by zero",
            Error::Overflow => "attempt to compute a rational that overflows i64",
        }
    }
}
