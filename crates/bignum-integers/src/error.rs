//! Errors raised by big integer construction, conversion and division.

use thiserror::Error;

/// Why a string could not be read as a decimal integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Nothing but whitespace, or a sign with no digits after it.
    #[error("cannot parse empty string")]
    Empty,

    /// A character other than a decimal digit where a digit was expected.
    #[error("cannot parse string as number: unexpected {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset into the trimmed input.
        position: usize,
    },
}

/// Errors that can occur when working with [`BigInteger`](crate::BigInteger).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// Malformed decimal input.
    #[error(transparent)]
    Parse(#[from] ParseErrorKind),

    /// A negative value was converted to an unsigned type.
    #[error("Casting negative value to unsigned ({target})")]
    Sign {
        /// Name of the unsigned target type.
        target: &'static str,
    },

    /// The value does not fit in the target type.
    #[error("BigInteger '{value}' cannot be represented as type: {target}")]
    Overflow {
        /// Decimal rendering of the value that did not fit.
        value: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// Division or remainder with a zero divisor.
    #[error("attempt to divide by zero")]
    DivisionByZero,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BigIntError>;
