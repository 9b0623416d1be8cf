//! The sign of a big integer.

use std::ops::{Mul, Neg};

/// Sign of a [`BigInteger`](crate::BigInteger).
///
/// Zero is always `Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Zero or greater.
    #[default]
    Positive,
    /// Strictly less than zero.
    Negative,
}

impl Sign {
    /// Returns `1` or `-1`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// Returns true for `Negative`.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
