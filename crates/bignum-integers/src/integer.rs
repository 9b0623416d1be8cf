//! Arbitrary precision integers.
//!
//! This module provides [`BigInteger`], a signed decimal digit vector with
//! construction from strings, comparison and formatting. Arithmetic lives in
//! [`crate::ops`] and native conversions in [`crate::convert`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{BigIntError, ParseErrorKind, Result};
use crate::magnitude;
use crate::sign::Sign;

/// An arbitrary precision signed integer.
///
/// Digits are stored least significant first with no most-significant zero
/// digits. Zero is the empty digit vector with a positive sign, so derived
/// equality and hashing agree with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    pub(crate) sign: Sign,
    pub(crate) digits: Vec<u8>,
}

impl BigInteger {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_native(value)
    }

    /// Builds a value from a sign and least-significant-first digits,
    /// stripping zero digits and pinning the sign of zero.
    pub(crate) fn normalize(sign: Sign, mut digits: Vec<u8>) -> Self {
        magnitude::trim(&mut digits);
        let sign = if digits.is_empty() { Sign::Positive } else { sign };
        Self { sign, digits }
    }

    /// Builds a value from ASCII digits written most significant first.
    pub(crate) fn from_ascii_digits(sign: Sign, ascii: &[u8]) -> Self {
        Self::normalize(sign, ascii.iter().rev().map(|b| b - b'0').collect())
    }

    /// Parses a decimal integer.
    ///
    /// Surrounding whitespace is ignored. An optional leading `-` may precede
    /// the digits; leading zeros are accepted and `-0` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Parse`] if nothing but whitespace (or a lone
    /// sign) is given, or if any other character is not a decimal digit.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, trimmed),
        };

        if body.is_empty() {
            log::debug!("rejected {input:?}: no digits");
            return Err(ParseErrorKind::Empty.into());
        }

        if let Some((offset, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            log::debug!("rejected {input:?}: {found:?} is not a decimal digit");
            return Err(ParseErrorKind::InvalidDigit {
                found,
                position: offset + trimmed.len() - body.len(),
            }
            .into());
        }

        Ok(Self::from_ascii_digits(sign, body.as_bytes()))
    }

    /// Returns the sign. Zero is positive.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.digits.is_empty() {
            0
        } else {
            self.sign.as_i8()
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Number of decimal digits in the magnitude; zero has none.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            digits: self.digits.clone(),
        }
    }

    /// Sign-aware `>` from which every other relation is derived.
    fn is_greater(&self, other: &Self) -> bool {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => true,
            (Sign::Negative, Sign::Positive) => false,
            (shared, _) => {
                let ordering = magnitude::cmp(&self.digits, &other.digits);
                match shared {
                    Sign::Positive => ordering == Ordering::Greater,
                    Sign::Negative => ordering == Ordering::Less,
                }
            }
        }
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.is_greater(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for BigInteger {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInteger::new(*other)
    }
}

impl PartialOrd<i64> for BigInteger {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInteger::new(*other)))
    }
}

impl PartialEq<BigInteger> for i64 {
    fn eq(&self, other: &BigInteger) -> bool {
        other == self
    }
}

impl PartialOrd<BigInteger> for i64 {
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(BigInteger::new(*self).cmp(other))
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.digits == [1]
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = if self.digits.is_empty() {
            "0".to_string()
        } else {
            self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
        };
        f.pad_integral(!self.is_negative(), "", &rendered)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}
