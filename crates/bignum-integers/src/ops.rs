//! Arithmetic operators.
//!
//! Each operation is a case table over the signs of its operands that
//! reduces to unsigned digit arithmetic in [`crate::magnitude`]. Operators are
//! provided for owned and borrowed operands, for `i64` on either side, and
//! in compound-assignment form.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::magnitude;
use crate::sign::Sign;

/// `|minuend| - |subtrahend|`, swapping and negating when the subtrahend is larger.
fn difference(minuend: &[u8], subtrahend: &[u8]) -> BigInteger {
    if magnitude::cmp(minuend, subtrahend) == Ordering::Less {
        BigInteger::normalize(Sign::Negative, magnitude::sub(subtrahend, minuend))
    } else {
        BigInteger::normalize(Sign::Positive, magnitude::sub(minuend, subtrahend))
    }
}

fn add(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    match (lhs.sign, rhs.sign) {
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            BigInteger::normalize(lhs.sign, magnitude::add(&lhs.digits, &rhs.digits))
        }
        (Sign::Positive, Sign::Negative) => difference(&lhs.digits, &rhs.digits),
        (Sign::Negative, Sign::Positive) => difference(&rhs.digits, &lhs.digits),
    }
}

fn sub(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    match (lhs.sign, rhs.sign) {
        (Sign::Positive, Sign::Positive) => difference(&lhs.digits, &rhs.digits),
        // -|a| - -|b| = |b| - |a|
        (Sign::Negative, Sign::Negative) => difference(&rhs.digits, &lhs.digits),
        (Sign::Positive, Sign::Negative) => {
            BigInteger::normalize(Sign::Positive, magnitude::add(&lhs.digits, &rhs.digits))
        }
        (Sign::Negative, Sign::Positive) => {
            BigInteger::normalize(Sign::Negative, magnitude::add(&lhs.digits, &rhs.digits))
        }
    }
}

fn mul(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    BigInteger::normalize(lhs.sign * rhs.sign, magnitude::mul(&lhs.digits, &rhs.digits))
}

fn div(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    match lhs.try_div(rhs) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
}

fn rem(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    match lhs.try_rem(rhs) {
        Ok(remainder) => remainder,
        Err(err) => panic!("{err}"),
    }
}

impl BigInteger {
    /// Quotient truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn try_div(&self, divisor: &BigInteger) -> Result<Self> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(Self::normalize(
            self.sign * divisor.sign,
            magnitude::div(&self.digits, &divisor.digits),
        ))
    }

    /// Remainder of truncating division; takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn try_rem(&self, divisor: &BigInteger) -> Result<Self> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(Self::normalize(
            self.sign,
            magnitude::rem(&self.digits, &divisor.digits),
        ))
    }

    /// Computes the quotient and remainder together.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn try_div_rem(&self, divisor: &BigInteger) -> Result<(Self, Self)> {
        let quotient = self.try_div(divisor)?;
        let remainder = sub(self, &mul(divisor, &quotient));
        Ok((quotient, remainder))
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $op:ident) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $op(self, rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $op(&self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $op(&self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $op(self, &rhs)
            }
        }

        impl $imp<i64> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: i64) -> BigInteger {
                $op(&self, &BigInteger::new(rhs))
            }
        }

        impl $imp<i64> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: i64) -> BigInteger {
                $op(self, &BigInteger::new(rhs))
            }
        }

        impl $imp<BigInteger> for i64 {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $op(&BigInteger::new(self), &rhs)
            }
        }

        impl $imp<&BigInteger> for i64 {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $op(&BigInteger::new(self), rhs)
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = $op(self, &rhs);
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = $op(self, rhs);
            }
        }

        impl $assign_imp<i64> for BigInteger {
            fn $assign_method(&mut self, rhs: i64) {
                *self = $op(self, &BigInteger::new(rhs));
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul);
// Panics on a zero divisor, as native integer division does.
forward_binop!(Div, div, DivAssign, div_assign, div);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem);

impl Neg for BigInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        BigInteger::normalize(-self.sign, self.digits)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        BigInteger::normalize(-self.sign, self.digits.clone())
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
