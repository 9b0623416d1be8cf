//! Conversions between [`BigInteger`] and native numeric types.

use std::fmt;

use num_traits::{PrimInt, ToPrimitive, Zero};

use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::sign::Sign;

mod private {
    pub trait Sealed {}
}

/// A fixed-width native integer type that converts to and from [`BigInteger`].
///
/// Implemented for every primitive signed and unsigned integer.
pub trait NativeInt: PrimInt + fmt::Display + private::Sealed {
    /// Type name used in overflow diagnostics.
    const NAME: &'static str;
    /// Whether the type can hold negative values.
    const SIGNED: bool;
}

macro_rules! impl_native_int {
    ($signed:literal => $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl NativeInt for $t {
                const NAME: &'static str = stringify!($t);
                const SIGNED: bool = $signed;
            }

            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_native(value)
                }
            }

            impl TryFrom<&BigInteger> for $t {
                type Error = BigIntError;

                fn try_from(value: &BigInteger) -> Result<Self> {
                    value.value()
                }
            }

            impl TryFrom<BigInteger> for $t {
                type Error = BigIntError;

                fn try_from(value: BigInteger) -> Result<Self> {
                    value.value()
                }
            }
        )*
    };
}

impl_native_int!(true => i8, i16, i32, i64, i128, isize);
impl_native_int!(false => u8, u16, u32, u64, u128, usize);

impl BigInteger {
    /// Creates an integer from any native integer by rendering it in decimal.
    #[must_use]
    pub fn from_native<T: NativeInt>(value: T) -> Self {
        let rendered = value.to_string();
        match rendered.strip_prefix('-') {
            Some(body) => Self::from_ascii_digits(Sign::Negative, body.as_bytes()),
            None => Self::from_ascii_digits(Sign::Positive, rendered.as_bytes()),
        }
    }

    /// Converts to the native integer type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Sign`] if `T` is unsigned and the value is
    /// negative, and [`BigIntError::Overflow`] if the value lies outside
    /// `T::MIN..=T::MAX`.
    pub fn value<T: NativeInt>(&self) -> Result<T> {
        if !T::SIGNED && self.is_negative() {
            return Err(BigIntError::Sign { target: T::NAME });
        }

        if *self > Self::from_native(T::max_value()) || *self < Self::from_native(T::min_value()) {
            return Err(self.overflow::<T>());
        }

        // Negative values accumulate downwards so that T::MIN never passes through |T::MIN|.
        let narrowed = if self.is_negative() {
            let mut acc = 0i128;
            for &digit in self.digits.iter().rev() {
                acc = acc
                    .checked_mul(10)
                    .and_then(|acc| acc.checked_sub(i128::from(digit)))
                    .ok_or_else(|| self.overflow::<T>())?;
            }
            num_traits::cast::<i128, T>(acc)
        } else {
            let mut acc = 0u128;
            for &digit in self.digits.iter().rev() {
                acc = acc
                    .checked_mul(10)
                    .and_then(|acc| acc.checked_add(u128::from(digit)))
                    .ok_or_else(|| self.overflow::<T>())?;
            }
            num_traits::cast::<u128, T>(acc)
        };

        narrowed.ok_or_else(|| self.overflow::<T>())
    }

    fn overflow<T: NativeInt>(&self) -> BigIntError {
        BigIntError::Overflow {
            value: self.to_string(),
            target: T::NAME,
        }
    }

    /// Approximates the value as an `f64` by summing `digit * 10^position`.
    ///
    /// Precision degrades once the value exceeds the 53-bit mantissa.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let mut result = 0.0;
        let mut weight = 1.0;
        for &digit in &self.digits {
            result += f64::from(digit) * weight;
            weight *= 10.0;
        }
        if self.is_negative() {
            -result
        } else {
            result
        }
    }

    /// Approximate quotient `self / divisor` as an `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn real_divide(&self, divisor: &BigInteger) -> Result<f64> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.to_f64() / divisor.to_f64())
    }

    /// Approximate quotient by a native integer divisor.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn real_divide_native<T: NativeInt>(&self, divisor: T) -> Result<f64> {
        self.real_divide(&Self::from_native(divisor))
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.value().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value().ok()
    }

    fn to_i128(&self) -> Option<i128> {
        self.value().ok()
    }

    fn to_u128(&self) -> Option<u128> {
        self.value().ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(BigInteger::to_f64(self))
    }
}
