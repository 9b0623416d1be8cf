//! # bignum-integers
//!
//! Arbitrary precision signed integers stored as decimal digit vectors.
//!
//! This crate provides:
//! - [`BigInteger`] with construction from decimal strings and native integers
//! - The full comparison and arithmetic operator sets, including `i64` operands
//! - Checked conversion back to native integers and approximate `f64` division
//!
//! ## Algorithms
//!
//! - Addition and subtraction are column-wise with carry and borrow
//! - Multiplication is schoolbook repeated addition
//! - Division binary-searches the quotient between powers of ten
//!
//! ```
//! use bignum_integers::BigInteger;
//!
//! let a: BigInteger = "100000000000000000000".parse()?;
//! assert_eq!((a + 1_i64).to_string(), "100000000000000000001");
//! assert_eq!(BigInteger::new(-128).value::<i8>()?, -128);
//! # Ok::<(), bignum_integers::BigIntError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod error;
pub mod integer;
mod magnitude;
pub mod ops;
pub mod sign;

#[cfg(test)]
mod proptests;

pub use convert::NativeInt;
pub use error::{BigIntError, ParseErrorKind, Result};
pub use integer::BigInteger;
pub use sign::Sign;
