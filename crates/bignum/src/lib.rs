//! # bignum
//!
//! Arbitrary precision decimal integers.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: `+ - * / %`, negation and absolute value on
//!   integers of any size, with truncating division
//! - **Native Interop**: comparison and arithmetic against `i64`, checked
//!   conversion to every primitive integer type
//! - **Decimal Strings**: parsing and canonical rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use bignum::prelude::*;
//!
//! let a: BigInteger = "3345464456576867887943425467865434247657999354657687987987654235345".parse()?;
//! let b: BigInteger = "123346576786546566787654356576876865".parse()?;
//! assert_eq!((&a / &b).to_string(), "27122475092002377281597876586575");
//! assert!(BigInteger::new(128).value::<i8>().is_err());
//! # Ok::<(), BigIntError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bignum_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bignum_integers::{BigIntError, BigInteger, NativeInt, ParseErrorKind, Sign};
}
