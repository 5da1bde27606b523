#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

//! Arbitrary-length whole numbers stored as packed words, with both
//! integer-like and bit-set-like operations.

mod bits;
mod error;
pub mod limits;
mod ones;
mod whole;
pub mod word;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use limits::{NumericLimits, RoundStyle};
pub use ones::Ones;
pub use whole::WholeNumber;
pub use word::{WORD_BITS, Word};
