//! [Si57x](https://www.skyworksinc.com/en/Products/Timing/Programmable-Oscillators) programmable oscillator calculator.
//!
//! Output frequency from the frequency control registers, or the register
//! values that get closest to a requested output frequency.

pub mod constants;
pub mod register;
pub mod errors;
pub mod frequency;
pub mod config;

pub use errors::{Error, Result};
