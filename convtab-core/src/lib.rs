//! Core types for convtab conversion tables
//!
//! Provides the pieces every other crate builds on:
//! - user input parsing with locale accommodation (decimal comma)
//! - the precision setting and display formatting

mod input;
mod format;

pub use input::{parse_decimal, InputError};
pub use format::{format_value, Precision, PrecisionParseError};
