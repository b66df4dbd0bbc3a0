/// Numeric conversion helpers.
///
/// This module provides safe functions for converting integer literal values
/// to floating point without risking silent data loss or rounding errors.
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or an error if the value is out of range.
pub mod num;
