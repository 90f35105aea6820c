/// Numeric conversion and formatting helpers.
///
/// This module provides the checked conversions between `f64` and `usize`
/// used by counting and indexing operators, and the canonical decimal
/// rendering of numbers used by `str` and by program output.
pub mod num;
