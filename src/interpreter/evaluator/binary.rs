/// Signature tables and dispatch for every binary operator.
pub mod core;

/// Numeric division family and string repetition.
///
/// Division, floor division and modulo share the zero-divisor check;
/// repetition validates its count the same way variadic counts are checked.
pub mod arithmetic;

/// List and string sequence operators: `@`, `:`, `nth` and `split`.
pub mod sequence;
