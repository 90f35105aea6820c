/// Expression validation.
///
/// Checks that expression text is `input` or bracket-delimited RPN whose
/// every token classifies, without evaluating anything.
pub mod core;

/// Identifier and keyword helpers shared by the statement parsers.
pub mod utils;

/// Statement grammar.
///
/// Parses one fragment into a typed statement, including the restricted
/// grammar of `if` bodies.
pub mod statement;

/// Program loading.
///
/// Splits source text into fragments, absorbs comments and feeds the
/// remaining fragments to the statement grammar.
pub mod program;
