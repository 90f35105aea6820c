/// Core evaluation logic and context management.
///
/// Contains the `Context` that owns the input source and output sink,
/// expression evaluation over a local operand stack, and shared error
/// helpers.
pub mod core;

/// The variable environment of a single run.
pub mod environment;

/// The operand stack an expression is reduced on.
pub mod stack;

/// Unary operator signatures and evaluation.
///
/// Handles every operator that pops one operand, such as negation, the
/// explicit `num`/`str` conversions and `splat`.
pub mod unary;

/// Binary operator signatures and evaluation.
///
/// Implements comparisons, equality, boolean logic, arithmetic, string and
/// list operators.
pub mod binary;

/// Variadic operator evaluation.
///
/// Operators that pop a count first (`\`, `dropn`, `topn`) or that act on
/// the whole stack (`top`, `rand`).
pub mod variadic;

/// Program execution.
///
/// Builds the label table and runs statements through an instruction
/// pointer with jump, conditional-skip and assignment semantics.
pub mod program;
