/// The evaluator reduces expressions and runs programs.
///
/// Expressions are reduced on a fresh operand stack every time control
/// reaches them. Programs run through an instruction pointer over the
/// statement sequence, with one variable environment per run.
///
/// # Responsibilities
/// - Dispatches unary, binary and variadic operators after checking operand
///   kinds against each operator's signature.
/// - Builds the label table and applies jump, skip and assignment semantics.
/// - Reads the input source for `input` and writes `output` lines.
pub mod evaluator;
/// The lexer splits and classifies expression tokens.
///
/// Splitting respects quoted regions; classification maps every raw token to
/// a literal, a variable reference or an operator.
pub mod lexer;
/// The parser turns source text into a statement sequence.
///
/// # Responsibilities
/// - Splits source on `;` and extracts comments.
/// - Parses each fragment with the statement grammar.
/// - Validates expressions structurally without evaluating them.
pub mod parser;
/// The value module defines the runtime data types.
pub mod value;
