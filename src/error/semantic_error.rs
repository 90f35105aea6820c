/// Represents all errors that can occur during evaluation and execution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SemanticError {
    /// An operator needed more operands than the stack holds.
    #[error("{operator}: stack too short (height {height}, need >= {needed})")]
    StackTooShort {
        /// The operator symbol.
        operator: &'static str,
        /// Stack height when the operator ran.
        height:   usize,
        /// Number of operands required.
        needed:   usize,
    },
    /// The operand kinds are not in the operator's signature set.
    #[error("{operator}: cannot process types ({found})")]
    TypeMismatch {
        /// The operator symbol.
        operator: &'static str,
        /// The offending operand kinds, comma separated.
        found:    String,
    },
    /// `num` was applied to a string that does not look like a number.
    #[error("num: `{text}` cannot be converted to type number")]
    NotNumeric {
        /// The rejected string.
        text: String,
    },
    /// `sum` or `prod` met a list element that is not a number.
    #[error("{operator}: element `{element}` of type {kind} is not a number")]
    NonNumberElement {
        /// The operator symbol.
        operator: &'static str,
        /// The element rendered as text.
        element:  String,
        /// The element kind.
        kind:     &'static str,
    },
    /// A division or modulo had a zero divisor.
    #[error("{operator}: zero division between {left} and {right}")]
    DivisionByZero {
        /// The operator symbol.
        operator: &'static str,
        /// The dividend, rendered.
        left:     String,
        /// The divisor, rendered.
        right:    String,
    },
    /// A count or index was not integer valued.
    #[error("{operator}: non-integer argument {value}")]
    NonIntegerCount {
        /// The operator symbol.
        operator: &'static str,
        /// The rejected value, rendered.
        value:    String,
    },
    /// A count or index was negative.
    #[error("{operator}: cannot process negative argument {value}")]
    NegativeCount {
        /// The operator symbol.
        operator: &'static str,
        /// The rejected value, rendered.
        value:    String,
    },
    /// A count asked for more entries than remain on the stack.
    #[error("{operator}: stack too short for count {count} (height left is {height})")]
    CountExceedsStack {
        /// The operator symbol.
        operator: &'static str,
        /// The requested count.
        count:    usize,
        /// Entries left after popping the count.
        height:   usize,
    },
    /// `nth` indexed past the end of its list.
    #[error("nth: index {index} out of range for list of length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index:  usize,
        /// The list length.
        length: usize,
    },
    /// String repetition would produce an unrepresentable string.
    #[error("*: repeating a string of length {length} {count} times is too large")]
    RepeatTooLarge {
        /// Length of the repeated string in bytes.
        length: usize,
        /// The repetition count.
        count:  usize,
    },
    /// `split` was given an empty separator.
    #[error("split: empty separator")]
    EmptySeparator,
    /// A variable was read before any `set` bound it.
    #[error("unknown variable `${name}`")]
    UnknownVariable {
        /// The variable name, without the sigil.
        name: String,
    },
    /// A jump targeted a mark that does not exist.
    #[error("goto: mark `{name}` undefined")]
    UnknownMark {
        /// The mark name.
        name: String,
    },
    /// An `if` guard did not evaluate to a bool.
    #[error("if: invalid type of guard (should be bool, not {kind}): {value}")]
    NonBoolGuard {
        /// The guard's kind.
        kind:  &'static str,
        /// The guard's value, rendered.
        value: String,
    },
    /// An expression did not reduce to exactly one value.
    #[error("expression: stack ended with invalid height {height} (expected 1)")]
    BadStackHeight {
        /// The final stack height.
        height: usize,
    },
}
