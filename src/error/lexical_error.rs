/// Represents all errors that can occur while tokenizing an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    /// A quote character was glued to the end of a preceding token.
    #[error("tokenize: string starting without whitespace after previous item at byte {position} of `{expression}`")]
    GluedQuote {
        /// The expression interior being tokenized.
        expression: String,
        /// Byte offset of the offending quote.
        position:   usize,
    },
    /// The expression ended while still inside a quoted string.
    #[error("tokenize: expression ended while parsing {quote}-quoted string in `{expression}`")]
    UnterminatedString {
        /// The quote character that was never closed.
        quote:      char,
        /// The expression interior being tokenized.
        expression: String,
    },
    /// A token starting with `$` is not a valid variable reference.
    #[error("classify: invalid variable name `{token}`")]
    InvalidVariable {
        /// The raw token.
        token: String,
    },
    /// A token starting with a quote is not a well-formed string literal.
    #[error("classify: invalid string syntax `{token}`")]
    InvalidString {
        /// The raw token.
        token: String,
    },
    /// A token matched no literal, variable or operator.
    #[error("classify: value of unknown type `{token}`")]
    UnknownToken {
        /// The raw token.
        token: String,
    },
}
