/// Lexical errors.
///
/// Raised while splitting the interior of a bracketed expression into raw
/// tokens, or while classifying a raw token: malformed quoting, unterminated
/// strings and tokens that match no known literal or operator.
pub mod lexical_error;
/// Semantic errors.
///
/// Raised only while evaluating expressions or executing statements, never
/// while merely parsing: operator type mismatches, undefined variables or
/// marks, division by zero, bad counts and malformed stack heights.
pub mod semantic_error;
/// Structural errors.
///
/// Grammar violations detected while building the statement sequence, plus
/// duplicate marks found while building the label table.
pub mod structural_error;

pub use lexical_error::LexicalError;
pub use semantic_error::SemanticError;
pub use structural_error::StructuralError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed quoting or an unclassifiable token.
    Lexical,
    /// A grammar violation found while loading a program.
    Structural,
    /// A failure found while evaluating or executing.
    Semantic,
    /// The input source or output sink failed.
    Io,
}

/// Every failure the interpreter can surface. All of them are fatal to the
/// load or run in which they occur.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// See [`LexicalError`].
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// See [`StructuralError`].
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// See [`SemanticError`].
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// `input` was evaluated after the input source reached end of file.
    #[error("input: input source is exhausted")]
    InputExhausted,
    /// Reading input or writing output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns which part of the error taxonomy this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical(_) => ErrorKind::Lexical,
            Self::Structural(_) => ErrorKind::Structural,
            Self::Semantic(_) => ErrorKind::Semantic,
            Self::InputExhausted | Self::Io(_) => ErrorKind::Io,
        }
    }
}
