/// Represents all grammar violations found while loading a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// An expression is neither `input` nor wrapped in `[` and `]`.
    #[error("expression: missing delimiters `[` and/or `]` in `{expression}`")]
    MissingDelimiters {
        /// The offending expression text.
        expression: String,
    },
    /// An expression has nothing between its brackets.
    #[error("expression: empty expression `{expression}`")]
    EmptyExpression {
        /// The offending expression text.
        expression: String,
    },
    /// A `mark` or `goto` target is not a valid identifier.
    #[error("{keyword}: invalid mark name `{name}`")]
    InvalidMarkName {
        /// The statement keyword.
        keyword: &'static str,
        /// The rejected name.
        name:    String,
    },
    /// A `set` target is not a valid `$`-prefixed variable name.
    #[error("{keyword}: invalid variable name `{name}`")]
    InvalidVariableName {
        /// The statement keyword.
        keyword: &'static str,
        /// The rejected name.
        name:    String,
    },
    /// A statement is missing one of its arguments.
    #[error("{keyword}: missing argument in `{statement}`")]
    MissingArgument {
        /// The statement keyword, or the lone token that was found.
        keyword:   String,
        /// The statement text.
        statement: String,
    },
    /// An `if` statement has no `then` after a complete guard.
    #[error("if: missing `then` in `{statement}`")]
    MissingThen {
        /// The statement text.
        statement: String,
    },
    /// The body of an `if` is not a `goto`, `set` or `output` statement.
    #[error("if: unknown or prohibited statement type `{keyword}` in body")]
    ProhibitedIfBody {
        /// The leading keyword of the body.
        keyword: String,
    },
    /// A statement begins with an unknown keyword.
    #[error("illegal statement start `{keyword}`")]
    UnknownKeyword {
        /// The leading word of the statement.
        keyword: String,
    },
    /// Two `mark` statements share a name.
    #[error("mark: duplicate marker `{name}` (statements {first}, {second})")]
    DuplicateMark {
        /// The mark name.
        name:   String,
        /// Index of the first definition.
        first:  usize,
        /// Index of the second definition.
        second: usize,
    },
}
