use crate::{
    ast::Expression,
    error::{Result, StructuralError},
    interpreter::lexer::{classify, split_expression},
};

pub type ParseResult<T> = Result<T>;

/// Validates expression text and wraps it as an [`Expression`].
///
/// The bare keyword `input` is accepted as is. Anything else must be
/// wrapped in `[` and `]`, hold at least one token, and every token must
/// classify. Operand kinds are not checked until evaluation.
///
/// # Errors
/// - [`StructuralError::MissingDelimiters`] or
///   [`StructuralError::EmptyExpression`] for malformed brackets.
/// - Any [`LexicalError`](crate::error::LexicalError) raised while splitting
///   or classifying the tokens.
///
/// # Example
/// ```
/// use stackto::{ast::Expression, interpreter::parser::core::parse_expression};
///
/// assert_eq!(parse_expression(" input ").unwrap(), Expression::Input);
/// assert_eq!(parse_expression("[ 1 $x + ]").unwrap(),
///            Expression::Rpn("[ 1 $x + ]".to_string()));
/// assert!(parse_expression("[ ]").is_err());
/// assert!(parse_expression("1 2 +").is_err());
/// ```
pub fn parse_expression(text: &str) -> ParseResult<Expression> {
    let text = text.trim();
    if text == "input" {
        return Ok(Expression::Input);
    }

    let interior = text.strip_prefix('[')
                       .and_then(|t| t.strip_suffix(']'))
                       .ok_or_else(|| StructuralError::MissingDelimiters { expression: text.to_string() })?;
    if interior.trim().is_empty() {
        return Err(StructuralError::EmptyExpression { expression: text.to_string() }.into());
    }

    for raw in split_expression(interior)? {
        classify(raw)?;
    }

    Ok(Expression::Rpn(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LexicalError};

    #[test]
    fn rejects_bad_delimiters() {
        for text in ["[ 1 2 +", "1 2 + ]", "[", "Input", "input ]"] {
            assert!(matches!(parse_expression(text),
                             Err(Error::Structural(StructuralError::MissingDelimiters { .. }))),
                    "{text}");
        }
        assert!(matches!(parse_expression("[]"),
                         Err(Error::Structural(StructuralError::EmptyExpression { .. }))));
    }

    #[test]
    fn validates_tokens_without_evaluating() {
        assert!(parse_expression("[ 1 \"a\" + ]").is_ok());
        assert!(parse_expression("[ $undefined ]").is_ok());
        assert!(parse_expression("[ + + + ]").is_ok());
        assert!(matches!(parse_expression("[ 1 .5 + ]"),
                         Err(Error::Lexical(LexicalError::UnknownToken { .. }))));
        assert!(matches!(parse_expression("[ $1x ]"),
                         Err(Error::Lexical(LexicalError::InvalidVariable { .. }))));
        assert!(matches!(parse_expression("[ 'open ]"),
                         Err(Error::Lexical(LexicalError::UnterminatedString { quote: '\'', .. }))));
    }
}
