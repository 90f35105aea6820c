use logos::Logos;

use crate::{
    ast::{BinaryOperator, TernaryOperator, UnaryOperator, VariadicOperator},
    error::LexicalError,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// Represents a classified expression token.
///
/// A raw token produced by [`split_expression`] is valid only if it lexes to
/// exactly one of these variants, spanning the whole raw text.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `t` or `true`, in any letter case.
    #[token("t", ignore(case))]
    #[token("true", ignore(case))]
    True,
    /// `f` or `false`, in any letter case.
    #[token("f", ignore(case))]
    #[token("false", ignore(case))]
    False,
    /// Numeric literals such as `3`, `-2.5` or `5.`. A leading dot as in `.5`
    /// is not a number.
    #[regex(r"-?[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// String literals in double or single quotes, without the quotes.
    #[regex(r#""[^"]*""#, unquote)]
    #[regex(r"'[^']*'", unquote)]
    Str(String),
    /// Variable references such as `$count`, without the sigil.
    #[regex(r"\$[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),

    /// Operators popping one operand.
    #[token("#", |_| UnaryOperator::Length)]
    #[token("~", |_| UnaryOperator::Negate)]
    #[token("!", |_| UnaryOperator::Not)]
    #[token("?", |_| UnaryOperator::Truthy)]
    #[token("num", |_| UnaryOperator::ToNumber)]
    #[token("str", |_| UnaryOperator::ToString)]
    #[token("dup", |_| UnaryOperator::Dup)]
    #[token("drop", |_| UnaryOperator::Drop)]
    #[token("round", |_| UnaryOperator::Round)]
    #[token("sum", |_| UnaryOperator::Sum)]
    #[token("prod", |_| UnaryOperator::Product)]
    #[token("type", |_| UnaryOperator::TypeName)]
    #[token("splat", |_| UnaryOperator::Splat)]
    Unary(UnaryOperator),

    /// Operators popping two operands.
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">", |_| BinaryOperator::Greater)]
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("=", |_| BinaryOperator::Equal)]
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("!=", |_| BinaryOperator::NotEqual)]
    #[token("<>", |_| BinaryOperator::NotEqual)]
    #[token("&", |_| BinaryOperator::And)]
    #[token("^", |_| BinaryOperator::Xor)]
    #[token("|", |_| BinaryOperator::Or)]
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("//", |_| BinaryOperator::FloorDiv)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("@", |_| BinaryOperator::Concat)]
    #[token(":", |_| BinaryOperator::Append)]
    #[token("swap", |_| BinaryOperator::Swap)]
    #[token("nth", |_| BinaryOperator::Nth)]
    #[token("min", |_| BinaryOperator::Min)]
    #[token("max", |_| BinaryOperator::Max)]
    #[token("split", |_| BinaryOperator::Split)]
    Binary(BinaryOperator),

    /// Operators popping three operands. No spelling produces one yet.
    Ternary(TernaryOperator),

    /// Operators popping a count first.
    #[token("\\", |_| VariadicOperator::Pack)]
    #[token("dropn", |_| VariadicOperator::DropN)]
    #[token("top", |_| VariadicOperator::Top)]
    #[token("topn", |_| VariadicOperator::TopN)]
    #[token("rand", |_| VariadicOperator::Rand)]
    Variadic(VariadicOperator),
}

/// Strips the surrounding quote characters from a string literal.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Splits the interior of a bracketed expression into raw tokens.
///
/// Tokens are separated by whitespace outside quotes. A quoted region, in
/// `"` or `'`, stays inside a single token together with its delimiters. An
/// opening quote must start the text or follow whitespace.
///
/// # Errors
/// - [`LexicalError::GluedQuote`] if a quote directly follows a non-space
///   character.
/// - [`LexicalError::UnterminatedString`] if the text ends inside quotes.
///
/// # Example
/// ```
/// use stackto::interpreter::lexer::split_expression;
///
/// let tokens = split_expression(r#" "a b" 2 *  'c' "#).unwrap();
/// assert_eq!(tokens, vec![r#""a b""#, "2", "*", "'c'"]);
///
/// assert!(split_expression(r#"x"y""#).is_err());
/// assert!(split_expression(r#""open"#).is_err());
/// ```
pub fn split_expression(text: &str) -> LexResult<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut previous: Option<char> = None;

    for (index, c) in text.char_indices() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
        } else if c.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(&text[begin..index]);
            }
        } else {
            if c == '"' || c == '\'' {
                if previous.is_some_and(|p| !p.is_whitespace()) {
                    return Err(LexicalError::GluedQuote { expression: text.to_string(),
                                                          position:   index, });
                }
                quote = Some(c);
            }
            start.get_or_insert(index);
        }
        previous = Some(c);
    }

    if let Some(open) = quote {
        return Err(LexicalError::UnterminatedString { quote:      open,
                                                      expression: text.to_string(), });
    }
    if let Some(begin) = start {
        tokens.push(&text[begin..]);
    }

    Ok(tokens)
}

/// Classifies one raw token.
///
/// # Errors
/// Returns [`LexicalError::InvalidVariable`] for a malformed `$` token,
/// [`LexicalError::InvalidString`] for a malformed quoted token and
/// [`LexicalError::UnknownToken`] for anything else that is not a literal
/// or an operator.
///
/// # Example
/// ```
/// use stackto::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, classify},
/// };
///
/// assert_eq!(classify("TRUE").unwrap(), Token::True);
/// assert_eq!(classify("5.").unwrap(), Token::Number(5.0));
/// assert_eq!(classify("<>").unwrap(), Token::Binary(BinaryOperator::NotEqual));
/// assert!(classify(".5").is_err());
/// ```
pub fn classify(raw: &str) -> LexResult<Token> {
    let mut lexer = Token::lexer(raw);

    if let Some(Ok(token)) = lexer.next()
       && lexer.span().end == raw.len()
    {
        return Ok(token);
    }

    let token = raw.to_string();
    Err(match raw.chars().next() {
        Some('$') => LexicalError::InvalidVariable { token },
        Some('"' | '\'') => LexicalError::InvalidString { token },
        _ => LexicalError::UnknownToken { token },
    })
}

/// Parses text with the numeric literal grammar, as `num` does for strings.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    match classify(text) {
        Ok(Token::Number(value)) => Some(value),
        _ => None,
    }
}
