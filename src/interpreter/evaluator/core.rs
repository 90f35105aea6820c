use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::Expression,
    error::{Error, Result, SemanticError, StructuralError},
    interpreter::{
        evaluator::{environment::Environment, stack::Stack},
        lexer::{Token, classify, split_expression},
        parser::core::parse_expression,
        value::core::{Kind, Value},
    },
    util::num::{CountError, format_number},
};

/// Result type used by operators.
///
/// Operator evaluation only ever fails with a [`SemanticError`]; expression
/// and statement evaluation widen this to the crate-level [`Error`].
pub type EvalResult<T> = std::result::Result<T, SemanticError>;

/// Stores the runtime evaluation context.
///
/// The context owns the two effectful endpoints of a run: the line-oriented
/// input source read by `input`, and the output sink `output` writes to.
/// Program state lives in an explicit [`Environment`] passed to every
/// evaluation, so one context can evaluate against any environment.
pub struct Context<'io> {
    input:  &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a context reading from `input` and writing to `output`.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use stackto::interpreter::{
    ///     evaluator::{core::Context, environment::Environment},
    ///     value::core::Value,
    /// };
    ///
    /// let mut input = Cursor::new("");
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// let value = context.eval_text("[ 1 2 + ]", &Environment::new()).unwrap();
    /// assert_eq!(value, Value::Number(3.0));
    /// ```
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Parses and evaluates expression text against `env`.
    ///
    /// # Errors
    /// Fails on any lexical, structural or semantic error in the expression,
    /// or if `input` cannot be read.
    pub fn eval_text(&mut self, text: &str, env: &Environment) -> Result<Value> {
        let expr = parse_expression(text)?;
        self.eval_expression(&expr, env)
    }

    /// Evaluates an expression to exactly one value.
    ///
    /// `input` reads one line from the input source. Bracketed text is
    /// tokenized again on every call and reduced on a fresh operand stack:
    /// literals push themselves, variables push their bound value and
    /// operators rewrite the stack. The stack must end with exactly one
    /// entry.
    ///
    /// # Errors
    /// - [`SemanticError::UnknownVariable`] for an unbound variable.
    /// - [`SemanticError::BadStackHeight`] unless exactly one value remains.
    /// - Any operator error, see [`Context::eval_unary`],
    ///   [`Context::eval_binary`] and [`Context::eval_variadic`].
    /// - [`Error::InputExhausted`] or [`Error::Io`] while reading `input`.
    pub fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> Result<Value> {
        let Expression::Rpn(text) = expr else {
            return self.read_input();
        };
        let interior =
            expr.interior()
                .ok_or_else(|| StructuralError::MissingDelimiters { expression: text.clone() })?;

        let mut stack = Stack::new();
        for raw in split_expression(interior)? {
            match classify(raw)? {
                Token::True => stack.push(Value::Bool(true)),
                Token::False => stack.push(Value::Bool(false)),
                Token::Number(n) => stack.push(Value::Number(n)),
                Token::Str(s) => stack.push(Value::String(s)),
                Token::Variable(name) => stack.push(env.get(&name)?.clone()),
                Token::Unary(op) => Self::eval_unary(op, &mut stack)?,
                Token::Binary(op) => Self::eval_binary(op, &mut stack)?,
                Token::Ternary(op) => match op {},
                Token::Variadic(op) => Self::eval_variadic(op, &mut stack)?,
            }
        }

        let value = stack.into_single()?;
        trace!(%expr, %value, "evaluated");
        Ok(value)
    }

    /// Writes one line for `value` to the output sink.
    pub(crate) fn emit(&mut self, value: &Value) -> Result<()> {
        writeln!(self.output, "{}", value.render_output())?;
        Ok(())
    }

    /// Reads one line from the input source, without its line terminator.
    fn read_input(&mut self) -> Result<Value> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputExhausted);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Value::String(line))
    }
}

/// Builds the error for operands outside an operator's signature set.
pub(crate) fn type_mismatch(operator: &'static str, kinds: &[Kind]) -> SemanticError {
    let found = kinds.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ");
    SemanticError::TypeMismatch { operator, found }
}

/// Builds the error for a count or index that is not a non-negative integer.
pub(crate) fn count_error(operator: &'static str, value: f64, error: CountError) -> SemanticError {
    let value = format_number(value);
    match error {
        CountError::Fractional => SemanticError::NonIntegerCount { operator, value },
        CountError::Negative => SemanticError::NegativeCount { operator, value },
    }
}
