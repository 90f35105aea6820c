use std::rc::Rc;

use crate::{
    ast::UnaryOperator,
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, type_mismatch},
            stack::Stack,
        },
        lexer::parse_number,
        value::core::{Kind, Value},
    },
    util::num::usize_to_f64,
};

impl UnaryOperator {
    /// The operand kinds this operator admits.
    #[must_use]
    pub const fn signature(self) -> &'static [Kind] {
        match self {
            Self::Length | Self::Sum | Self::Product | Self::Splat => &[Kind::List],
            Self::Negate | Self::Round => &[Kind::Number],
            Self::Not => &[Kind::Bool],
            Self::Truthy | Self::ToNumber => &[Kind::Bool, Kind::Number, Kind::String],
            Self::ToString | Self::Dup | Self::Drop | Self::TypeName => &Kind::ALL,
        }
    }

    /// Returns `true` if `kind` is in the operator's signature.
    #[must_use]
    pub fn accepts(self, kind: Kind) -> bool {
        self.signature().contains(&kind)
    }
}

impl Context<'_> {
    /// Pops one operand, applies a unary operator and pushes the result.
    ///
    /// Most operators push exactly one value. `dup` pushes two, `drop`
    /// pushes none and `splat` pushes every element of its list.
    ///
    /// # Errors
    /// - [`SemanticError::StackTooShort`] on an empty stack.
    /// - [`SemanticError::TypeMismatch`] if the operand's kind is not in
    ///   [`UnaryOperator::signature`].
    /// - [`SemanticError::NotNumeric`] for `num` on a non-numeric string.
    /// - [`SemanticError::NonNumberElement`] for `sum`/`prod` over a list
    ///   holding a non-number.
    ///
    /// # Example
    /// ```
    /// use stackto::{
    ///     ast::UnaryOperator,
    ///     interpreter::{
    ///         evaluator::{core::Context, stack::Stack},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Value::from("12.5"));
    ///
    /// Context::eval_unary(UnaryOperator::ToNumber, &mut stack).unwrap();
    /// assert_eq!(stack.as_slice(), &[Value::Number(12.5)]);
    /// ```
    pub fn eval_unary(op: UnaryOperator, stack: &mut Stack) -> EvalResult<()> {
        use UnaryOperator as U;
        use Value::{Bool, List, Number};

        let [value] = stack.pop_many::<1>(op.symbol())?;
        if !op.accepts(value.kind()) {
            return Err(type_mismatch(op.symbol(), &[value.kind()]));
        }

        match (op, value) {
            (U::Length, List(items)) => stack.push(Number(usize_to_f64(items.len()))),
            (U::Negate, Number(n)) => stack.push(Number(-n)),
            (U::Not, Bool(b)) => stack.push(Bool(!b)),
            (U::Truthy, Bool(b)) => stack.push(Bool(b)),
            (U::Truthy, Number(n)) => stack.push(Bool(n != 0.0)),
            (U::Truthy, Value::String(s)) => stack.push(Bool(!s.is_empty())),
            (U::ToNumber, Bool(b)) => stack.push(Number(if b { 1.0 } else { 0.0 })),
            (U::ToNumber, Number(n)) => stack.push(Number(n)),
            (U::ToNumber, Value::String(s)) => {
                let n = parse_number(&s).ok_or(SemanticError::NotNumeric { text: s })?;
                stack.push(Number(n));
            },
            (U::ToString, value) => stack.push(Value::String(value.to_string())),
            (U::Dup, value) => stack.extend([value.clone(), value]),
            (U::Drop, _) => {},
            (U::Round, Number(n)) => stack.push(Number(n.round_ties_even())),
            (U::Sum, List(items)) => stack.push(Number(fold_numbers(op, &items, 0.0, |a, b| a + b)?)),
            (U::Product, List(items)) => {
                stack.push(Number(fold_numbers(op, &items, 1.0, |a, b| a * b)?));
            },
            (U::TypeName, value) => stack.push(Value::String(value.kind().name().to_string())),
            (U::Splat, List(items)) => stack.extend(Rc::unwrap_or_clone(items)),
            (op, value) => return Err(type_mismatch(op.symbol(), &[value.kind()])),
        }

        Ok(())
    }
}

/// Folds a list that must hold only numbers.
fn fold_numbers(op: UnaryOperator,
                items: &[Value],
                init: f64,
                combine: impl Fn(f64, f64) -> f64)
                -> EvalResult<f64> {
    items.iter().try_fold(init, |total, item| match item {
                    Value::Number(n) => Ok(combine(total, *n)),
                    other => Err(SemanticError::NonNumberElement { operator: op.symbol(),
                                                                   element:  other.to_string(),
                                                                   kind:     other.kind().name(), }),
                })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: UnaryOperator, value: Value) -> EvalResult<Vec<Value>> {
        let mut stack = Stack::new();
        stack.push(value);
        Context::eval_unary(op, &mut stack)?;
        Ok(stack.as_slice().to_vec())
    }

    fn list(values: &[f64]) -> Value {
        Value::from(values.iter().copied().map(Value::Number).collect::<Vec<_>>())
    }

    #[test]
    fn truthiness() {
        assert_eq!(apply(UnaryOperator::Truthy, Value::Number(0.0)).unwrap(), [Value::Bool(false)]);
        assert_eq!(apply(UnaryOperator::Truthy, Value::from("x")).unwrap(), [Value::Bool(true)]);
        assert_eq!(apply(UnaryOperator::Truthy, Value::from("")).unwrap(), [Value::Bool(false)]);
        assert!(apply(UnaryOperator::Truthy, list(&[])).is_err());
    }

    #[test]
    fn conversions() {
        assert_eq!(apply(UnaryOperator::ToNumber, Value::Bool(true)).unwrap(), [Value::Number(1.0)]);
        assert_eq!(apply(UnaryOperator::ToNumber, Value::from("-3.")).unwrap(),
                   [Value::Number(-3.0)]);
        assert_eq!(apply(UnaryOperator::ToNumber, Value::from("x1")),
                   Err(SemanticError::NotNumeric { text: "x1".to_string() }));
        assert_eq!(apply(UnaryOperator::ToString, list(&[1.0, 2.5])).unwrap(),
                   [Value::from("[1.0, 2.5]")]);
        assert_eq!(apply(UnaryOperator::ToString, Value::from("abc")).unwrap(), [Value::from("abc")]);
    }

    #[test]
    fn round_half_to_even() {
        assert_eq!(apply(UnaryOperator::Round, Value::Number(2.5)).unwrap(), [Value::Number(2.0)]);
        assert_eq!(apply(UnaryOperator::Round, Value::Number(3.5)).unwrap(), [Value::Number(4.0)]);
        assert_eq!(apply(UnaryOperator::Round, Value::Number(-1.4)).unwrap(), [Value::Number(-1.0)]);
    }

    #[test]
    fn list_reductions() {
        assert_eq!(apply(UnaryOperator::Sum, list(&[1.0, 2.0, 3.5])).unwrap(), [Value::Number(6.5)]);
        assert_eq!(apply(UnaryOperator::Product, list(&[])).unwrap(), [Value::Number(1.0)]);
        assert_eq!(apply(UnaryOperator::Length, list(&[7.0, 8.0])).unwrap(), [Value::Number(2.0)]);

        let mixed = Value::from(vec![Value::Number(1.0), Value::from("2")]);
        assert!(matches!(apply(UnaryOperator::Sum, mixed),
                         Err(SemanticError::NonNumberElement { operator: "sum", kind: "string", .. })));
    }

    #[test]
    fn stack_shaping() {
        assert_eq!(apply(UnaryOperator::Dup, Value::Bool(true)).unwrap(),
                   [Value::Bool(true), Value::Bool(true)]);
        assert!(apply(UnaryOperator::Drop, Value::Number(1.0)).unwrap().is_empty());
        assert_eq!(apply(UnaryOperator::Splat, list(&[1.0, 2.0])).unwrap(),
                   [Value::Number(1.0), Value::Number(2.0)]);
    }

    #[test]
    fn type_names_and_mismatches() {
        assert_eq!(apply(UnaryOperator::TypeName, list(&[])).unwrap(), [Value::from("list")]);
        assert_eq!(apply(UnaryOperator::Negate, Value::Bool(true)),
                   Err(SemanticError::TypeMismatch { operator: "~", found: "bool".to_string() }));
        assert_eq!(apply(UnaryOperator::Not, Value::Number(1.0)),
                   Err(SemanticError::TypeMismatch { operator: "!", found: "number".to_string() }));
    }
}
