use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::core::{EvalResult, count_error, type_mismatch},
        value::core::Value,
    },
    util::num::f64_to_count,
};

/// The local operand stack one expression is reduced on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a value on top.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pushes several values, the last one ending on top.
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values.extend(values);
    }

    /// Current height.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the entries bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Discards every entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Pops the top `N` entries for `operator`, in stack order: the last
    /// element of the array was the top of the stack.
    ///
    /// # Errors
    /// Returns [`SemanticError::StackTooShort`] if fewer than `N` entries
    /// remain; the stack is left untouched in that case.
    pub fn pop_many<const N: usize>(&mut self, operator: &'static str) -> EvalResult<[Value; N]> {
        let height = self.values.len();
        let too_short = SemanticError::StackTooShort { operator, height, needed: N };
        if height < N {
            return Err(too_short);
        }

        self.values.split_off(height - N).try_into().map_err(|_| too_short)
    }

    /// Pops the count argument of a variadic operator.
    ///
    /// The count must be an integer-valued, non-negative number no larger
    /// than the number of entries left below it.
    ///
    /// # Errors
    /// [`SemanticError::StackTooShort`] on an empty stack,
    /// [`SemanticError::TypeMismatch`] if the count is not a number,
    /// [`SemanticError::NonIntegerCount`], [`SemanticError::NegativeCount`]
    /// or [`SemanticError::CountExceedsStack`] otherwise.
    pub fn pop_count(&mut self, operator: &'static str) -> EvalResult<usize> {
        let [count] = self.pop_many::<1>(operator)?;
        let raw = match count {
            Value::Number(raw) => raw,
            other => return Err(type_mismatch(operator, &[other.kind()])),
        };

        let count = f64_to_count(raw).map_err(|e| count_error(operator, raw, e))?;
        let height = self.values.len();
        if count > height {
            return Err(SemanticError::CountExceedsStack { operator, count, height });
        }

        Ok(count)
    }

    /// Removes and returns the top `count` entries in their original order.
    /// Takes the whole stack if `count` exceeds the height.
    pub fn split_top(&mut self, count: usize) -> Vec<Value> {
        let at = self.values.len().saturating_sub(count);
        self.values.split_off(at)
    }

    /// Consumes the stack, returning its only entry.
    ///
    /// # Errors
    /// Returns [`SemanticError::BadStackHeight`] unless exactly one entry
    /// remains.
    pub fn into_single(mut self) -> EvalResult<Value> {
        let height = self.values.len();
        match self.values.pop() {
            Some(value) if height == 1 => Ok(value),
            _ => Err(SemanticError::BadStackHeight { height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Stack {
        let mut stack = Stack::new();
        stack.extend(values.iter().copied().map(Value::Number));
        stack
    }

    #[test]
    fn pop_many_returns_operands_in_stack_order() {
        let mut stack = numbers(&[1.0, 2.0, 3.0]);
        let [left, right] = stack.pop_many::<2>("-").unwrap();

        assert_eq!((left, right), (Value::Number(2.0), Value::Number(3.0)));
        assert_eq!(stack.as_slice(), &[Value::Number(1.0)]);
    }

    #[test]
    fn pop_many_leaves_short_stack_untouched() {
        let mut stack = numbers(&[1.0]);
        let err = stack.pop_many::<2>("+").unwrap_err();

        assert_eq!(err, SemanticError::StackTooShort { operator: "+", height: 1, needed: 2 });
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_count_validates_the_count() {
        assert!(matches!(numbers(&[1.0, 1.5]).pop_count("\\"),
                         Err(SemanticError::NonIntegerCount { .. })));
        assert!(matches!(numbers(&[-1.0]).pop_count("\\"),
                         Err(SemanticError::NegativeCount { .. })));
        assert!(matches!(numbers(&[1.0, 2.0]).pop_count("\\"),
                         Err(SemanticError::CountExceedsStack { count: 2, height: 1, .. })));

        let mut stack = Stack::new();
        stack.push(Value::from("3"));
        assert!(matches!(stack.pop_count("dropn"), Err(SemanticError::TypeMismatch { .. })));
    }

    #[test]
    fn into_single_reports_final_height() {
        assert_eq!(Stack::new().into_single(), Err(SemanticError::BadStackHeight { height: 0 }));
        assert_eq!(numbers(&[1.0, 2.0]).into_single(),
                   Err(SemanticError::BadStackHeight { height: 2 }));
        assert_eq!(numbers(&[4.0]).into_single(), Ok(Value::Number(4.0)));
    }
}
