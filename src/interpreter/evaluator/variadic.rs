use tracing::trace;

use crate::{
    ast::VariadicOperator,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            stack::Stack,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Applies a variadic operator to the whole stack.
    ///
    /// `\`, `dropn` and `topn` first pop a count `n`, which must be a
    /// non-negative integer no larger than the height left below it:
    ///
    /// - `\` packs the top `n` entries, in order, into one list.
    /// - `dropn` discards the top `n` entries.
    /// - `topn` keeps only the top `n` entries.
    ///
    /// `top` keeps only the top entry and `rand` pushes a number drawn
    /// uniformly from `[0, 1)`.
    ///
    /// # Errors
    /// See [`Stack::pop_count`]. `top` fails with
    /// [`SemanticError::StackTooShort`] on an empty stack.
    ///
    /// [`SemanticError::StackTooShort`]: crate::error::SemanticError::StackTooShort
    ///
    /// # Example
    /// ```
    /// use stackto::{
    ///     ast::VariadicOperator,
    ///     interpreter::{
    ///         evaluator::{core::Context, stack::Stack},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut stack = Stack::new();
    /// stack.extend([1.0, 2.0, 3.0, 2.0].map(Value::Number));
    ///
    /// Context::eval_variadic(VariadicOperator::Pack, &mut stack).unwrap();
    /// assert_eq!(stack.as_slice()[1].to_string(), "[2.0, 3.0]");
    /// ```
    pub fn eval_variadic(op: VariadicOperator, stack: &mut Stack) -> EvalResult<()> {
        match op {
            VariadicOperator::Pack => {
                let count = stack.pop_count(op.symbol())?;
                let packed = stack.split_top(count);
                stack.push(Value::from(packed));
            },
            VariadicOperator::DropN => {
                let count = stack.pop_count(op.symbol())?;
                stack.split_top(count);
            },
            VariadicOperator::Top => {
                let [value] = stack.pop_many::<1>(op.symbol())?;
                stack.clear();
                stack.push(value);
            },
            VariadicOperator::TopN => {
                let count = stack.pop_count(op.symbol())?;
                let kept = stack.split_top(count);
                stack.clear();
                stack.extend(kept);
            },
            VariadicOperator::Rand => {
                let drawn = rand::random::<f64>();
                trace!(drawn, "rand");
                stack.push(Value::Number(drawn));
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemanticError;

    fn numbers(values: &[f64]) -> Stack {
        let mut stack = Stack::new();
        stack.extend(values.iter().copied().map(Value::Number));
        stack
    }

    fn run(op: VariadicOperator, values: &[f64]) -> EvalResult<Vec<Value>> {
        let mut stack = numbers(values);
        Context::eval_variadic(op, &mut stack)?;
        Ok(stack.as_slice().to_vec())
    }

    #[test]
    fn pack_keeps_the_rest_of_the_stack() {
        let result = run(VariadicOperator::Pack, &[9.0, 1.0, 2.0, 3.0, 3.0]).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], Value::Number(9.0));
        assert_eq!(result[1].to_string(), "[1.0, 2.0, 3.0]");

        assert_eq!(run(VariadicOperator::Pack, &[0.0]).unwrap(), [Value::from(Vec::new())]);
        assert!(matches!(run(VariadicOperator::Pack, &[1.0, 2.0, 3.0]),
                         Err(SemanticError::CountExceedsStack { count: 3, height: 2, .. })));
    }

    #[test]
    fn drop_and_keep() {
        assert_eq!(run(VariadicOperator::DropN, &[1.0, 2.0, 3.0, 2.0]).unwrap(), [Value::Number(1.0)]);
        assert_eq!(run(VariadicOperator::DropN, &[1.0, 0.0]).unwrap(), [Value::Number(1.0)]);
        assert_eq!(run(VariadicOperator::TopN, &[1.0, 2.0, 3.0, 2.0]).unwrap(),
                   [Value::Number(2.0), Value::Number(3.0)]);
        assert!(run(VariadicOperator::TopN, &[1.0, 0.0]).unwrap().is_empty());
        assert_eq!(run(VariadicOperator::Top, &[1.0, 2.0, 3.0]).unwrap(), [Value::Number(3.0)]);
        assert!(matches!(run(VariadicOperator::Top, &[]),
                         Err(SemanticError::StackTooShort { operator: "top", .. })));
    }

    #[test]
    fn rand_draws_from_unit_interval() {
        for _ in 0..100 {
            let result = run(VariadicOperator::Rand, &[]).unwrap();
            let [Value::Number(n)] = result.as_slice() else {
                panic!("rand pushed {result:?}");
            };
            assert!((0.0..1.0).contains(n));
        }
    }
}
