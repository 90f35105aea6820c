use std::rc::Rc;

use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::core::{EvalResult, count_error},
        value::core::Value,
    },
    util::num::f64_to_count,
};

/// `@`: the elements of `left` followed by the elements of `right`.
pub fn concat(left: Rc<Vec<Value>>, right: &[Value]) -> Value {
    let mut items = Rc::unwrap_or_clone(left);
    items.extend_from_slice(right);
    Value::from(items)
}

/// `:`: `items` with `item` added at the end.
pub fn append(items: Rc<Vec<Value>>, item: Value) -> Value {
    let mut items = Rc::unwrap_or_clone(items);
    items.push(item);
    Value::from(items)
}

/// `nth`: the element at a zero-based index.
///
/// # Errors
/// [`SemanticError::NonIntegerCount`] or [`SemanticError::NegativeCount`]
/// for a malformed index, [`SemanticError::IndexOutOfRange`] past the end.
pub fn nth(items: &[Value], index: f64) -> EvalResult<Value> {
    let index = f64_to_count(index).map_err(|e| count_error("nth", index, e))?;
    items.get(index)
         .cloned()
         .ok_or(SemanticError::IndexOutOfRange { index, length: items.len() })
}

/// `split`: the fragments of `text` between occurrences of `separator`.
///
/// # Errors
/// [`SemanticError::EmptySeparator`] if `separator` is empty.
///
/// # Example
/// ```
/// use stackto::interpreter::{evaluator::binary::sequence::split, value::core::Value};
///
/// let parts = split("a,,b", ",").unwrap();
/// assert_eq!(parts.to_string(), "[a, , b]");
/// ```
pub fn split(text: &str, separator: &str) -> EvalResult<Value> {
    if separator.is_empty() {
        return Err(SemanticError::EmptySeparator);
    }

    Ok(Value::from(text.split(separator).map(Value::from).collect::<Vec<_>>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn concat_and_append_leave_shared_lists_alone() {
        let shared = Rc::new(numbers(&[1.0]));
        let joined = concat(Rc::clone(&shared), &numbers(&[2.0, 3.0]));
        let grown = append(Rc::clone(&shared), Value::from("x"));

        assert_eq!(joined, Value::from(numbers(&[1.0, 2.0, 3.0])));
        assert_eq!(grown.to_string(), "[1.0, x]");
        assert_eq!(*shared, numbers(&[1.0]));
    }

    #[test]
    fn nth_bounds() {
        let items = numbers(&[10.0, 20.0]);

        assert_eq!(nth(&items, 1.0), Ok(Value::Number(20.0)));
        assert_eq!(nth(&items, 2.0), Err(SemanticError::IndexOutOfRange { index: 2, length: 2 }));
        assert!(matches!(nth(&items, -1.0), Err(SemanticError::NegativeCount { .. })));
        assert!(matches!(nth(&items, 0.5), Err(SemanticError::NonIntegerCount { .. })));
    }

    #[test]
    fn split_fragments() {
        assert_eq!(split("a b", " ").unwrap(), Value::from(vec![Value::from("a"), Value::from("b")]));
        assert_eq!(split("", "-").unwrap(), Value::from(vec![Value::from("")]));
        assert_eq!(split("abc", ""), Err(SemanticError::EmptySeparator));
    }
}
