use std::collections::HashMap;

use crate::{
    error::SemanticError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Variable storage for one program run.
///
/// There is exactly one environment per run: it starts empty, is mutated
/// only by `set` (directly or as an `if` body) and is never scoped or
/// shadowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name, without the `$` sigil.
    ///
    /// # Errors
    /// Returns [`SemanticError::UnknownVariable`] if nothing is bound.
    pub fn get(&self, name: &str) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| SemanticError::UnknownVariable { name: name.to_string() })
    }

    /// Binds or overwrites a variable.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
