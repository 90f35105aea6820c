use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{divide, floor_divide, modulo, repeat},
                sequence::{append, concat, nth, split},
            },
            core::{Context, EvalResult, type_mismatch},
            stack::Stack,
        },
        value::core::{Kind, Value},
    },
};

const NUMBERS: &[(Kind, Kind)] = &[(Kind::Number, Kind::Number)];
const BOOLS: &[(Kind, Kind)] = &[(Kind::Bool, Kind::Bool)];
const ADD: &[(Kind, Kind)] = &[(Kind::Number, Kind::Number), (Kind::String, Kind::String)];
const MUL: &[(Kind, Kind)] = &[(Kind::Number, Kind::Number), (Kind::String, Kind::Number)];
const CONCAT: &[(Kind, Kind)] = &[(Kind::List, Kind::List)];
const NTH: &[(Kind, Kind)] = &[(Kind::List, Kind::Number)];
const SPLIT: &[(Kind, Kind)] = &[(Kind::String, Kind::String)];

/// `(List, k)` for every kind `k`.
const LIST_ANY: [(Kind, Kind); 4] = {
    let mut pairs = [(Kind::List, Kind::Bool); 4];
    let mut i = 0;
    while i < Kind::ALL.len() {
        pairs[i] = (Kind::List, Kind::ALL[i]);
        i += 1;
    }
    pairs
};

/// Every ordered pair of kinds.
const ANY_PAIR: [(Kind, Kind); 16] = {
    let mut pairs = [(Kind::Bool, Kind::Bool); 16];
    let mut i = 0;
    while i < pairs.len() {
        pairs[i] = (Kind::ALL[i / 4], Kind::ALL[i % 4]);
        i += 1;
    }
    pairs
};

impl BinaryOperator {
    /// The `(left, right)` operand kinds this operator admits.
    #[must_use]
    pub const fn signature(self) -> &'static [(Kind, Kind)] {
        match self {
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Sub
            | Self::Div
            | Self::FloorDiv
            | Self::Mod
            | Self::Min
            | Self::Max => NUMBERS,
            Self::Equal | Self::NotEqual | Self::Swap => &ANY_PAIR,
            Self::And | Self::Xor | Self::Or => BOOLS,
            Self::Add => ADD,
            Self::Mul => MUL,
            Self::Concat => CONCAT,
            Self::Append => &LIST_ANY,
            Self::Nth => NTH,
            Self::Split => SPLIT,
        }
    }

    /// Returns `true` if the operand-kind pair is in the operator's
    /// signature.
    #[must_use]
    pub fn accepts(self, left: Kind, right: Kind) -> bool {
        self.signature().contains(&(left, right))
    }
}

impl Context<'_> {
    /// Pops two operands, applies a binary operator and pushes the result.
    ///
    /// The first value popped is the right-hand operand. Every operator
    /// pushes exactly one value except `swap`, which pushes both operands
    /// back in reverse order.
    ///
    /// # Errors
    /// - [`SemanticError::StackTooShort`] with fewer than two entries.
    /// - [`SemanticError::TypeMismatch`] if the operand kinds are not in
    ///   [`BinaryOperator::signature`].
    /// - Operator specific failures such as [`SemanticError::DivisionByZero`]
    ///   or [`SemanticError::IndexOutOfRange`].
    ///
    /// [`SemanticError::StackTooShort`]: crate::error::SemanticError::StackTooShort
    /// [`SemanticError::TypeMismatch`]: crate::error::SemanticError::TypeMismatch
    /// [`SemanticError::DivisionByZero`]: crate::error::SemanticError::DivisionByZero
    /// [`SemanticError::IndexOutOfRange`]: crate::error::SemanticError::IndexOutOfRange
    ///
    /// # Example
    /// ```
    /// use stackto::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::{core::Context, stack::Stack},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut stack = Stack::new();
    /// stack.extend([Value::Number(7.0), Value::Number(2.0)]);
    ///
    /// Context::eval_binary(BinaryOperator::Sub, &mut stack).unwrap();
    /// assert_eq!(stack.as_slice(), &[Value::Number(5.0)]);
    /// ```
    pub fn eval_binary(op: BinaryOperator, stack: &mut Stack) -> EvalResult<()> {
        use BinaryOperator as B;
        use Value::{Bool, List, Number};

        let [left, right] = stack.pop_many::<2>(op.symbol())?;
        if !op.accepts(left.kind(), right.kind()) {
            return Err(type_mismatch(op.symbol(), &[left.kind(), right.kind()]));
        }

        if op == B::Swap {
            stack.extend([right, left]);
            return Ok(());
        }

        let result = match (op, left, right) {
            (B::Less, Number(a), Number(b)) => Bool(a < b),
            (B::Greater, Number(a), Number(b)) => Bool(a > b),
            (B::LessEqual, Number(a), Number(b)) => Bool(a <= b),
            (B::GreaterEqual, Number(a), Number(b)) => Bool(a >= b),
            (B::Equal, a, b) => Bool(a == b),
            (B::NotEqual, a, b) => Bool(a != b),

            (B::And, Bool(a), Bool(b)) => Bool(a && b),
            (B::Xor, Bool(a), Bool(b)) => Bool(a ^ b),
            (B::Or, Bool(a), Bool(b)) => Bool(a || b),

            (B::Add, Number(a), Number(b)) => Number(a + b),
            (B::Add, Value::String(a), Value::String(b)) => Value::String(a + &b),
            (B::Sub, Number(a), Number(b)) => Number(a - b),
            (B::Mul, Number(a), Number(b)) => Number(a * b),
            (B::Mul, Value::String(s), Number(n)) => Value::String(repeat(&s, n)?),
            (B::Div, Number(a), Number(b)) => Number(divide(a, b)?),
            (B::FloorDiv, Number(a), Number(b)) => Number(floor_divide(a, b)?),
            (B::Mod, Number(a), Number(b)) => Number(modulo(a, b)?),
            (B::Min, Number(a), Number(b)) => Number(a.min(b)),
            (B::Max, Number(a), Number(b)) => Number(a.max(b)),

            (B::Concat, List(a), List(b)) => concat(a, &b),
            (B::Append, List(items), item) => append(items, item),
            (B::Nth, List(items), Number(index)) => nth(&items, index)?,
            (B::Split, Value::String(s), Value::String(sep)) => split(&s, &sep)?,

            (op, left, right) => {
                return Err(type_mismatch(op.symbol(), &[left.kind(), right.kind()]));
            },
        };

        stack.push(result);
        Ok(())
    }
}
