use std::fmt;

/// Operators that pop exactly one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `#`: length of a list.
    Length,
    /// `~`: numeric negation.
    Negate,
    /// `!`: boolean negation.
    Not,
    /// `?`: truthiness of a bool, number or string.
    Truthy,
    /// `num`: explicit conversion to a number.
    ToNumber,
    /// `str`: explicit conversion to a string.
    ToString,
    /// `dup`: duplicate the top entry.
    Dup,
    /// `drop`: discard the top entry.
    Drop,
    /// `round`: round half to even.
    Round,
    /// `sum`: sum of a list of numbers.
    Sum,
    /// `prod`: product of a list of numbers.
    Product,
    /// `type`: name of the operand's kind.
    TypeName,
    /// `splat`: push every element of a list.
    Splat,
}

impl UnaryOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "#",
            Self::Negate => "~",
            Self::Not => "!",
            Self::Truthy => "?",
            Self::ToNumber => "num",
            Self::ToString => "str",
            Self::Dup => "dup",
            Self::Drop => "drop",
            Self::Round => "round",
            Self::Sum => "sum",
            Self::Product => "prod",
            Self::TypeName => "type",
            Self::Splat => "splat",
        }
    }
}

/// Operators that pop exactly two operands. The first operand popped is the
/// right-hand one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `=` or `==`
    Equal,
    /// `!=` or `<>`
    NotEqual,
    /// `&`
    And,
    /// `^`
    Xor,
    /// `|`
    Or,
    /// `+`: addition or string concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`: multiplication or string repetition.
    Mul,
    /// `/`
    Div,
    /// `//`: floor division.
    FloorDiv,
    /// `%`: floored modulo.
    Mod,
    /// `@`: list concatenation.
    Concat,
    /// `:`: append an element to a list.
    Append,
    /// `swap`
    Swap,
    /// `nth`: list element at an index.
    Nth,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `split`: split a string on a separator.
    Split,
}

impl BinaryOperator {
    /// Returns the operator's canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Xor => "^",
            Self::Or => "|",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Concat => "@",
            Self::Append => ":",
            Self::Swap => "swap",
            Self::Nth => "nth",
            Self::Min => "min",
            Self::Max => "max",
            Self::Split => "split",
        }
    }
}

/// Operators that pop exactly three operands.
///
/// The table is reserved and currently empty, so no token ever classifies as
/// a ternary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TernaryOperator {}

impl TernaryOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {}
    }
}

/// Operators whose operand count is decided at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariadicOperator {
    /// `\`: pack the top N entries into a list.
    Pack,
    /// `dropn`: discard the top N entries.
    DropN,
    /// `top`: keep only the top entry.
    Top,
    /// `topn`: keep only the top N entries.
    TopN,
    /// `rand`: push a random number in `[0, 1)`.
    Rand,
}

impl VariadicOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pack => "\\",
            Self::DropN => "dropn",
            Self::Top => "top",
            Self::TopN => "topn",
            Self::Rand => "rand",
        }
    }
}

/// A validated expression.
///
/// Only the source text is kept: evaluation re-tokenizes it every time
/// control reaches it, because `input` and `rand` have effects per
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// The bare `input` keyword: one line read from the input source.
    Input,
    /// Bracket-delimited RPN text, brackets included.
    Rpn(String),
}

impl Expression {
    /// Returns the text between the brackets, or `None` for `input`.
    #[must_use]
    pub fn interior(&self) -> Option<&str> {
        match self {
            Self::Input => None,
            Self::Rpn(text) => text.strip_prefix('[').and_then(|t| t.strip_suffix(']')),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Rpn(text) => write!(f, "{text}"),
        }
    }
}

/// The statements allowed after `then`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfBody {
    /// `goto name`
    Goto(String),
    /// `set $name expr`
    Set {
        /// Variable name without the `$` sigil.
        name: String,
        /// The value to bind.
        expr: Expression,
    },
    /// `output $name`
    OutputVar(String),
    /// `output expr`
    OutputExpr(Expression),
}

impl fmt::Display for IfBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goto(mark) => write!(f, "goto {mark}"),
            Self::Set { name, expr } => write!(f, "set ${name} {expr}"),
            Self::OutputVar(name) => write!(f, "output ${name}"),
            Self::OutputExpr(expr) => write!(f, "output {expr}"),
        }
    }
}

/// A single parsed statement. Its index in the [`Program`] is its execution
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A retained comment, `#` included.
    Comment(String),
    /// `mark name`: a jump target.
    Mark(String),
    /// `goto name`: an unconditional jump.
    Goto(String),
    /// `set $name expr`
    Set {
        /// Variable name without the `$` sigil.
        name: String,
        /// The value to bind.
        expr: Expression,
    },
    /// `output $name`
    OutputVar(String),
    /// `output expr`
    OutputExpr(Expression),
    /// `if guard then body`
    If {
        /// Must evaluate to a bool.
        guard: Expression,
        /// Applied only when the guard is true.
        body:  IfBody,
    },
}

impl From<IfBody> for Statement {
    fn from(body: IfBody) -> Self {
        match body {
            IfBody::Goto(mark) => Self::Goto(mark),
            IfBody::Set { name, expr } => Self::Set { name, expr },
            IfBody::OutputVar(name) => Self::OutputVar(name),
            IfBody::OutputExpr(expr) => Self::OutputExpr(expr),
        }
    }
}

/// Renders the canonical source form. Comments render without a terminator
/// since they run to the end of their line.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "{text}"),
            Self::Mark(mark) => write!(f, "mark {mark};"),
            Self::Goto(mark) => write!(f, "goto {mark};"),
            Self::Set { name, expr } => write!(f, "set ${name} {expr};"),
            Self::OutputVar(name) => write!(f, "output ${name};"),
            Self::OutputExpr(expr) => write!(f, "output {expr};"),
            Self::If { guard, body } => write!(f, "if {guard} then {body};"),
        }
    }
}

/// An ordered, immutable statement sequence.
///
/// This is the artifact handed to external consumers such as renderers and
/// highlighters; it carries no execution state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Wraps an already parsed statement sequence.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns the statements in execution order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Returns the statement at an execution address.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type IntoIter = std::slice::Iter<'a, Statement>;
    type Item = &'a Statement;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
