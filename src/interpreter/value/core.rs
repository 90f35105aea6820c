use std::{fmt, rc::Rc};

use crate::util::num::format_number;

/// The four kinds a [`Value`] can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t` / `f`
    Bool,
    /// Double precision numbers.
    Number,
    /// Text.
    String,
    /// Ordered, possibly nested, sequences of values.
    List,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Bool, Self::Number, Self::String, Self::List];

    /// Returns the name `type` pushes and output tags show.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a runtime value in the interpreter.
///
/// Every value carries its kind. Operators check kinds before acting and
/// never coerce implicitly; only `num` and `str` convert.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// A list of values. Lists may contain lists.
    List(Rc<Vec<Self>>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Returns the kind tag of the value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::List(_) => Kind::List,
        }
    }

    /// Renders the value the way `output` prints it.
    ///
    /// Strings print as their raw text; every other kind prints as a tagged
    /// `<kind : value>` rendering.
    ///
    /// # Example
    /// ```
    /// use stackto::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(3.0).render_output(), "<number : 3.0>");
    /// assert_eq!(Value::from("ab").render_output(), "ab");
    /// assert_eq!(Value::Bool(true).render_output(), "<bool : True>");
    /// ```
    #[must_use]
    pub fn render_output(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => format!("<{} : {other}>", other.kind()),
        }
    }
}

/// The string form of a value, as produced by `str`.
///
/// Numbers keep a trailing `.0` when integral, bools print as `True` and
/// `False`, strings print raw and lists print as `[e1, e2, ...]` using each
/// element's own string form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_requires_matching_kinds() {
        assert_eq!(Value::Number(1.0), Value::Number(1.0));
        assert_ne!(Value::Number(1.0), Value::from("1.0"));
        assert_ne!(Value::Bool(true), Value::Number(1.0));
        assert_eq!(Value::from(vec![Value::Number(1.0)]), Value::from(vec![Value::Number(1.0)]));
    }

    #[test]
    fn nested_lists_render_recursively() {
        let inner = Value::from(vec![Value::from("a"), Value::Bool(false)]);
        let outer = Value::from(vec![Value::Number(1.0), inner]);

        assert_eq!(outer.to_string(), "[1.0, [a, False]]");
        assert_eq!(outer.render_output(), "<list : [1.0, [a, False]]>");
        assert_eq!(Value::from(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn kind_names() {
        let names: Vec<_> = Kind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["bool", "number", "string", "list"]);
    }
}
