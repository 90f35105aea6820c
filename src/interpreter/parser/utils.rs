use crate::error::StructuralError;

/// Returns `true` if `text` is an ASCII letter followed by letters, digits
/// or underscores. Marks and variables share this grammar.
///
/// # Example
/// ```
/// use stackto::interpreter::parser::utils::is_identifier;
///
/// assert!(is_identifier("loop_2"));
/// assert!(!is_identifier("2loop"));
/// assert!(!is_identifier("_x"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the name of a `$`-prefixed variable, or `None`.
#[must_use]
pub fn as_variable(text: &str) -> Option<&str> {
    text.strip_prefix('$').filter(|name| is_identifier(name))
}

/// Validates the target of `mark` or `goto`.
///
/// # Errors
/// [`StructuralError::InvalidMarkName`] if `text` is not an identifier.
pub fn parse_mark_name(keyword: &'static str, text: &str) -> Result<String, StructuralError> {
    if is_identifier(text) {
        Ok(text.to_string())
    } else {
        Err(StructuralError::InvalidMarkName { keyword, name: text.to_string() })
    }
}

/// Validates a `$`-prefixed variable and returns its bare name.
///
/// # Errors
/// [`StructuralError::InvalidVariableName`] if `text` is not `$` followed
/// by an identifier.
pub fn parse_variable_name(keyword: &'static str, text: &str) -> Result<String, StructuralError> {
    as_variable(text).map(str::to_string)
                     .ok_or_else(|| StructuralError::InvalidVariableName { keyword,
                                                                           name: text.to_string() })
}

/// Splits off the first whitespace-delimited word. The remainder is
/// trimmed and may be empty.
#[must_use]
pub fn split_keyword(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_split() {
        assert_eq!(split_keyword("  set $x\t[ 1 ] "), ("set", "$x\t[ 1 ]"));
        assert_eq!(split_keyword("goto"), ("goto", ""));
        assert_eq!(split_keyword(""), ("", ""));
    }

    #[test]
    fn names() {
        assert_eq!(as_variable("$count"), Some("count"));
        assert_eq!(as_variable("count"), None);
        assert_eq!(as_variable("$"), None);
        assert_eq!(parse_variable_name("set", "$a_1"), Ok("a_1".to_string()));
        assert_eq!(parse_mark_name("goto", "a-b"),
                   Err(StructuralError::InvalidMarkName { keyword: "goto",
                                                          name:    "a-b".to_string(), }));
    }
}
