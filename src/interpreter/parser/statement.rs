use crate::{
    ast::{IfBody, Statement},
    error::StructuralError,
    interpreter::parser::{
        core::{ParseResult, parse_expression},
        utils::{as_variable, parse_mark_name, parse_variable_name, split_keyword},
    },
};

const KEYWORDS: [&str; 5] = ["if", "mark", "goto", "set", "output"];

/// Parses one statement fragment, without its `;` terminator.
///
/// Grammar (keywords are case sensitive):
/// ```text
/// statement := "mark" name
///            | "goto" name
///            | "set" varname expr
///            | "output" (varname | expr)
///            | "if" expr "then" (goto | set | output)
/// ```
///
/// # Errors
/// Any [`StructuralError`] or lexical error found in the fragment.
///
/// # Example
/// ```
/// use stackto::{
///     ast::{Expression, IfBody, Statement},
///     interpreter::parser::statement::parse_statement,
/// };
///
/// let statement = parse_statement("if [ $n 0 > ] then goto loop").unwrap();
/// assert_eq!(statement,
///            Statement::If { guard: Expression::Rpn("[ $n 0 > ]".to_string()),
///                            body:  IfBody::Goto("loop".to_string()), });
/// ```
pub fn parse_statement(text: &str) -> ParseResult<Statement> {
    let (keyword, rest) = split_keyword(text);
    if rest.is_empty() && KEYWORDS.contains(&keyword) {
        return Err(missing_argument(keyword, text));
    }

    match keyword {
        "if" => parse_if(rest, text),
        "mark" => Ok(Statement::Mark(parse_mark_name("mark", rest)?)),
        "goto" | "set" | "output" => parse_action(keyword, rest, text).map(Statement::from),
        other if rest.is_empty() => Err(missing_argument(other, text)),
        other => Err(StructuralError::UnknownKeyword { keyword: other.to_string() }.into()),
    }
}

fn parse_if(rest: &str, statement: &str) -> ParseResult<Statement> {
    let (guard, body) =
        split_then(rest).ok_or_else(|| StructuralError::MissingThen { statement: statement.trim().to_string() })?;
    let guard = parse_expression(guard)?;

    let (keyword, rest) = split_keyword(body);
    if keyword.is_empty() {
        return Err(missing_argument("then", statement));
    }

    let body = parse_action(keyword, rest, statement)?;
    Ok(Statement::If { guard, body })
}

/// Parses the statements allowed both at top level and after `then`.
fn parse_action(keyword: &str, rest: &str, statement: &str) -> ParseResult<IfBody> {
    if !matches!(keyword, "goto" | "set" | "output") {
        return Err(StructuralError::ProhibitedIfBody { keyword: keyword.to_string() }.into());
    }
    if rest.is_empty() {
        return Err(missing_argument(keyword, statement));
    }

    match keyword {
        "goto" => Ok(IfBody::Goto(parse_mark_name("goto", rest)?)),
        "set" => {
            let (variable, expr) = split_keyword(rest);
            if expr.is_empty() {
                return Err(missing_argument("set", statement));
            }

            Ok(IfBody::Set { name: parse_variable_name("set", variable)?,
                             expr: parse_expression(expr)?, })
        },
        _ => match as_variable(rest) {
            Some(name) => Ok(IfBody::OutputVar(name.to_string())),
            None => Ok(IfBody::OutputExpr(parse_expression(rest)?)),
        },
    }
}

/// Finds the `then` that ends the guard of an `if`.
///
/// The first `then` counts if the text before it is a complete guard
/// (`input`, or ending with `]`) and it is followed by whitespace or
/// nothing, so `then` may appear inside guard strings.
fn split_then(text: &str) -> Option<(&str, &str)> {
    text.match_indices("then").find_map(|(index, _)| {
                                  let guard = text[..index].trim();
                                  let body = &text[index + "then".len()..];
                                  let complete = guard == "input" || guard.ends_with(']');
                                  let delimited = body.is_empty() || body.starts_with(char::is_whitespace);
                                  (complete && delimited).then_some((guard, body))
                              })
}

fn missing_argument(keyword: &str, statement: &str) -> crate::error::Error {
    StructuralError::MissingArgument { keyword:   keyword.to_string(),
                                       statement: statement.trim().to_string(), }.into()
}
