use tracing::{debug, warn};

use crate::{
    ast::{Program, Statement},
    interpreter::parser::{core::ParseResult, statement::parse_statement},
};

/// One piece of source text after comment extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A comment line, `#` included.
    Comment(String),
    /// Statement text, trimmed and without its `;`.
    Code(String),
    /// Nothing but whitespace between two `;`.
    Empty,
}

/// Splits source text on `;` and extracts comments.
///
/// A fragment starting with `#` is a comment running to the end of its
/// line. When the comment's line holds further `;`, the following
/// fragments are absorbed into the comment until a line break appears; the
/// text after that line break starts the next fragment.
///
/// # Example
/// ```
/// use stackto::interpreter::parser::program::{Fragment, extract_fragments};
///
/// let fragments = extract_fragments("# a; b\nmark x;");
/// assert_eq!(fragments,
///            [Fragment::Comment("# a; b".to_string()),
///             Fragment::Code("mark x".to_string()),
///             Fragment::Empty]);
/// ```
#[must_use]
pub fn extract_fragments(source: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut pieces = source.split(';');
    let mut carried: Option<String> = None;

    while let Some(text) = carried.take().or_else(|| pieces.next().map(str::to_string)) {
        let text = text.trim_start();
        if !text.starts_with('#') {
            let code = text.trim_end();
            fragments.push(if code.is_empty() { Fragment::Empty } else { Fragment::Code(code.to_string()) });
            continue;
        }

        let mut comment = text.to_string();
        while !comment.contains('\n')
              && let Some(piece) = pieces.next()
        {
            comment.push(';');
            comment.push_str(piece);
        }

        match comment.split_once('\n') {
            Some((line, rest)) => {
                fragments.push(Fragment::Comment(line.trim_end().to_string()));
                if !rest.trim().is_empty() {
                    carried = Some(rest.to_string());
                }
            },
            None => fragments.push(Fragment::Comment(comment.trim_end().to_string())),
        }
    }

    fragments
}

/// Parses extracted fragments into a program.
///
/// Comments are kept only if `include_comments` is set. An empty fragment
/// in the middle of the source is reported as a warning and skipped; an
/// empty last fragment, left by the final `;`, ends the program.
///
/// # Errors
/// The first error raised by [`parse_statement`].
pub fn parse_fragments(fragments: &[Fragment], include_comments: bool) -> ParseResult<Program> {
    let mut statements = Vec::new();

    for (index, fragment) in fragments.iter().enumerate() {
        match fragment {
            Fragment::Comment(text) => {
                if include_comments {
                    statements.push(Statement::Comment(text.clone()));
                }
            },
            Fragment::Code(text) => statements.push(parse_statement(text)?),
            Fragment::Empty if index + 1 == fragments.len() => break,
            Fragment::Empty => {
                warn!(previous = ?index.checked_sub(1), next = index + 1,
                      "empty statement detected between statements");
            },
        }
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program::new(statements))
}

/// Loads source text into the statement sequence consumed by execution and
/// by external tools.
///
/// # Errors
/// Any structural or lexical error in the source.
///
/// # Example
/// ```
/// use stackto::{ast::Statement, parse_content};
///
/// let program = parse_content("#! demo\nmark top; goto top;", true).unwrap();
/// assert_eq!(program.statements(),
///            [Statement::Comment("#! demo".to_string()),
///             Statement::Mark("top".to_string()),
///             Statement::Goto("top".to_string())]);
/// ```
pub fn parse_content(source: &str, include_comments: bool) -> ParseResult<Program> {
    parse_fragments(&extract_fragments(source), include_comments)
}
