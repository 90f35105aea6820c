//! # stackto
//!
//! stackto is an interpreter for StackTo, a minimal language whose programs
//! are `;`-separated statements (`mark`, `goto`, `set`, `output` and
//! `if … then …`) and whose expressions are bracketed reverse Polish token
//! streams reduced on a typed value stack.
//!
//! Loading a program ([`parse_content`]) and running it
//! ([`Context::run`](interpreter::evaluator::core::Context::run)) are
//! separate steps, so external tools can consume the statement sequence
//! without executing it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::evaluator::core::Context;
pub use crate::interpreter::parser::program::parse_content;

/// Defines the parsed form of a program.
///
/// This module declares the operator enums, the `Expression` wrapper, the
/// `Statement` and `IfBody` variants and the immutable `Program` sequence.
/// Statements render back to canonical source text through `Display`.
pub mod ast;
/// Provides the error taxonomy shared by loading and execution.
///
/// Lexical and structural errors are raised while loading, semantic errors
/// only while evaluating. Every error is fatal to the load or run in which
/// it occurs.
pub mod error;
/// Orchestrates tokenizing, parsing and execution.
///
/// # Responsibilities
/// - Splits and classifies expression tokens.
/// - Parses source text into a statement sequence.
/// - Evaluates expressions and runs programs against an input source and an
///   output sink.
pub mod interpreter;
/// Numeric helpers: count conversion and number rendering.
pub mod util;

/// Loads and runs a program.
///
/// `input` feeds the `input` keyword one line at a time and every `output`
/// statement writes one line to `output`.
///
/// # Errors
/// Returns the first lexical, structural, semantic or I/O error. Loading
/// errors, including duplicate marks, are raised before any output is
/// written.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use stackto::run_source;
///
/// let mut input = Cursor::new("world\n");
/// let mut output = Vec::new();
///
/// run_source(r#"set $w input; output [ "hello " $w + ];"#, &mut input, &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "hello world\n");
/// ```
pub fn run_source(source: &str,
                  mut input: impl BufRead,
                  mut output: impl Write)
                  -> error::Result<()> {
    let program = parse_content(source, false)?;
    Context::new(&mut input, &mut output).run(&program)?;
    output.flush()?;
    Ok(())
}
