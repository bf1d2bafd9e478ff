//! # reckon
//!
//! reckon is a restricted arithmetic expression evaluator written in Rust.
//! It parses a single expression made of numeric literals, parentheses and the
//! operators `+ - * / // % **`, and evaluates it with exact integers and
//! IEEE floats. Names, calls, strings and every other construct are rejected
//! while parsing, so untrusted input can never do more than arithmetic.
//!
//! ```
//! use reckon::{Error, calculate, error::ParseError};
//!
//! assert_eq!(calculate("2 + 3 * 4").unwrap().to_string(), "14");
//! assert_eq!(calculate("2 ** 100").unwrap().to_string(),
//!            "1267650600228229401496703205376");
//! assert!(matches!(calculate("__import__('os')"),
//!                  Err(Error::Parse(ParseError::NameNotAllowed { .. }))));
//! ```

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

use tracing::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an arithmetic expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines the three node shapes: literal, unary and binary operation.
/// - Attaches source columns to every node for error reporting.
/// - Renders trees back to fully parenthesised text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Every failure is a value: lexing and parsing produce `ParseError`,
/// evaluation produces `EvalError`, and the numeric operators produce
/// `ArithmeticError`, which the evaluator wraps with the operator's column.
pub mod error;
/// Lexing, parsing, evaluation and the numeric value type.
pub mod interpreter;
/// Line handling for the interactive calculator.
pub mod repl;
/// Numeric formatting and literal helpers.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, parser::parse, value::Number},
};

/// Parses and evaluates `source` in one step.
///
/// Equivalent to `evaluate(&parse(source)?)` with the standard operator table
/// and default nesting limits.
///
/// # Errors
/// Returns [`Error::Parse`] when the text is not a valid arithmetic
/// expression and [`Error::Eval`] when evaluation fails, e.g. on division by
/// zero.
///
/// # Examples
/// ```
/// use reckon::{Error, calculate, error::{ArithmeticError, EvalError}};
///
/// assert_eq!(calculate("-7 // 2").unwrap().to_string(), "-4");
/// assert_eq!(calculate("7 / 2").unwrap().to_string(), "3.5");
///
/// let err = calculate("1 / 0").unwrap_err();
/// assert!(matches!(err,
///                  Error::Eval(EvalError::ArithmeticFailure { cause: ArithmeticError::DivisionByZero,
///                                                             column: 3 })));
/// ```
#[tracing::instrument(level = "debug")]
pub fn calculate(source: &str) -> Result<Number, Error> {
    let tree = parse(source)?;
    let value = evaluate(&tree)?;
    debug!(%value, "evaluated");
    Ok(value)
}
