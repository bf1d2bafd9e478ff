/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors cover syntax mistakes, malformed literals and every
/// construct outside the arithmetic grammar (names, strings, comparisons),
/// all detected before a tree exists.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types raised while walking a tree: unsupported node or
/// operator kinds and arithmetic faults such as division by zero.
pub mod eval_error;

pub use eval_error::{ArithmeticError, EvalError};
pub use parse_error::ParseError;

/// Any failure of the parse-and-evaluate pipeline.
///
/// Returned by [`calculate`](crate::calculate); both stages convert into it
/// with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text is not a valid arithmetic expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
