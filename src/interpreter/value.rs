/// Numeric operator functions.
///
/// One function per arithmetic operator, each taking borrowed operands and
/// returning a fresh [`Number`] or an
/// [`ArithmeticError`](crate::error::ArithmeticError). These are the entries
/// of the evaluator's operator tables.
pub mod arith;

/// The numeric value type.
///
/// Defines [`Number`], the integer/float numeric tower, together with its
/// conversions and display format.
pub mod core;

pub use self::core::Number;
