use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::{error::ArithmeticError, util::num::format_float};

/// A numeric value produced by evaluation.
///
/// Integers are arbitrary precision, so `2 ** 100` is exact. Floats are IEEE
/// 754 doubles. Arithmetic keeps integers as integers for `+ - * // % **`
/// when both operands are integers; everything else, including `/`, yields a
/// float.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An arbitrary precision integer.
    Int(BigInt),
    /// A double precision float.
    Float(f64),
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl Number {
    /// Returns `true` if the value is zero (integer `0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Float(f) => *f == 0.0,
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Integers too large for a finite `f64` fail with
    /// [`ArithmeticError::IntTooLargeForFloat`] instead of silently becoming
    /// infinity.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::Number;
    ///
    /// assert_eq!(Number::from(10).to_f64().unwrap(), 10.0);
    /// assert_eq!(Number::from(2.5).to_f64().unwrap(), 2.5);
    /// ```
    pub fn to_f64(&self) -> Result<f64, ArithmeticError> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(n) => n.to_f64()
                             .filter(|f| f.is_finite())
                             .ok_or(ArithmeticError::IntTooLargeForFloat),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}
