use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::{
    error::ArithmeticError,
    interpreter::value::Number,
    util::num::{float_divmod, scale_by_power_of_two},
};

/// Signature of every binary operator function.
pub type BinaryFn = fn(&Number, &Number) -> ArithResult;
/// Signature of every unary operator function.
pub type UnaryFn = fn(&Number) -> ArithResult;
/// Result type of the operator functions.
pub type ArithResult = Result<Number, ArithmeticError>;

/// Exact integer powers whose result would need more bits than this are
/// refused instead of exhausting memory.
pub const MAX_POW_BITS: u64 = 1_000_000;

/// Operands after numeric-tower promotion.
enum Operands<'a> {
    Ints(&'a BigInt, &'a BigInt),
    Floats(f64, f64),
}

/// Keeps two integers as integers; otherwise converts both sides to floats.
fn promote<'a>(left: &'a Number, right: &'a Number) -> Result<Operands<'a>, ArithmeticError> {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => Ok(Operands::Ints(a, b)),
        _ => Ok(Operands::Floats(left.to_f64()?, right.to_f64()?)),
    }
}

/// `left + right`
///
/// # Example
/// ```
/// use reckon::interpreter::value::{Number, arith::add};
///
/// assert_eq!(add(&Number::from(3), &Number::from(4)).unwrap(), Number::from(7));
/// assert_eq!(add(&Number::from(3), &Number::from(0.5)).unwrap(), Number::from(3.5));
/// ```
pub fn add(left: &Number, right: &Number) -> ArithResult {
    Ok(match promote(left, right)? {
        Operands::Ints(a, b) => Number::Int(a + b),
        Operands::Floats(a, b) => Number::Float(a + b),
    })
}

/// `left - right`
pub fn sub(left: &Number, right: &Number) -> ArithResult {
    Ok(match promote(left, right)? {
        Operands::Ints(a, b) => Number::Int(a - b),
        Operands::Floats(a, b) => Number::Float(a - b),
    })
}

/// `left * right`
pub fn mul(left: &Number, right: &Number) -> ArithResult {
    Ok(match promote(left, right)? {
        Operands::Ints(a, b) => Number::Int(a * b),
        Operands::Floats(a, b) => Number::Float(a * b),
    })
}

/// `left / right`, always a float.
///
/// Two integers are divided exactly and rounded once, so operands beyond the
/// `f64` range still give a result when their quotient fits.
///
/// # Example
/// ```
/// use reckon::{
///     error::ArithmeticError,
///     interpreter::value::{Number, arith::true_div},
/// };
///
/// assert_eq!(true_div(&Number::from(7), &Number::from(2)).unwrap(), Number::from(3.5));
/// assert_eq!(true_div(&Number::from(1), &Number::from(0)),
///            Err(ArithmeticError::DivisionByZero));
/// ```
pub fn true_div(left: &Number, right: &Number) -> ArithResult {
    if right.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => int_true_div(a, b),
        _ => Ok(Number::Float(left.to_f64()? / right.to_f64()?)),
    }
}

/// Significant bits kept in the scaled integer quotient before rounding.
const QUOTIENT_BITS: u64 = 64;

/// Correctly rounded `a / b` for integers of any size. `b` is non-zero.
///
/// Operands that are exact as `f64` divide directly. Otherwise the dividend is
/// shifted so the integer quotient has at least 64 bits, a non-zero remainder
/// is folded into the lowest bit, and the result is rounded and scaled back.
fn int_true_div(a: &BigInt, b: &BigInt) -> ArithResult {
    let exact_bits = u64::from(f64::MANTISSA_DIGITS);
    if a.bits() <= exact_bits
       && b.bits() <= exact_bits
       && let (Some(x), Some(y)) = (a.to_f64(), b.to_f64())
    {
        return Ok(Number::Float(x / y));
    }

    let negative = (a.sign() == Sign::Minus) != (b.sign() == Sign::Minus);
    let (a, b) = (a.magnitude(), b.magnitude());

    let target = b.bits() + QUOTIENT_BITS;
    let ((quotient, remainder), exponent) = if a.bits() <= target {
        let shift = target - a.bits();
        ((a << shift).div_rem(b), -i64::try_from(shift).unwrap_or(i64::MAX))
    } else {
        let shift = a.bits() - target;
        (a.div_rem(&(b << shift)), i64::try_from(shift).unwrap_or(i64::MAX))
    };
    let quotient = if remainder.is_zero() { quotient } else { quotient | BigUint::one() };

    let magnitude = scale_by_power_of_two(quotient.to_f64().unwrap_or(f64::INFINITY), exponent);
    if magnitude.is_infinite() {
        return Err(ArithmeticError::Overflow("integer division result too large for a float"));
    }
    Ok(Number::Float(if negative { -magnitude } else { magnitude }))
}

/// `left // right`: the quotient rounded toward negative infinity.
pub fn floor_div(left: &Number, right: &Number) -> ArithResult {
    if right.is_zero() {
        return Err(ArithmeticError::FloorDivisionByZero);
    }
    Ok(match promote(left, right)? {
        Operands::Ints(a, b) => Number::Int(a.div_floor(b)),
        Operands::Floats(a, b) => Number::Float(float_divmod(a, b).0),
    })
}

/// `left % right`: the remainder takes the sign of the divisor.
///
/// # Example
/// ```
/// use reckon::interpreter::value::{Number, arith::modulo};
///
/// assert_eq!(modulo(&Number::from(-7), &Number::from(2)).unwrap(), Number::from(1));
/// assert_eq!(modulo(&Number::from(7), &Number::from(-2)).unwrap(), Number::from(-1));
/// ```
pub fn modulo(left: &Number, right: &Number) -> ArithResult {
    if right.is_zero() {
        return Err(ArithmeticError::ModuloByZero);
    }
    Ok(match promote(left, right)? {
        Operands::Ints(a, b) => Number::Int(a.mod_floor(b)),
        Operands::Floats(a, b) => Number::Float(float_divmod(a, b).1),
    })
}

/// `base ** exponent`
///
/// Integer bases with non-negative integer exponents are computed exactly.
/// A negative integer exponent, or any float operand, produces a float.
///
/// # Example
/// ```
/// use reckon::interpreter::value::{Number, arith::pow};
///
/// assert_eq!(pow(&Number::from(2), &Number::from(10)).unwrap(), Number::from(1024));
/// assert_eq!(pow(&Number::from(2), &Number::from(-1)).unwrap(), Number::from(0.5));
/// assert_eq!(pow(&Number::from(9), &Number::from(0.5)).unwrap(), Number::from(3.0));
/// ```
pub fn pow(base: &Number, exponent: &Number) -> ArithResult {
    match (base, exponent) {
        (Number::Int(b), Number::Int(e)) if e.sign() != Sign::Minus => int_pow(b, e),
        _ => float_pow(base.to_f64()?, exponent.to_f64()?),
    }
}

fn int_pow(base: &BigInt, exponent: &BigInt) -> ArithResult {
    if exponent.is_zero() {
        return Ok(Number::Int(BigInt::one()));
    }
    if base.is_zero() || base.is_one() {
        return Ok(Number::Int(base.clone()));
    }
    if base == &BigInt::from(-1) {
        let value = if exponent.is_even() { BigInt::one() } else { base.clone() };
        return Ok(Number::Int(value));
    }

    let bits = exponent.to_u64()
                       .map_or(u64::MAX, |e| base.bits().saturating_mul(e));
    if bits > MAX_POW_BITS {
        return Err(ArithmeticError::Overflow("integer power too large"));
    }
    let exponent = exponent.to_u32()
                           .ok_or(ArithmeticError::Overflow("integer power too large"))?;
    Ok(Number::Int(base.pow(exponent)))
}

fn float_pow(base: f64, exponent: f64) -> ArithResult {
    if exponent == 0.0 || base == 1.0 {
        return Ok(Number::Float(1.0));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(ArithmeticError::ZeroToNegativePower);
    }
    if base.is_finite() && base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(ArithmeticError::ComplexResult);
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(ArithmeticError::Overflow("float power out of range"));
    }
    Ok(Number::Float(result))
}

/// `+operand`
#[allow(clippy::unnecessary_wraps)]
pub fn pos(operand: &Number) -> ArithResult {
    Ok(operand.clone())
}

/// `-operand`
#[allow(clippy::unnecessary_wraps)]
pub fn neg(operand: &Number) -> ArithResult {
    Ok(match operand {
        Number::Int(n) => Number::Int(-n),
        Number::Float(f) => Number::Float(-f),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Number {
        Number::from(v)
    }

    fn float(v: f64) -> Number {
        Number::from(v)
    }

    #[test]
    fn integer_results_stay_integers() {
        assert_eq!(sub(&int(2), &int(5)).unwrap(), int(-3));
        assert_eq!(mul(&int(6), &int(7)).unwrap(), int(42));
        assert_eq!(floor_div(&int(7), &int(2)).unwrap(), int(3));
        assert_eq!(floor_div(&int(-7), &int(2)).unwrap(), int(-4));
        assert_eq!(true_div(&int(4), &int(2)).unwrap(), float(2.0));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(mul(&int(2), &float(1.5)).unwrap(), float(3.0));
        assert_eq!(floor_div(&float(7.5), &int(2)).unwrap(), float(3.0));
        assert_eq!(modulo(&float(-7.5), &int(2)).unwrap(), float(0.5));
    }

    #[test]
    fn integer_division_beyond_float_range() {
        let big = |base: i64, exponent: u32| Number::Int(BigInt::from(base).pow(exponent));

        assert_eq!(true_div(&big(10, 400), &big(10, 399)).unwrap(), float(10.0));
        assert_eq!(true_div(&big(10, 400), &big(10, 401)).unwrap(), float(0.1));
        assert_eq!(true_div(&neg(&big(2, 100)).unwrap(), &big(2, 99)).unwrap(),
                   float(-2.0));
        assert_eq!(true_div(&int(1), &big(10, 400)).unwrap(), float(0.0));
        assert!(matches!(true_div(&big(10, 400), &int(1)),
                         Err(ArithmeticError::Overflow(_))));
        assert_eq!(true_div(&big(10, 400), &float(1.0)),
                   Err(ArithmeticError::IntTooLargeForFloat));
    }

    #[test]
    fn integer_division_rounds_once() {
        let two_53 = BigInt::from(2).pow(53);
        let plus = |n: i64| Number::Int(&two_53 + n);

        assert_eq!(true_div(&int(1), &int(3)).unwrap(), float(1.0 / 3.0));
        assert_eq!(true_div(&plus(1), &int(1)).unwrap(), float(9_007_199_254_740_992.0));
        assert_eq!(true_div(&plus(3), &int(1)).unwrap(), float(9_007_199_254_740_996.0));
        assert_eq!(true_div(&plus(3), &int(-2)).unwrap(), float(-4_503_599_627_370_498.0));
    }

    #[test]
    fn zero_divisors_fail_per_operator() {
        assert_eq!(true_div(&float(1.0), &float(0.0)),
                   Err(ArithmeticError::DivisionByZero));
        assert_eq!(floor_div(&int(1), &int(0)),
                   Err(ArithmeticError::FloorDivisionByZero));
        assert_eq!(floor_div(&float(1.0), &float(-0.0)),
                   Err(ArithmeticError::FloorDivisionByZero));
        assert_eq!(modulo(&int(1), &int(0)), Err(ArithmeticError::ModuloByZero));
    }

    #[test]
    fn pow_edge_cases() {
        assert_eq!(pow(&int(0), &int(0)).unwrap(), int(1));
        assert_eq!(pow(&int(-1), &int(1_000_000_001)).unwrap(), int(-1));
        assert_eq!(pow(&int(0), &int(-1)), Err(ArithmeticError::ZeroToNegativePower));
        assert_eq!(pow(&float(0.0), &float(-0.5)),
                   Err(ArithmeticError::ZeroToNegativePower));
        assert_eq!(pow(&int(-8), &float(0.5)), Err(ArithmeticError::ComplexResult));
        assert_eq!(pow(&int(-2), &int(-1)).unwrap(), float(-0.5));
        assert_eq!(pow(&float(-2.0), &float(2.0)).unwrap(), float(4.0));
        assert!(matches!(pow(&float(10.0), &float(400.0)),
                         Err(ArithmeticError::Overflow(_))));
        assert!(matches!(pow(&int(2), &int(10_000_000)),
                         Err(ArithmeticError::Overflow(_))));
    }

    #[test]
    fn exact_big_powers() {
        let expected: BigInt = "1267650600228229401496703205376".parse().unwrap();
        assert_eq!(pow(&int(2), &int(100)).unwrap(), Number::Int(expected));
    }

    #[test]
    fn unary_functions() {
        assert_eq!(neg(&int(5)).unwrap(), int(-5));
        assert_eq!(neg(&float(-2.5)).unwrap(), float(2.5));
        assert_eq!(pos(&float(1.5)).unwrap(), float(1.5));
    }
}
