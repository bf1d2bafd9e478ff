/// Decimal exponent at or above which floats are printed in scientific form.
pub const SCIENTIFIC_UPPER_EXP: i32 = 16;
/// Decimal exponent below which floats are printed in scientific form.
pub const SCIENTIFIC_LOWER_EXP: i32 = -4;

/// Formats a float the way a calculator user expects to read it back.
///
/// The shortest round-trip representation is used. Integral values keep a
/// trailing `.0` so they stay distinguishable from integers, and very large
/// or very small magnitudes switch to scientific notation with a signed,
/// two-digit exponent.
///
/// ## Example
/// ```
/// use reckon::util::num::format_float;
///
/// assert_eq!(format_float(3.5), "3.5");
/// assert_eq!(format_float(4.0), "4.0");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(0.00001), "1e-05");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (SCIENTIFIC_LOWER_EXP..SCIENTIFIC_UPPER_EXP).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') { plain } else { format!("{plain}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Floor division and modulo on floats, returned as `(quotient, remainder)`.
///
/// The remainder takes the sign of the divisor and the quotient is the
/// floored, exactly-rounded value satisfying `a == q * b + r` as closely as
/// floating point allows. The divisor must be non-zero.
///
/// ## Example
/// ```
/// use reckon::util::num::float_divmod;
///
/// assert_eq!(float_divmod(7.5, 2.0), (3.0, 1.5));
/// assert_eq!(float_divmod(-7.5, 2.0), (-4.0, 0.5));
/// assert_eq!(float_divmod(7.5, -2.0), (-4.0, -0.5));
/// ```
#[must_use]
pub fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem == 0.0 {
        rem = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (rem < 0.0) {
        rem += b;
        div -= 1.0;
    }

    let floordiv = if div == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let mut floordiv = div.floor();
        if div - floordiv > 0.5 {
            floordiv += 1.0;
        }
        floordiv
    };

    (floordiv, rem)
}

/// Removes digit separators (`_`) from a literal's digits.
///
/// A separator must sit between two digits of the given radix; doubled,
/// leading or trailing separators are rejected with a reason. With
/// `allow_leading` a single separator may precede the first digit, as in
/// `0x_ff`.
///
/// ## Example
/// ```
/// use reckon::util::num::strip_separators;
///
/// assert_eq!(strip_separators("1_000", 10, false).unwrap(), "1000");
/// assert_eq!(strip_separators("_ff", 16, true).unwrap(), "ff");
/// assert!(strip_separators("1__0", 10, false).is_err());
/// assert!(strip_separators("10_", 10, false).is_err());
/// ```
pub fn strip_separators(digits: &str, radix: u32, allow_leading: bool) -> Result<String, String> {
    let digits = match digits.strip_prefix('_') {
        Some(rest) if allow_leading => rest,
        _ => digits,
    };

    if digits.is_empty() {
        return Err("missing digits".to_string());
    }

    let mut cleaned = String::with_capacity(digits.len());
    let mut previous_was_digit = false;
    for c in digits.chars() {
        if c == '_' {
            if !previous_was_digit {
                return Err("misplaced digit separator".to_string());
            }
            previous_was_digit = false;
        } else if c.is_digit(radix) {
            cleaned.push(c);
            previous_was_digit = true;
        } else {
            return Err(format!("invalid digit '{c}' for base {radix}"));
        }
    }

    if previous_was_digit {
        Ok(cleaned)
    } else {
        Err("misplaced digit separator".to_string())
    }
}

/// Multiplies `value` by `2 ** exponent`.
///
/// The power is applied in bounded steps, so exponents far outside the `f64`
/// range still end in `inf` or zero rather than an intermediate overflow.
///
/// ## Example
/// ```
/// use reckon::util::num::scale_by_power_of_two;
///
/// assert_eq!(scale_by_power_of_two(1.5, 3), 12.0);
/// assert_eq!(scale_by_power_of_two(1.0, -1074), f64::from_bits(1));
/// assert!(scale_by_power_of_two(1.0, 5000).is_infinite());
/// ```
#[must_use]
pub fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    const STEP: i32 = 512;

    while exponent != 0 && value != 0.0 && value.is_finite() {
        let step = exponent.clamp(-i64::from(STEP), i64::from(STEP));
        // |step| <= STEP, so the conversion cannot fail.
        value *= 2.0_f64.powi(i32::try_from(step).unwrap_or(STEP));
        exponent -= step;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_float_switches_notation_at_the_thresholds() {
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e300), "1.5e+300");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.000_012_5), "1.25e-05");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn float_divmod_zero_remainder_takes_divisor_sign() {
        let (q, r) = float_divmod(6.0, -3.0);
        assert_eq!(q, -2.0);
        assert!(r == 0.0 && r.is_sign_negative());
    }

    #[test]
    fn scaling_saturates_instead_of_overflowing_the_power() {
        assert_eq!(scale_by_power_of_two(3.0, 0), 3.0);
        assert_eq!(scale_by_power_of_two(2.0_f64.powi(1000), -2000), 2.0_f64.powi(-1000));
        assert_eq!(scale_by_power_of_two(-1.0, 10_000), f64::NEG_INFINITY);
        assert_eq!(scale_by_power_of_two(1.0, -10_000), 0.0);
    }

    #[test]
    fn strip_separators_rejects_foreign_digits() {
        assert_eq!(strip_separators("102", 2, false).unwrap_err(),
                   "invalid digit '2' for base 2");
        assert_eq!(strip_separators("", 8, true).unwrap_err(), "missing digits");
        assert!(strip_separators("_1", 10, false).is_err());
    }
}
