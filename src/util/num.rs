use crate::{error::ParseError, interpreter::evaluator::core::EvalResult};

/// Lower bound of `i64` as an `f64` (`-2^63`, exactly representable).
const I64_MIN_AS_F64: f64 = -9_223_372_036_854_775_808.0;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// This is the conversion used whenever a real has to become an integer:
/// integer precision, bitwise operators, shifts, factorials and non-decimal
/// output.
///
/// ## Errors
/// - `NonFiniteToInteger` for infinities and NaN.
/// - `Overflow` if the truncated value lies outside `i64`.
///
/// ## Example
/// ```
/// use linecalc::{error::ParseError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(2.9).unwrap(), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(f64::INFINITY).unwrap_err();
/// assert_eq!(err.to_string(), "cannot convert float infinity to integer");
///
/// assert_eq!(f64_to_i64_truncated(1e20).unwrap_err(), ParseError::Overflow);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(ParseError::NonFiniteToInteger { value });
    }
    let truncated = value.trunc();
    if truncated < I64_MIN_AS_F64 || truncated >= -I64_MIN_AS_F64 {
        return Err(ParseError::Overflow);
    }
    Ok(truncated as i64)
}

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision, the same way mixed integer and real
/// arithmetic does in any calculator built on doubles.
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a shift amount to `u32`.
///
/// ## Errors
/// Returns `NegativeShift` for negative amounts. Amounts beyond `u32::MAX` are
/// clamped, since any shift of 64 or more already saturates.
///
/// ## Example
/// ```
/// use linecalc::{error::ParseError, util::num::shift_amount};
///
/// assert_eq!(shift_amount(3).unwrap(), 3);
/// assert_eq!(shift_amount(-1).unwrap_err(), ParseError::NegativeShift);
/// ```
pub fn shift_amount(value: i64) -> EvalResult<u32> {
    if value < 0 {
        return Err(ParseError::NegativeShift);
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Converts a digit count for `round(x, n)` to `i32`, saturating.
pub fn digits_to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
