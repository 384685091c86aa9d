use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
    util::num::{digits_to_i32, f64_to_i64_truncated},
};

/// Beyond this many fractional digits every finite `f64` is already exact.
const MAX_FRACTION_DIGITS: i32 = 325;

/// Rounds a value to an integer using `floor` or `ceil`.
///
/// Integers are returned unchanged; reals are rounded and converted, which
/// fails for infinities, NaN and values outside the `i64` range.
///
/// # Parameters
/// - `name`: Either `"floor"` or `"ceil"`.
/// - `args`: Slice containing one argument.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::round::integral, value::core::Number};
///
/// assert_eq!(integral("floor", &[Number::Real(-2.5)]).unwrap(), Number::Integer(-3));
/// assert_eq!(integral("ceil", &[Number::Real(-2.5)]).unwrap(), Number::Integer(-2));
/// ```
pub fn integral(name: &str, args: &[Number]) -> EvalResult<Number> {
    match args[0] {
        Number::Integer(i) => Ok(Number::Integer(i)),
        Number::Real(r) => {
            let rounded = if name == "floor" { r.floor() } else { r.ceil() };
            f64_to_i64_truncated(rounded).map(Number::Integer)
        },
    }
}

/// Rounds half to even.
///
/// With one argument the result is an integer. With a digit count `n` the
/// value keeps its kind and is rounded to `n` decimal places, or to a multiple
/// of `10**-n` when `n` is negative.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::round::round, value::core::Number};
///
/// assert_eq!(round(&[Number::Real(2.5)]).unwrap(), Number::Integer(2));
/// assert_eq!(round(&[Number::Real(3.5)]).unwrap(), Number::Integer(4));
/// assert_eq!(round(&[Number::Real(2.675), Number::Integer(2)]).unwrap(),
///            Number::Real(2.67));
/// assert_eq!(round(&[Number::Integer(1250), Number::Integer(-2)]).unwrap(),
///            Number::Integer(1200));
/// ```
pub fn round(args: &[Number]) -> EvalResult<Number> {
    let Some(&digits) = args.get(1) else {
        return match args[0] {
            Number::Integer(i) => Ok(Number::Integer(i)),
            Number::Real(r) => f64_to_i64_truncated(r.round_ties_even()).map(Number::Integer),
        };
    };

    let Number::Integer(digits) = digits else {
        let details = "'float' object cannot be interpreted as an integer".to_string();
        return Err(ParseError::InvalidArgument { details });
    };
    let digits = digits_to_i32(digits);

    match args[0] {
        Number::Integer(i) => round_integer(i, digits).map(Number::Integer),
        Number::Real(r) => Ok(Number::Real(round_real(r, digits))),
    }
}

/// Rounds an integer to a multiple of `10**-digits`, ties to even.
fn round_integer(value: i64, digits: i32) -> EvalResult<i64> {
    if digits >= 0 {
        return Ok(value);
    }
    let Some(step) = u32::try_from(-i64::from(digits)).ok()
                                                      .and_then(|e| 10_i64.checked_pow(e))
    else {
        return Ok(0);
    };

    let (quotient, remainder) = (value.div_euclid(step), value.rem_euclid(step));
    let twice = remainder * 2;
    let quotient = if twice > step || (twice == step && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    };
    quotient.checked_mul(step).ok_or(ParseError::Overflow)
}

/// Rounds a real to `digits` decimal places, ties to even on the exact value.
fn round_real(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || digits >= MAX_FRACTION_DIGITS {
        return value;
    }
    if digits >= 0 {
        let places = usize::try_from(digits).unwrap_or(0);
        return format!("{value:.places$}").parse().unwrap_or(value);
    }
    if digits <= -MAX_FRACTION_DIGITS {
        return value * 0.0;
    }

    let step = 10.0_f64.powi(-digits);
    (value / step).round_ties_even() * step
}
