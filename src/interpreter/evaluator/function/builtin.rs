use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// Wraps a real result, turning numeric failures into math errors.
///
/// A NaN produced from non-NaN inputs is a domain error; an infinity produced
/// from finite inputs is a range error.
///
/// # Example
/// ```
/// use linecalc::{error::ParseError, interpreter::evaluator::function::builtin::math_result};
///
/// assert_eq!(math_result(f64::NAN, &[-1.0]).unwrap_err(), ParseError::MathDomain);
/// assert_eq!(math_result(f64::INFINITY, &[1000.0]).unwrap_err(), ParseError::MathRange);
/// assert!(math_result(f64::INFINITY, &[f64::INFINITY]).is_ok());
/// ```
pub fn math_result(result: f64, inputs: &[f64]) -> EvalResult<Number> {
    if result.is_nan() && !inputs.iter().any(|x| x.is_nan()) {
        return Err(ParseError::MathDomain);
    }
    if result.is_infinite() && inputs.iter().all(|x| x.is_finite()) {
        return Err(ParseError::MathRange);
    }
    Ok(Number::Real(result))
}

/// Applies a unary real builtin function.
///
/// The generated functions take one argument, convert it to a real and check
/// the result with [`math_result`].
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::sin, value::core::Number};
///
/// let x = Number::Real(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x]).unwrap(), Number::Real(1.0));
///
/// assert!(sin(&[Number::Real(f64::INFINITY)]).is_err());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Number]) -> EvalResult<Number> {
            let x = args[0].as_real();
            math_result(x.$real_fn(), &[x])
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(exp, exp);
real_builtin!(sqrt, sqrt);

/// Absolute value, always real.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::abs, value::core::Number};
///
/// assert_eq!(abs(&[Number::Integer(-3)]).unwrap(), Number::Real(3.0));
/// ```
pub fn abs(args: &[Number]) -> EvalResult<Number> {
    Ok(Number::Real(args[0].as_real().abs()))
}

/// Converts radians to degrees.
pub fn deg(args: &[Number]) -> EvalResult<Number> {
    Ok(Number::Real(args[0].as_real().to_degrees()))
}

/// Converts degrees to radians.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::rad, value::core::Number};
///
/// assert_eq!(rad(&[Number::Real(180.0)]).unwrap(), Number::Real(std::f64::consts::PI));
/// ```
pub fn rad(args: &[Number]) -> EvalResult<Number> {
    Ok(Number::Real(args[0].as_real().to_radians()))
}

/// The angle of the point `(x, y)`, called as `atan2(y, x)`.
pub fn atan2(args: &[Number]) -> EvalResult<Number> {
    Ok(Number::Real(args[0].as_real().atan2(args[1].as_real())))
}

/// Euclidean distance `sqrt(x*x + y*y)` without intermediate overflow.
pub fn hypot(args: &[Number]) -> EvalResult<Number> {
    let (x, y) = (args[0].as_real(), args[1].as_real());
    math_result(x.hypot(y), &[x, y])
}

/// Reciprocal, computed with true division.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::inv, value::core::Number};
///
/// assert_eq!(inv(&[Number::Integer(4)]).unwrap(), Number::Real(0.25));
/// assert_eq!(inv(&[Number::Integer(0)]).unwrap_err().to_string(), "division by zero");
/// ```
pub fn inv(args: &[Number]) -> EvalResult<Number> {
    Number::Integer(1).divide(args[0])
}

/// Real power, `pow(x, y)`.
///
/// Unlike the `**` operator, failures are reported as math errors and the
/// result is always real.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::pow, value::core::Number};
///
/// assert_eq!(pow(&[Number::Integer(2), Number::Integer(3)]).unwrap(), Number::Real(8.0));
/// assert_eq!(pow(&[Number::Integer(0), Number::Integer(-1)]).unwrap_err().to_string(),
///            "math domain error");
/// ```
pub fn pow(args: &[Number]) -> EvalResult<Number> {
    let (x, y) = (args[0].as_real(), args[1].as_real());
    if x == 0.0 && y < 0.0 {
        return Err(ParseError::MathDomain);
    }
    math_result(x.powf(y), &[x, y])
}

/// The `n`-th root of `x`, computed as `x ** (1 / n)`.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::nrt, value::core::Number};
///
/// assert_eq!(nrt(&[Number::Real(16.0), Number::Real(4.0)]).unwrap(), Number::Real(2.0));
/// ```
pub fn nrt(args: &[Number]) -> EvalResult<Number> {
    let exponent = Number::Integer(1).divide(args[1])?;
    args[0].power(exponent)
}

/// `x * 2**i`; the exponent must be an integer.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::builtin::ldexp, value::core::Number};
///
/// assert_eq!(ldexp(&[Number::Real(0.75), Number::Integer(4)]).unwrap(), Number::Real(12.0));
/// assert!(ldexp(&[Number::Real(0.75), Number::Real(4.0)]).is_err());
/// ```
pub fn ldexp(args: &[Number]) -> EvalResult<Number> {
    let Number::Integer(exponent) = args[1] else {
        let details = "Expected an int as second argument to ldexp.".to_string();
        return Err(ParseError::InvalidArgument { details });
    };
    let x = args[0].as_real();
    math_result(scale_by_power_of_two(x, exponent), &[x])
}

/// Multiplies by `2**exponent` in steps so intermediate powers stay finite.
fn scale_by_power_of_two(mut x: f64, exponent: i64) -> f64 {
    const STEP: i32 = 1000;

    let mut remaining = exponent.clamp(-4 * i64::from(STEP), 4 * i64::from(STEP));
    while remaining > i64::from(STEP) {
        x *= 2.0_f64.powi(STEP);
        remaining -= i64::from(STEP);
    }
    while remaining < -i64::from(STEP) {
        x *= 2.0_f64.powi(-STEP);
        remaining += i64::from(STEP);
    }
    // |remaining| <= STEP
    x * 2.0_f64.powi(i32::try_from(remaining).unwrap_or(0))
}

/// A real drawn uniformly from `[0, 1)`.
pub fn rand(_args: &[Number]) -> EvalResult<Number> {
    Ok(Number::Real(::rand::random::<f64>()))
}
