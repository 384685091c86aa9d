use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{core::EvalResult, function::builtin::math_result},
        value::core::Number,
    },
};

/// Natural logarithm of a strictly positive value.
///
/// Zero and negative arguments are outside the domain rather than producing
/// `-inf` or NaN.
fn checked_ln(value: Number) -> EvalResult<f64> {
    let x = value.as_real();
    if x <= 0.0 {
        return Err(ParseError::MathDomain);
    }
    Ok(x.ln())
}

/// Computes the logarithm of a value, in base `e` or in a given base.
///
/// With two arguments the result is `ln(value) / ln(base)`; a base of one
/// divides by zero.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::log::log, value::core::Number};
///
/// let e = std::f64::consts::E;
/// assert_eq!(log(&[Number::Real(e)]).unwrap(), Number::Real(1.0));
/// assert_eq!(log(&[Number::Integer(8), Number::Integer(2)]).unwrap(), Number::Real(3.0));
///
/// let err = log(&[Number::Integer(8), Number::Integer(1)]).unwrap_err();
/// assert_eq!(err.to_string(), "float division by zero");
///
/// let err = log(&[Number::Integer(0)]).unwrap_err();
/// assert_eq!(err.to_string(), "math domain error");
/// ```
pub fn log(args: &[Number]) -> EvalResult<Number> {
    let ln_value = checked_ln(args[0])?;
    let Some(&base) = args.get(1) else {
        return Ok(Number::Real(ln_value));
    };

    let ln_base = checked_ln(base)?;
    if ln_base == 0.0 {
        return Err(ParseError::DivisionByZero { details: "float division by zero" });
    }
    Ok(Number::Real(ln_value / ln_base))
}

/// Natural logarithm.
pub fn ln(args: &[Number]) -> EvalResult<Number> {
    log(&args[..1])
}

/// Base-2 logarithm, computed as `ln(x) / ln(2)`.
///
/// ```
/// use linecalc::interpreter::{evaluator::function::log::lg, value::core::Number};
///
/// assert_eq!(lg(&[Number::Integer(1024)]).unwrap(), Number::Real(10.0));
/// ```
pub fn lg(args: &[Number]) -> EvalResult<Number> {
    log(&[args[0], Number::Integer(2)])
}

/// Base-10 logarithm.
pub fn log10(args: &[Number]) -> EvalResult<Number> {
    let x = args[0].as_real();
    if x <= 0.0 {
        return Err(ParseError::MathDomain);
    }
    math_result(x.log10(), &[x])
}
