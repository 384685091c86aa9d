use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Number, format::Precision},
    },
    operator::BinaryOperator,
};

/// `n - k` with ordinary subtraction.
fn difference(n: Number, k: Number) -> EvalResult<Number> {
    n.apply(BinaryOperator::Sub, k, Precision::Floating)
}

/// Truncates to an integer, mapping non-positive values to `0` since their
/// factorial is one, like `0!`.
fn factorial_argument(x: Number) -> EvalResult<i64> {
    Ok(x.truncate()?.max(0))
}

/// Computes `trunc(n! / (first! * second!))` for non-negative arguments
/// without building the factorials.
///
/// The larger divisor cancels against `n!`. The smaller one divides the
/// product of the next consecutive integers exactly at every step.
///
/// Callers only pass `first + second > n` when one of them is zero.
fn factorial_quotient(n: i64, first: i64, second: i64) -> EvalResult<Number> {
    let (low, high) = (i128::from(first.min(second)), i128::from(first.max(second)));
    let n = i128::from(n);
    if high + low > n {
        // n! / high! is below one here, except for 0! / 1!.
        return Ok(Number::Integer(i64::from(n <= 1 && high <= 1)));
    }

    let mut quotient: i128 = 1;
    for i in 1..=low {
        quotient = quotient.checked_mul(high + i).ok_or(ParseError::Overflow)? / i;
    }
    for factor in (high + low + 1)..=n {
        quotient = quotient.checked_mul(factor).ok_or(ParseError::Overflow)?;
    }

    i64::try_from(quotient).map(Number::Integer).map_err(|_| ParseError::Overflow)
}

/// Calculates the binomial coefficient `n! / (k! * (n - k)!)`.
///
/// Factorials truncate their argument and are one for non-positive values, so
/// `k > n` is not an error.
///
/// # Parameters
/// - `args`: Slice containing `[n, k]`.
///
/// # Returns
/// `Number::Integer` with the truncated quotient.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::choose::choose, value::core::Number};
///
/// let result = choose(&[Number::Integer(5), Number::Integer(2)]).unwrap();
/// assert_eq!(result, Number::Integer(10));
///
/// let result = choose(&[Number::Real(5.0), Number::Real(2.0)]).unwrap();
/// assert_eq!(result, Number::Integer(10));
///
/// let result = choose(&[Number::Integer(60), Number::Integer(30)]).unwrap();
/// assert_eq!(result, Number::Integer(118_264_581_564_861_424));
/// ```
pub fn choose(args: &[Number]) -> EvalResult<Number> {
    let (n, k) = (args[0], args[1]);
    factorial_quotient(factorial_argument(n)?,
                       factorial_argument(k)?,
                       factorial_argument(difference(n, k)?)?)
}

/// Calculates the number of ordered selections `n! / (n - k)!`.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::choose::perms, value::core::Number};
///
/// let result = perms(&[Number::Integer(5), Number::Integer(2)]).unwrap();
/// assert_eq!(result, Number::Integer(20));
/// ```
pub fn perms(args: &[Number]) -> EvalResult<Number> {
    let (n, k) = (args[0], args[1]);
    factorial_quotient(factorial_argument(n)?, factorial_argument(difference(n, k)?)?, 0)
}
