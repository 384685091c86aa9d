use std::cmp::Ordering;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Number};

/// Orders two numbers, comparing integers exactly.
fn compare(left: Number, right: Number) -> Option<Ordering> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
        _ => left.as_real().partial_cmp(&right.as_real()),
    }
}

/// Computes the minimum or maximum of one or more numbers.
///
/// The selected argument is returned unchanged, keeping whether it is an
/// integer or a real. On ties the earliest argument wins.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: At least one argument.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::min_max::min_max, value::core::Number};
///
/// let r = min_max("min", &[Number::Integer(3), Number::Real(7.0)]).unwrap();
/// assert_eq!(r, Number::Integer(3));
///
/// let r = min_max("max", &[Number::Real(2.0), Number::Integer(2), Number::Real(1.0)]).unwrap();
/// assert_eq!(r, Number::Real(2.0));
/// ```
pub fn min_max(name: &str, args: &[Number]) -> EvalResult<Number> {
    let wanted = if name == "min" { Ordering::Less } else { Ordering::Greater };

    let mut best = args[0];
    for &candidate in &args[1..] {
        if compare(candidate, best) == Some(wanted) {
            best = candidate;
        }
    }

    Ok(best)
}
