/// Built-in function implementations.
///
/// Trigonometric, hyperbolic and exponential functions plus `abs`, `inv`,
/// `pow`, `nrt`, `ldexp` and `rand`, all operating on reals.
pub mod builtin;
/// `choose` and `perms`.
///
/// Binomial coefficients and ordered selections computed from factorials.
pub mod choose;
/// Logarithm function implementations.
///
/// Natural, base-2, base-10 and arbitrary-base logarithms.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// Rounding functions.
///
/// `floor`, `ceil` and `round`, which produce integers.
pub mod round;

pub mod core;
