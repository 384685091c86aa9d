/// Output base, precision and number rendering.
///
/// Defines `FormatMode`, the pair of session settings that decides how a
/// [`Number`](core::Number) is printed, and `float_repr`, the shortest
/// round-trip rendering of reals.
pub mod format;

pub mod core;
