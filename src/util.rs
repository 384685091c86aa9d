/// Numeric conversion helpers.
///
/// Conversions between `i64` and `f64` with the calculator's truncation rules,
/// reporting failures as [`ParseError`](crate::error::ParseError) values
/// instead of silently saturating.
pub mod num;
