use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// The numeric base results are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// Plain decimal, honouring the precision mode.
    #[default]
    Decimal,
    /// `0x` prefixed.
    Hexadecimal,
    /// `0` prefixed.
    Octal,
    /// `0b` prefixed.
    Binary,
}

/// Whether decimal results are shown as reals or truncated to integers.
///
/// Also selects the meaning of `/` and the reading of decimal literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Decimal literals are truncated and `/` floors.
    Integer,
    /// Decimal literals are reals and `/` is true division.
    #[default]
    Floating,
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Decimal => "DECIMAL",
            Self::Hexadecimal => "HEXADECIMAL",
            Self::Octal => "OCTAL",
            Self::Binary => "BINARY",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Floating => "FLOATING POINT",
        };
        write!(f, "{name}")
    }
}

/// The pair of output settings a session carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatMode {
    /// Output base.
    pub base:      Base,
    /// Output precision.
    pub precision: Precision,
}

impl FormatMode {
    /// Creates a mode from its two settings.
    #[must_use]
    pub const fn new(base: Base, precision: Precision) -> Self {
        Self { base, precision }
    }

    /// Renders a number according to this mode.
    ///
    /// # Errors
    /// Non-decimal bases and integer precision truncate the value first, which
    /// fails for NaN, infinities and reals beyond the `i64` range (the last
    /// one only for non-decimal bases).
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::{
    ///     core::Number,
    ///     format::{Base, FormatMode, Precision},
    /// };
    ///
    /// let floating = FormatMode::default();
    /// assert_eq!(floating.format(Number::Real(20.0)).unwrap(), "20.0");
    /// assert_eq!(floating.format(Number::Integer(16)).unwrap(), "16");
    ///
    /// let integer = FormatMode::new(Base::Decimal, Precision::Integer);
    /// assert_eq!(integer.format(Number::Real(-2.9)).unwrap(), "-2");
    ///
    /// let hex = FormatMode::new(Base::Hexadecimal, Precision::Floating);
    /// assert_eq!(hex.format(Number::Real(-10.5)).unwrap(), "-0xa");
    ///
    /// let octal = FormatMode::new(Base::Octal, Precision::Floating);
    /// assert_eq!(octal.format(Number::Integer(0)).unwrap(), "00");
    /// ```
    pub fn format(self, number: Number) -> EvalResult<String> {
        match (self.base, self.precision) {
            (Base::Decimal, Precision::Floating) => Ok(number.to_string()),
            (Base::Decimal, Precision::Integer) => match number {
                Number::Integer(i) => Ok(i.to_string()),
                Number::Real(r) if r.is_finite() => Ok(format!("{:.0}", r.trunc() + 0.0)),
                Number::Real(r) => Err(ParseError::NonFiniteToInteger { value: r }),
            },
            (Base::Hexadecimal, _) => prefixed(number, "0x", |n| format!("{n:x}")),
            (Base::Octal, _) => prefixed(number, "0", |n| format!("{n:o}")),
            (Base::Binary, _) => prefixed(number, "0b", |n| format!("{n:b}")),
        }
    }
}

/// Formats the truncated magnitude with a prefix, the sign going first.
fn prefixed(number: Number, prefix: &str, digits: fn(u64) -> String) -> EvalResult<String> {
    let value = number.truncate()?;
    let sign = if value < 0 { "-" } else { "" };
    Ok(format!("{sign}{prefix}{}", digits(value.unsigned_abs())))
}

/// Renders a real the shortest way that reads back to the same value.
///
/// Magnitudes from `1e-4` up to `1e16` use positional notation and always
/// show a fractional part; the rest use scientific notation with a signed,
/// two-digit minimum exponent.
///
/// ```
/// use linecalc::interpreter::value::format::float_repr;
///
/// assert_eq!(float_repr(0.5), "0.5");
/// assert_eq!(float_repr(4.0), "4.0");
/// assert_eq!(float_repr(1e16), "1e+16");
/// assert_eq!(float_repr(1.5e-5), "1.5e-05");
/// assert_eq!(float_repr(-0.0), "-0.0");
/// assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') { positional } else { format!("{positional}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
