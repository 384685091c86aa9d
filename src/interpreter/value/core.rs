use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::EvalResult,
        value::format::{Precision, float_repr},
    },
    operator::BinaryOperator,
    util::num::{f64_to_i64_truncated, i64_to_f64, shift_amount},
};

/// A numeric value.
///
/// Integers come from hexadecimal, octal and binary literals, from decimal
/// literals under integer precision, and from operators and functions that
/// produce whole numbers (`&`, `!`, `floor`, ...). Everything else is real.
/// The distinction is visible in the output: `16` versus `16.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{}", float_repr(*r)),
        }
    }
}

impl Number {
    /// Returns the value as an `f64`.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r,
        }
    }

    /// Truncates the value toward zero.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Real(-3.7).truncate().unwrap(), -3);
    /// assert_eq!(Number::Integer(12).truncate().unwrap(), 12);
    /// ```
    pub fn truncate(self) -> EvalResult<i64> {
        match self {
            Self::Integer(i) => Ok(i),
            Self::Real(r) => f64_to_i64_truncated(r),
        }
    }

    /// Negates the value.
    pub fn negate(self) -> EvalResult<Self> {
        match self {
            Self::Integer(i) => i.checked_neg().map(Self::Integer).ok_or(ParseError::Overflow),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }

    /// Applies a binary operator.
    ///
    /// `precision` selects the meaning of `/`: true division under floating
    /// precision, floor division under integer precision.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     interpreter::value::{core::Number, format::Precision},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let seven = Number::Integer(7);
    /// let two = Number::Integer(2);
    ///
    /// assert_eq!(seven.apply(BinaryOperator::Div, two, Precision::Floating).unwrap(),
    ///            Number::Real(3.5));
    /// assert_eq!(seven.apply(BinaryOperator::Div, two, Precision::Integer).unwrap(),
    ///            Number::Integer(3));
    /// assert_eq!(seven.apply(BinaryOperator::Xor, two, Precision::Floating).unwrap(),
    ///            Number::Integer(5));
    /// ```
    pub fn apply(self, op: BinaryOperator, rhs: Self, precision: Precision) -> EvalResult<Self> {
        match op {
            BinaryOperator::Add => self.arithmetic(rhs, i64::checked_add, |a, b| a + b),
            BinaryOperator::Sub => self.arithmetic(rhs, i64::checked_sub, |a, b| a - b),
            BinaryOperator::Mul => self.arithmetic(rhs, i64::checked_mul, |a, b| a * b),
            BinaryOperator::Div => match precision {
                Precision::Floating => self.divide(rhs),
                Precision::Integer => self.floor_divide(rhs),
            },
            BinaryOperator::Mod => self.modulo(rhs),
            BinaryOperator::Pow => self.power(rhs),
            BinaryOperator::And => Ok(Self::Integer(self.truncate()? & rhs.truncate()?)),
            BinaryOperator::Or => Ok(Self::Integer(self.truncate()? | rhs.truncate()?)),
            BinaryOperator::Xor => Ok(Self::Integer(self.truncate()? ^ rhs.truncate()?)),
            BinaryOperator::ShiftLeft => shift_left(self.truncate()?, rhs.truncate()?),
            BinaryOperator::ShiftRight => shift_right(self.truncate()?, rhs.truncate()?),
        }
    }

    /// Integer arithmetic when both sides are integers, real arithmetic
    /// otherwise.
    fn arithmetic(self,
                  rhs: Self,
                  integer: fn(i64, i64) -> Option<i64>,
                  real: fn(f64, f64) -> f64)
                  -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                integer(a, b).map(Self::Integer).ok_or(ParseError::Overflow)
            },
            _ => Ok(Self::Real(real(self.as_real(), rhs.as_real()))),
        }
    }

    /// True division; the result is always real.
    pub fn divide(self, rhs: Self) -> EvalResult<Self> {
        let divisor = rhs.as_real();
        if divisor == 0.0 {
            let details = match (self, rhs) {
                (Self::Integer(_), Self::Integer(_)) => "division by zero",
                _ => "float division by zero",
            };
            return Err(ParseError::DivisionByZero { details });
        }
        Ok(Self::Real(self.as_real() / divisor))
    }

    /// Floor division.
    pub fn floor_divide(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                let (quotient, _) = integer_divmod(a, b)?;
                Ok(Self::Integer(quotient))
            },
            _ => {
                if rhs.as_real() == 0.0 {
                    return Err(ParseError::DivisionByZero { details:
                                                                "float floor division by zero", });
                }
                let (quotient, _) = real_divmod(self.as_real(), rhs.as_real());
                Ok(Self::Real(quotient))
            },
        }
    }

    /// Modulo whose result carries the sign of the divisor.
    ///
    /// ```
    /// use linecalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(-7).modulo(Number::Integer(3)).unwrap(),
    ///            Number::Integer(2));
    /// assert_eq!(Number::Real(7.0).modulo(Number::Real(-3.0)).unwrap(),
    ///            Number::Real(-2.0));
    /// ```
    pub fn modulo(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                let (_, remainder) = integer_divmod(a, b)?;
                Ok(Self::Integer(remainder))
            },
            _ => {
                if rhs.as_real() == 0.0 {
                    return Err(ParseError::DivisionByZero { details: "float modulo" });
                }
                let (_, remainder) = real_divmod(self.as_real(), rhs.as_real());
                Ok(Self::Real(remainder))
            },
        }
    }

    /// Exponentiation.
    ///
    /// An integer raised to a non-negative integer stays an integer; every
    /// other combination is computed on reals.
    ///
    /// ```
    /// use linecalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(2).power(Number::Integer(10)).unwrap(),
    ///            Number::Integer(1024));
    /// assert_eq!(Number::Integer(2).power(Number::Integer(-1)).unwrap(),
    ///            Number::Real(0.5));
    /// ```
    pub fn power(self, rhs: Self) -> EvalResult<Self> {
        if let (Self::Integer(base), Self::Integer(exponent)) = (self, rhs)
           && exponent >= 0
        {
            return integer_power(base, exponent).map(Self::Integer);
        }

        let (base, exponent) = (self.as_real(), rhs.as_real());
        if base == 0.0 && exponent < 0.0 {
            return Err(ParseError::ZeroToNegativePower);
        }
        if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            return Err(ParseError::FractionalPower);
        }
        let result = base.powf(exponent);
        if result.is_infinite() && base.is_finite() && exponent.is_finite() {
            return Err(ParseError::OutOfRange);
        }
        Ok(Self::Real(result))
    }

    /// The product `1 * 2 * ... * n` of the truncated value, `1` for `n <= 0`.
    ///
    /// ```
    /// use linecalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Real(5.0).factorial().unwrap(), Number::Integer(120));
    /// assert_eq!(Number::Integer(-3).factorial().unwrap(), Number::Integer(1));
    /// assert!(Number::Integer(21).factorial().is_err());
    /// ```
    pub fn factorial(self) -> EvalResult<Self> {
        let n = self.truncate()?;
        (1..=n).try_fold(1_i64, i64::checked_mul)
               .map(Self::Integer)
               .ok_or(ParseError::Overflow)
    }
}

/// Floor quotient and remainder of two integers.
fn integer_divmod(a: i64, b: i64) -> EvalResult<(i64, i64)> {
    if b == 0 {
        return Err(ParseError::DivisionByZero { details: "integer division or modulo by zero" });
    }
    let quotient = a.checked_div(b).ok_or(ParseError::Overflow)?;
    let remainder = a.checked_rem(b).ok_or(ParseError::Overflow)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        Ok((quotient - 1, remainder + b))
    } else {
        Ok((quotient, remainder))
    }
}

/// Floor quotient and remainder of two reals; `b` must be non-zero.
fn real_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder == 0.0 {
        remainder = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (remainder < 0.0) {
        remainder += b;
        quotient -= 1.0;
    }
    let floored = if quotient == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floor = quotient.floor();
        if quotient - floor > 0.5 { floor + 1.0 } else { floor }
    };
    (floored, remainder)
}

fn integer_power(base: i64, exponent: i64) -> EvalResult<i64> {
    match base {
        0 => Ok(i64::from(exponent == 0)),
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent).ok()
                                    .and_then(|e| base.checked_pow(e))
                                    .ok_or(ParseError::Overflow),
    }
}

fn shift_left(value: i64, amount: i64) -> EvalResult<Number> {
    let amount = shift_amount(amount)?;
    if value == 0 {
        return Ok(Number::Integer(0));
    }
    if amount >= i64::BITS {
        return Err(ParseError::Overflow);
    }
    let shifted = value << amount;
    if shifted >> amount != value {
        return Err(ParseError::Overflow);
    }
    Ok(Number::Integer(shifted))
}

fn shift_right(value: i64, amount: i64) -> EvalResult<Number> {
    let amount = shift_amount(amount)?.min(i64::BITS - 1);
    Ok(Number::Integer(value >> amount))
}
