#[derive(Debug, Clone, PartialEq)]
/// Represents every failure that can occur after tokenization.
///
/// Messages ending with a period are produced by the calculator itself; the
/// others mirror the wording of the underlying numeric failure.
pub enum ParseError {
    /// No production consumed the whole line.
    InvalidExpression,
    /// An identifier was read that has no entry in the symbol table.
    UndefinedSymbol {
        /// The identifier.
        name: String,
    },
    /// A call named a function that is not in the function table.
    UnknownFunction {
        /// The function name.
        name: String,
    },
    /// A parenthesised expression was not closed.
    MissingParenthesis,
    /// A function's argument list was not closed.
    MissingFunctionParenthesis {
        /// The function name.
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCount {
        /// The function's own description of the mismatch.
        details: String,
    },
    /// An argument had the right count but an unusable value.
    InvalidArgument {
        /// Details about the argument.
        details: String,
    },
    /// A built-in function was applied outside of its domain.
    MathDomain,
    /// A built-in function overflowed on finite arguments.
    MathRange,
    /// Division or modulo by zero.
    DivisionByZero {
        /// Which operation failed, e.g. `float division by zero`.
        details: &'static str,
    },
    /// `0 ** n` with a negative `n`.
    ZeroToNegativePower,
    /// A negative real raised to a non-integral power.
    FractionalPower,
    /// `**` overflowed on finite operands.
    OutOfRange,
    /// Shift by a negative amount.
    NegativeShift,
    /// An integer result does not fit in 64 bits.
    Overflow,
    /// A real that is infinite or NaN had to become an integer.
    NonFiniteToInteger {
        /// The offending value.
        value: f64,
    },
    /// A decimal literal matched the lexer but is not a number, e.g. `.`.
    InvalidLiteral {
        /// The literal text.
        text: String,
    },
    /// A hexadecimal, octal or binary literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal text.
        text: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "the expression is invalid."),
            Self::UndefinedSymbol { name } => write!(f, "symbol '{name}' is not defined."),
            Self::UnknownFunction { name } => {
                write!(f, "built-in function '{name}' does not exist.")
            },
            Self::MissingParenthesis => write!(f, "missing matching parenthesis in expression."),
            Self::MissingFunctionParenthesis { name } => {
                write!(f, "missing matching parenthesis for function {name}.")
            },
            Self::ArgumentCount { details } | Self::InvalidArgument { details } => {
                write!(f, "{details}")
            },
            Self::MathDomain => write!(f, "math domain error"),
            Self::MathRange => write!(f, "math range error"),
            Self::DivisionByZero { details } => write!(f, "{details}"),
            Self::ZeroToNegativePower => write!(f, "0.0 cannot be raised to a negative power"),
            Self::FractionalPower => {
                write!(f, "negative number cannot be raised to a fractional power")
            },
            Self::OutOfRange => write!(f, "numerical result out of range"),
            Self::NegativeShift => write!(f, "negative shift count"),
            Self::Overflow => write!(f, "integer result does not fit in 64 bits."),
            Self::NonFiniteToInteger { value } => {
                if value.is_nan() {
                    write!(f, "cannot convert float NaN to integer")
                } else {
                    write!(f, "cannot convert float infinity to integer")
                }
            },
            Self::InvalidLiteral { text } => {
                write!(f, "could not convert string to float: '{text}'")
            },
            Self::LiteralTooLarge { text } => write!(f, "integer literal {text} is too large."),
        }
    }
}

impl std::error::Error for ParseError {}
