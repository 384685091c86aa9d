/// Parse errors.
///
/// Every failure that can happen once a line has been tokenized: grammar
/// mismatches, undefined symbols or functions, unbalanced parentheses and the
/// numeric failures raised while evaluating operators and built-in functions.
pub mod parse_error;
/// Syntax errors.
///
/// Raised by the lexer when no lexeme rule matches at the current position.
pub mod syntax_error;

pub use parse_error::ParseError;
pub use syntax_error::SyntaxError;

/// Any failure produced while evaluating one line.
///
/// The `Display` implementation renders the message shown to the user,
/// including its `Syntax error: ` or `Parse error: ` prefix.
///
/// # Example
/// ```
/// use linecalc::error::{CalcError, ParseError, SyntaxError};
///
/// let err = CalcError::from(ParseError::MissingParenthesis);
/// assert_eq!(err.to_string(),
///            "Parse error: missing matching parenthesis in expression.");
///
/// let err = CalcError::from(SyntaxError { remainder: "\"x\"".to_string() });
/// assert_eq!(err.to_string(), "Syntax error: \"x\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The lexer could not match the remainder of the line.
    Syntax(SyntaxError),
    /// The tokens did not form a valid line, or evaluating them failed.
    Parse(ParseError),
}

impl From<SyntaxError> for CalcError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "Syntax error: {err}"),
            Self::Parse(err) => write!(f, "Parse error: {err}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}
