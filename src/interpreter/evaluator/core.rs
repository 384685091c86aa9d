use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::symbols::SymbolTable,
        lexer::tokenize,
        parser::core::{Line, Parse, Parser},
        value::format::FormatMode,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type EvalResult<T> = Result<T, ParseError>;

/// The response to the `:q` directive.
///
/// Hosts compare a response against this string to know when to end the
/// session.
pub const QUIT_SENTINEL: &str = "!!!q!!!";

/// The outcome of a successfully evaluated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text produced by a directive.
    Message(String),
    /// The session should end.
    Quit,
    /// A symbol was bound; `value` is already formatted.
    Assignment {
        /// The bound symbol.
        name:  String,
        /// The formatted value.
        value: String,
    },
    /// An expression was evaluated and stored in `ans`; the value is already
    /// formatted.
    Answer(String),
}

impl Response {
    /// Whether this response ends the session.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Quit => write!(f, "{QUIT_SENTINEL}"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
            Self::Answer(value) => write!(f, "ans = {value}"),
        }
    }
}

/// Stores the state of a calculator session.
///
/// This struct holds the symbol table and the output mode. Both persist from
/// one line to the next and are only modified by a line that evaluates
/// successfully.
///
/// ## Usage
///
/// `Context` is created once and fed one line at a time through
/// [`Context::evaluate`], which always returns the text to show, or
/// [`Context::run`], which keeps failures typed.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Named values, including `ans`.
    pub(crate) symbols: SymbolTable,
    /// Output base and precision.
    pub(crate) mode:    FormatMode,
}

impl Context {
    /// Creates a session with the built-in symbols, decimal output and
    /// floating precision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session starting in the given output mode.
    #[must_use]
    pub fn with_mode(mode: FormatMode) -> Self {
        Self { symbols: SymbolTable::new(),
               mode }
    }

    /// The session's symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The session's output mode.
    #[must_use]
    pub const fn mode(&self) -> FormatMode {
        self.mode
    }

    /// Evaluates one line and returns the text to display.
    ///
    /// Failures are rendered with their `Syntax error: ` or `Parse error: `
    /// prefix; nothing is ever fatal.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    /// assert_eq!(ctx.evaluate("5*4"), "ans = 20.0");
    /// assert_eq!(ctx.evaluate("let x = 2"), "x = 2.0");
    /// assert_eq!(ctx.evaluate("x + ans"), "ans = 22.0");
    /// assert_eq!(ctx.evaluate(":hex"), "CHANGED OUTPUT BASE TO HEXADECIMAL.");
    /// assert_eq!(ctx.evaluate("010"), "ans = 0x8");
    /// assert_eq!(ctx.evaluate("(5"),
    ///            "Parse error: missing matching parenthesis in expression.");
    /// ```
    pub fn evaluate(&mut self, line: &str) -> String {
        match self.run(line) {
            Ok(response) => response.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Evaluates one line.
    ///
    /// The line is tokenized, parsed and evaluated in one pass. Session state
    /// is only touched once the whole line has matched and its result has
    /// been formatted, so a failing line changes nothing.
    ///
    /// # Errors
    /// - `CalcError::Syntax` if the line cannot be tokenized.
    /// - `CalcError::Parse` if it does not form a valid line or evaluating it
    ///   fails.
    pub fn run(&mut self, line: &str) -> Result<Response, CalcError> {
        let tokens = tokenize(line)?;

        let parsed = Parser::new(&tokens, &self.symbols, self.mode).line();
        let parsed = parsed.inspect_err(|err| tracing::debug!(line, %err, "line failed"))?;

        match parsed {
            Parse::Matched { value, .. } => self.commit(value).map_err(CalcError::from),
            Parse::Unmatched { consumed } => {
                tracing::debug!(line, consumed, total = tokens.len(), "line rejected");
                Err(ParseError::InvalidExpression.into())
            },
        }
    }

    /// Formats a parsed line and applies its effect on the session.
    fn commit(&mut self, line: Line) -> EvalResult<Response> {
        match line {
            Line::Directive(directive) => Ok(self.apply_directive(directive)),
            Line::Assignment { name, value } => {
                let formatted = self.mode.format(value)?;
                tracing::debug!(%name, %value, "symbol assigned");
                self.symbols.store(name.clone(), value);
                Ok(Response::Assignment { name,
                                          value: formatted })
            },
            Line::Expression(value) => {
                let formatted = self.mode.format(value)?;
                self.symbols.store("ans", value);
                Ok(Response::Answer(formatted))
            },
        }
    }
}
