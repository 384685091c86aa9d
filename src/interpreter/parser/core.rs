use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{directive::Directive, symbols::SymbolTable},
        lexer::{Token, TokenKind},
        value::{core::Number, format::FormatMode},
    },
};

/// The outcome of a production that did not fail hard.
///
/// `consumed` counts tokens from the position the production started at. An
/// unmatched production still reports how far it got before giving up.
#[derive(Debug, Clone, PartialEq)]
pub enum Parse<T> {
    /// The production matched and evaluated to `value`.
    Matched {
        /// The evaluated result.
        value:    T,
        /// Tokens consumed.
        consumed: usize,
    },
    /// The production did not match.
    Unmatched {
        /// Tokens consumed before the mismatch.
        consumed: usize,
    },
}

impl<T> Parse<T> {
    /// Tokens consumed, matched or not.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Matched { consumed, .. } | Self::Unmatched { consumed } => *consumed,
        }
    }

    /// Whether the production matched.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Shifts the consumed count by `offset` tokens parsed earlier.
    #[must_use]
    pub fn after(self, offset: usize) -> Self {
        match self {
            Self::Matched { value, consumed } => Self::Matched { value,
                                                                 consumed: consumed + offset },
            Self::Unmatched { consumed } => Self::Unmatched { consumed: consumed + offset },
        }
    }
}

/// Result type used by the parser.
///
/// `Err` is reserved for failures that abort the whole line: undefined
/// symbols, unbalanced parentheses and evaluation errors. A plain mismatch is
/// `Ok(Parse::Unmatched { .. })` so callers can try another production.
pub type ParseResult<T> = Result<Parse<T>, ParseError>;

/// A fully parsed and evaluated line, ready to be committed to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A directive, alone on its line.
    Directive(Directive),
    /// A simple or compound assignment with its final value.
    Assignment {
        /// Target symbol.
        name:  String,
        /// Value to bind.
        value: Number,
    },
    /// A bare expression, whose value becomes `ans`.
    Expression(Number),
}

/// A recursive-descent parser that evaluates as it parses.
///
/// Productions address the token slice by index and never mutate anything;
/// symbols are only read, so a line that fails halfway leaves no trace.
pub struct Parser<'a> {
    pub(crate) tokens:  &'a [Token],
    pub(crate) symbols: &'a SymbolTable,
    pub(crate) mode:    FormatMode,
}

impl<'a> Parser<'a> {
    /// Creates a parser over one line's tokens.
    #[must_use]
    pub const fn new(tokens: &'a [Token], symbols: &'a SymbolTable, mode: FormatMode) -> Self {
        Self { tokens,
               symbols,
               mode }
    }

    /// The kind of the token at `pos`, if any.
    pub(crate) fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|token| token.kind)
    }

    /// Whether the token at `pos` exists and has the given kind.
    pub(crate) fn check(&self, kind: TokenKind, pos: usize) -> bool {
        self.kind_at(pos) == Some(kind)
    }

    /// Parses a whole line.
    ///
    /// Grammar: `line := directive | assignment | expression`
    ///
    /// The first alternative that matches decides the line, and it must
    /// consume every token; a directive or assignment followed by stray
    /// tokens does not fall back to the next alternative, and neither does
    /// an assignment whose right-hand side does not match.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{
    ///     evaluator::symbols::SymbolTable,
    ///     lexer::tokenize,
    ///     parser::core::{Line, Parse, Parser},
    ///     value::{core::Number, format::FormatMode},
    /// };
    ///
    /// let symbols = SymbolTable::new();
    /// let tokens = tokenize("2 ** 3 ** 2").unwrap();
    /// let parsed = Parser::new(&tokens, &symbols, FormatMode::default()).line().unwrap();
    ///
    /// assert_eq!(parsed,
    ///            Parse::Matched { value:    Line::Expression(Number::Real(512.0)),
    ///                             consumed: 5, });
    /// ```
    pub fn line(&self) -> ParseResult<Line> {
        let total = self.tokens.len();

        match self.directive(0)? {
            Parse::Matched { value, consumed } if consumed == total => {
                return Ok(Parse::Matched { value: Line::Directive(value),
                                           consumed });
            },
            Parse::Matched { consumed, .. } => return Ok(Parse::Unmatched { consumed }),
            Parse::Unmatched { .. } => {},
        }

        match self.assignment(0)? {
            Parse::Matched { value, consumed } if consumed == total => {
                let (name, value) = value.resolve(self.symbols, self.mode.precision)?;
                return Ok(Parse::Matched { value: Line::Assignment { name, value },
                                           consumed });
            },
            Parse::Matched { consumed, .. } => return Ok(Parse::Unmatched { consumed }),
            // `name =` commits the line to an assignment.
            Parse::Unmatched { consumed } if consumed > 0 => {
                return Ok(Parse::Unmatched { consumed });
            },
            Parse::Unmatched { .. } => {},
        }

        match self.expression(0)? {
            Parse::Matched { value, consumed } if consumed == total => {
                Ok(Parse::Matched { value: Line::Expression(value),
                                    consumed })
            },
            other => Ok(Parse::Unmatched { consumed: other.consumed() }),
        }
    }
}
