use std::fmt::Write as _;

use crate::interpreter::{
    evaluator::core::{Context, Response},
    lexer::TokenKind,
    value::format::{Base, Precision},
};

/// A command that inspects or changes the session instead of computing a
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `:dec`, `:hex`, `:oct`, `:bin`
    SetBase(Base),
    /// `:int`, `:float`
    SetPrecision(Precision),
    /// `:status`, `:s`
    Status,
    /// `:vars`
    Vars,
    /// `:q`
    Quit,
}

impl Directive {
    /// Maps a directive token to its directive.
    ///
    /// ```
    /// use linecalc::interpreter::{
    ///     evaluator::directive::Directive, lexer::TokenKind, value::format::Base,
    /// };
    ///
    /// assert_eq!(Directive::from_token(TokenKind::HexDirective),
    ///            Some(Directive::SetBase(Base::Hexadecimal)));
    /// assert_eq!(Directive::from_token(TokenKind::Plus), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let directive = match kind {
            TokenKind::DecDirective => Self::SetBase(Base::Decimal),
            TokenKind::HexDirective => Self::SetBase(Base::Hexadecimal),
            TokenKind::OctDirective => Self::SetBase(Base::Octal),
            TokenKind::BinDirective => Self::SetBase(Base::Binary),
            TokenKind::IntDirective => Self::SetPrecision(Precision::Integer),
            TokenKind::FloatDirective => Self::SetPrecision(Precision::Floating),
            TokenKind::StatusDirective => Self::Status,
            TokenKind::VarsDirective => Self::Vars,
            TokenKind::QuitDirective => Self::Quit,
            _ => return None,
        };
        Some(directive)
    }
}

impl Context {
    /// Executes a directive.
    ///
    /// Mode changes take effect immediately; setting a mode to its current
    /// value is allowed and reports the change all the same.
    pub(crate) fn apply_directive(&mut self, directive: Directive) -> Response {
        match directive {
            Directive::SetBase(base) => {
                self.mode.base = base;
                tracing::debug!(%base, "output base changed");
                Response::Message(format!("CHANGED OUTPUT BASE TO {base}."))
            },
            Directive::SetPrecision(precision) => {
                self.mode.precision = precision;
                tracing::debug!(%precision, "output precision changed");
                Response::Message(format!("CHANGED OUTPUT PRECISION TO {precision}."))
            },
            Directive::Status => Response::Message(self.status_message()),
            Directive::Vars => Response::Message(self.variables_message()),
            Directive::Quit => Response::Quit,
        }
    }

    /// The current base and precision.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::evaluator::core::Context;
    ///
    /// let ctx = Context::new();
    /// assert_eq!(ctx.status_message(),
    ///            "STATUS: OUTPUT BASE: DECIMAL; PRECISION: FLOATING POINT.");
    /// ```
    #[must_use]
    pub fn status_message(&self) -> String {
        format!("STATUS: OUTPUT BASE: {}; PRECISION: {}.",
                self.mode.base, self.mode.precision)
    }

    /// Every symbol with its value, formatted in the current mode.
    ///
    /// Names are left-aligned to the longest name. A value the current mode
    /// cannot render (an infinity in hexadecimal, say) is shown in decimal.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::evaluator::core::Context;
    ///
    /// let ctx = Context::new();
    /// assert_eq!(ctx.variables_message(),
    ///            "VARIABLES:\n\
    ///             ----------\n \
    ///             ans : 0\n \
    ///             e   : 2.718281828459045\n \
    ///             phi : 1.618033988749895\n \
    ///             pi  : 3.141592653589793\n");
    /// ```
    #[must_use]
    pub fn variables_message(&self) -> String {
        let width = self.symbols.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        let mut message = String::from("VARIABLES:\n----------\n");
        for (name, value) in self.symbols.iter() {
            let shown = self.mode.format(value).unwrap_or_else(|_| value.to_string());
            let _ = writeln!(message, " {name:<width$} : {shown}");
        }
        message
    }
}
