use crate::{
    interpreter::{
        evaluator::core::EvalResult,
        lexer::TokenKind,
        parser::{
            core::{Parse, ParseResult, Parser},
            fold::{fold_left, fold_right},
        },
        value::core::Number,
    },
    operator::BinaryOperator,
};

/// Operators joining terms, lowest precedence.
pub const ADDITIVE_OPERATORS: &[(TokenKind, BinaryOperator)] =
    &[(TokenKind::Plus, BinaryOperator::Add), (TokenKind::Subtract, BinaryOperator::Sub)];

/// Operators joining factors. Bitwise operators share the precedence of
/// multiplication.
pub const TERM_OPERATORS: &[(TokenKind, BinaryOperator)] =
    &[(TokenKind::Multiply, BinaryOperator::Mul),
      (TokenKind::Divide, BinaryOperator::Div),
      (TokenKind::Modulo, BinaryOperator::Mod),
      (TokenKind::And, BinaryOperator::And),
      (TokenKind::Or, BinaryOperator::Or),
      (TokenKind::Xor, BinaryOperator::Xor),
      (TokenKind::ShiftLeft, BinaryOperator::ShiftLeft),
      (TokenKind::ShiftRight, BinaryOperator::ShiftRight)];

impl Parser<'_> {
    /// Applies a binary operator under the session's precision.
    fn combine(&self, op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        left.apply(op, right, self.mode.precision)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Parameters
    /// - `pos`: Index of the first token of the expression.
    ///
    /// # Returns
    /// The value of the expression and the number of tokens it spans.
    pub fn expression(&self, pos: usize) -> ParseResult<Number> {
        let (first, consumed) = match self.term(pos)? {
            Parse::Matched { value, consumed } => (value, consumed),
            unmatched @ Parse::Unmatched { .. } => return Ok(unmatched),
        };

        let rest = fold_left(self.tokens,
                             pos + consumed,
                             first,
                             ADDITIVE_OPERATORS,
                             |p| self.term(p),
                             |op, acc, rhs| self.combine(op, acc, rhs))?;
        Ok(rest.after(consumed))
    }

    /// Parses multiplication-level expressions and an optional trailing `!`.
    ///
    /// Handles left-associative operators:
    /// `*`, `/`, `%`, `&`, `|`, `^`, `<<` and `>>`.
    ///
    /// The rule is: `term := factor (op factor)* ["!"]`
    ///
    /// The factorial applies once, to the value of the whole chain: `2*3!` is
    /// `(2*3)!`.
    pub fn term(&self, pos: usize) -> ParseResult<Number> {
        let (first, consumed) = match self.factor(pos)? {
            Parse::Matched { value, consumed } => (value, consumed),
            unmatched @ Parse::Unmatched { .. } => return Ok(unmatched),
        };

        let chain = fold_left(self.tokens,
                              pos + consumed,
                              first,
                              TERM_OPERATORS,
                              |p| self.factor(p),
                              |op, acc, rhs| self.combine(op, acc, rhs))?.after(consumed);

        if let Parse::Matched { value, consumed } = chain
           && self.check(TokenKind::Factorial, pos + consumed)
        {
            return Ok(Parse::Matched { value:    value.factorial()?,
                                       consumed: consumed + 1, });
        }
        Ok(chain)
    }

    /// Parses exponentiation.
    ///
    /// `**` is right-associative: `2**3**2` is `2**(3**2)`.
    ///
    /// The rule is: `factor := atom ("**" atom)*`
    pub fn factor(&self, pos: usize) -> ParseResult<Number> {
        let (base, consumed) = match self.atom(pos)? {
            Parse::Matched { value, consumed } => (value, consumed),
            unmatched @ Parse::Unmatched { .. } => return Ok(unmatched),
        };

        let powers = fold_right(self.tokens,
                                pos + consumed,
                                base,
                                TokenKind::Exponent,
                                |p| self.atom(p),
                                Number::power)?;
        Ok(powers.after(consumed))
    }
}
