use crate::{
    interpreter::{
        evaluator::{core::EvalResult, directive::Directive, symbols::SymbolTable},
        lexer::TokenKind,
        parser::core::{Parse, ParseResult, Parser},
        value::{core::Number, format::Precision},
    },
    operator::BinaryOperator,
};

/// Assignment operators and the binary operator each compound form applies.
pub const ASSIGN_OPERATORS: &[(TokenKind, Option<BinaryOperator>)] =
    &[(TokenKind::Assign, None),
      (TokenKind::AddAssign, Some(BinaryOperator::Add)),
      (TokenKind::SubAssign, Some(BinaryOperator::Sub)),
      (TokenKind::MulAssign, Some(BinaryOperator::Mul)),
      (TokenKind::DivAssign, Some(BinaryOperator::Div)),
      (TokenKind::ModAssign, Some(BinaryOperator::Mod)),
      (TokenKind::ExpAssign, Some(BinaryOperator::Pow)),
      (TokenKind::AndAssign, Some(BinaryOperator::And)),
      (TokenKind::OrAssign, Some(BinaryOperator::Or)),
      (TokenKind::XorAssign, Some(BinaryOperator::Xor))];

/// A parsed assignment whose right-hand side has been evaluated but whose
/// target has not been read yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAssignment {
    /// Target symbol.
    pub name:     String,
    /// `None` for `=`, otherwise the operator of the compound form.
    pub operator: Option<BinaryOperator>,
    /// Value of the right-hand side.
    pub operand:  Number,
}

impl PendingAssignment {
    /// Computes the value to bind.
    ///
    /// A compound assignment reads the current value of its target, which
    /// must already be defined. `/=` is always true division; only the `/`
    /// operator floors under integer precision.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     interpreter::{
    ///         evaluator::symbols::SymbolTable,
    ///         parser::statement::PendingAssignment,
    ///         value::{core::Number, format::Precision},
    ///     },
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let mut symbols = SymbolTable::new();
    /// let pending = PendingAssignment { name:     "x".to_string(),
    ///                                   operator: Some(BinaryOperator::Add),
    ///                                   operand:  Number::Integer(1), };
    ///
    /// let err = pending.clone().resolve(&symbols, Precision::Floating).unwrap_err();
    /// assert_eq!(err.to_string(), "symbol 'x' is not defined.");
    ///
    /// symbols.store("x", Number::Integer(41));
    /// assert_eq!(pending.resolve(&symbols, Precision::Floating).unwrap(),
    ///            ("x".to_string(), Number::Integer(42)));
    ///
    /// let halve = PendingAssignment { name:     "x".to_string(),
    ///                                 operator: Some(BinaryOperator::Div),
    ///                                 operand:  Number::Integer(2), };
    /// assert_eq!(halve.resolve(&symbols, Precision::Integer).unwrap(),
    ///            ("x".to_string(), Number::Real(20.5)));
    /// ```
    pub fn resolve(self,
                   symbols: &SymbolTable,
                   precision: Precision)
                   -> EvalResult<(String, Number)> {
        let value = match self.operator {
            None => self.operand,
            Some(BinaryOperator::Div) => symbols.lookup(&self.name)?.divide(self.operand)?,
            Some(op) => symbols.lookup(&self.name)?.apply(op, self.operand, precision)?,
        };
        Ok((self.name, value))
    }
}

impl Parser<'_> {
    /// Parses a directive token.
    pub fn directive(&self, pos: usize) -> ParseResult<Directive> {
        match self.kind_at(pos).and_then(Directive::from_token) {
            Some(directive) => Ok(Parse::Matched { value:    directive,
                                                   consumed: 1, }),
            None => Ok(Parse::Unmatched { consumed: 0 }),
        }
    }

    /// Finds the head of an assignment at `pos`: an identifier, optionally
    /// after `let`, directly followed by an assignment operator.
    ///
    /// # Returns
    /// The index of the target identifier and the compound operator, if any.
    fn assignment_head(&self, pos: usize) -> Option<(usize, Option<BinaryOperator>)> {
        let target = match (self.kind_at(pos), self.kind_at(pos + 1)) {
            (Some(TokenKind::Identifier), _) => pos,
            (Some(TokenKind::Let), Some(TokenKind::Identifier)) => pos + 1,
            _ => return None,
        };

        let kind = self.kind_at(target + 1)?;
        ASSIGN_OPERATORS.iter()
                        .find(|(k, _)| *k == kind)
                        .map(|&(_, operator)| (target, operator))
    }

    /// Parses an assignment.
    ///
    /// The rule is: `assignment := ["let"] name assign_op expression`
    ///
    /// Without an assignment head nothing is consumed, so the line can be
    /// read as an expression instead. Once the head is seen, an unmatched
    /// right-hand side reports the tokens consumed so far, never zero.
    pub fn assignment(&self, pos: usize) -> ParseResult<PendingAssignment> {
        let Some((target, operator)) = self.assignment_head(pos) else {
            return Ok(Parse::Unmatched { consumed: 0 });
        };

        let value_start = target + 2;
        match self.expression(value_start)? {
            Parse::Matched { value, consumed } => {
                let pending = PendingAssignment { name: self.tokens[target].text.clone(),
                                                  operator,
                                                  operand: value };
                Ok(Parse::Matched { value:    pending,
                                    consumed: value_start - pos + consumed, })
            },
            Parse::Unmatched { consumed } => {
                Ok(Parse::Unmatched { consumed: value_start - pos + consumed })
            },
        }
    }
}
