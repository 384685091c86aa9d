use crate::{
    error::ParseError,
    interpreter::{
        evaluator::function::core::call,
        lexer::TokenKind,
        parser::{
            core::{Parse, ParseResult, Parser},
            fold::fold_left,
        },
        value::{core::Number, format::Precision},
    },
    util::num::f64_to_i64_truncated,
};

impl Parser<'_> {
    /// Parses an atom.
    ///
    /// Alternatives, tried in order:
    /// - function call: `name(args)`
    /// - symbol: `name`
    /// - negative literal: `-` number
    /// - literal number
    /// - parenthesised expression: `(expression)`
    ///
    /// Unary minus binds only to a literal, so `-x` and `-(1)` do not match.
    /// A function call that got past its opening parenthesis decides the
    /// atom, matched or not.
    pub fn atom(&self, pos: usize) -> ParseResult<Number> {
        let called = self.function_call(pos)?;
        if called.is_matched() || called.consumed() > 0 {
            return Ok(called);
        }

        match self.kind_at(pos) {
            Some(TokenKind::Identifier) => {
                let value = self.symbols.lookup(&self.tokens[pos].text)?;
                Ok(Parse::Matched { value,
                                    consumed: 1 })
            },
            Some(TokenKind::Subtract) => match self.number(pos + 1)? {
                Parse::Matched { value, consumed } => {
                    Ok(Parse::Matched { value:    value.negate()?,
                                        consumed: consumed + 1, })
                },
                Parse::Unmatched { .. } => Ok(Parse::Unmatched { consumed: 0 }),
            },
            Some(TokenKind::LParen) => self.parenthesised(pos),
            _ => self.number(pos),
        }
    }

    /// Parses `"(" expression ")"`.
    ///
    /// # Errors
    /// `MissingParenthesis` when the expression is not followed by `)`.
    fn parenthesised(&self, pos: usize) -> ParseResult<Number> {
        match self.expression(pos + 1)? {
            Parse::Matched { value, consumed } => {
                if !self.check(TokenKind::RParen, pos + 1 + consumed) {
                    return Err(ParseError::MissingParenthesis);
                }
                Ok(Parse::Matched { value,
                                    consumed: consumed + 2 })
            },
            unmatched => Ok(unmatched.after(1)),
        }
    }

    /// Parses a literal number token.
    ///
    /// Hexadecimal, octal and binary literals are integers. Decimal literals
    /// are reals, or truncated integers under integer precision.
    ///
    /// # Errors
    /// - `LiteralTooLarge` for prefixed literals beyond the `i64` range.
    /// - `InvalidLiteral` for decimal tokens that are not numbers, like `.`.
    pub fn number(&self, pos: usize) -> ParseResult<Number> {
        let Some(token) = self.tokens.get(pos) else {
            return Ok(Parse::Unmatched { consumed: 0 });
        };

        let value = match token.kind {
            TokenKind::HexNumber => radix_literal(&token.text, 2, 16)?,
            TokenKind::OctNumber => radix_literal(&token.text, 1, 8)?,
            TokenKind::BinNumber => radix_literal(&token.text, 2, 2)?,
            TokenKind::DecNumber => self.decimal_literal(&token.text)?,
            _ => return Ok(Parse::Unmatched { consumed: 0 }),
        };

        Ok(Parse::Matched { value,
                            consumed: 1 })
    }

    fn decimal_literal(&self, text: &str) -> Result<Number, ParseError> {
        let real = text.parse::<f64>()
                       .map_err(|_| ParseError::InvalidLiteral { text: text.to_string() })?;
        match self.mode.precision {
            Precision::Floating => Ok(Number::Real(real)),
            Precision::Integer => f64_to_i64_truncated(real).map(Number::Integer),
        }
    }

    /// Parses a call to a builtin function.
    ///
    /// The rule is: `function_call := name "(" [expression ("," expression)*] ")"`
    ///
    /// Does not match, having consumed nothing, unless the line continues with
    /// an identifier and `(`. An argument list that fails partway does not
    /// match either, but reports the tokens it consumed so the caller does
    /// not retry the identifier as a symbol.
    ///
    /// # Errors
    /// - `MissingFunctionParenthesis` when the arguments are not followed by
    ///   `)`.
    /// - `UnknownFunction`, `ArgumentCount` or the function's own failure.
    pub fn function_call(&self, pos: usize) -> ParseResult<Number> {
        if !(self.check(TokenKind::Identifier, pos) && self.check(TokenKind::LParen, pos + 1)) {
            return Ok(Parse::Unmatched { consumed: 0 });
        }
        let name = &self.tokens[pos].text;

        let (args, consumed) = match self.arguments(pos + 2)? {
            Parse::Matched { value, consumed } => (value, consumed),
            Parse::Unmatched { consumed: 0 } => (Vec::new(), 0),
            Parse::Unmatched { consumed } => return Ok(Parse::Unmatched { consumed: consumed + 2 }),
        };

        if !self.check(TokenKind::RParen, pos + 2 + consumed) {
            return Err(ParseError::MissingFunctionParenthesis { name: name.clone() });
        }

        Ok(Parse::Matched { value:    call(name, &args)?,
                            consumed: consumed + 3, })
    }

    /// Parses a comma-separated argument list.
    ///
    /// Does not match, having consumed nothing, on an empty list.
    pub fn arguments(&self, pos: usize) -> ParseResult<Vec<Number>> {
        let (first, consumed) = match self.expression(pos)? {
            Parse::Matched { value, consumed } => (value, consumed),
            Parse::Unmatched { consumed } => return Ok(Parse::Unmatched { consumed }),
        };

        let rest = fold_left(self.tokens,
                             pos + consumed,
                             vec![first],
                             &[(TokenKind::Comma, ())],
                             |p| self.expression(p),
                             |(), mut args, arg| {
                                 args.push(arg);
                                 Ok(args)
                             })?;
        Ok(rest.after(consumed))
    }
}

/// Reads a prefixed integer literal, skipping its `prefix_len`-byte prefix.
fn radix_literal(text: &str, prefix_len: usize, radix: u32) -> Result<Number, ParseError> {
    i64::from_str_radix(&text[prefix_len..], radix)
        .map(Number::Integer)
        .map_err(|_| ParseError::LiteralTooLarge { text: text.to_string() })
}
