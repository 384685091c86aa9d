use std::sync::LazyLock;

use regex::Regex;

use crate::error::SyntaxError;

/// The kind of a lexical token.
///
/// Each kind corresponds to one row of [`LEXEME_TABLE`]; `:status` and `:s`
/// share [`TokenKind::StatusDirective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Spaces, tabs and newlines. Never returned by [`tokenize`].
    Whitespace,
    /// `0x1f`, `0XFF`
    HexNumber,
    /// `017`
    OctNumber,
    /// `0b101`
    BinNumber,
    /// `42`, `3.14`, `.5`, `2e-3`
    DecNumber,
    /// `let`
    Let,
    /// Identifier tokens such as `x`, `_tmp` or `x'`.
    Identifier,
    /// `**=`
    ExpAssign,
    /// `%=`
    ModAssign,
    /// `/=`
    DivAssign,
    /// `*=`
    MulAssign,
    /// `-=`
    SubAssign,
    /// `+=`
    AddAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `**`
    Exponent,
    /// `=`
    Assign,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Factorial,
    /// `%`
    Modulo,
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// `-`
    Subtract,
    /// `+`
    Plus,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `:dec`
    DecDirective,
    /// `:hex`
    HexDirective,
    /// `:oct`
    OctDirective,
    /// `:bin`
    BinDirective,
    /// `:status` or `:s`
    StatusDirective,
    /// `:vars`
    VarsDirective,
    /// `:q`
    QuitDirective,
    /// `:int`
    IntDirective,
    /// `:float`
    FloatDirective,
}

/// A lexical token: its kind and the exact text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The matched slice of the input line.
    pub text: String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

/// The ordered lexeme rules.
///
/// At each position the rules are tried from top to bottom and the first one
/// producing a non-empty match wins, so the order is significant: `**=` before
/// `**` before `*`, octal before decimal, `let` before identifiers.
pub const LEXEME_TABLE: &[(TokenKind, &str)] =
    &[(TokenKind::Whitespace, r"\s+"),
      (TokenKind::HexNumber, r"0[xX][0-9a-fA-F]+"),
      (TokenKind::OctNumber, r"0[0-7]+"),
      (TokenKind::BinNumber, r"0[bB][01]+"),
      (TokenKind::DecNumber, r"[0-9]*\.?([0-9]+)?([eE][+-]?[0-9]+)?"),
      (TokenKind::Let, r"let"),
      (TokenKind::Identifier, r"[A-Za-z_][A-Za-z0-9_]*'?"),
      (TokenKind::ExpAssign, r"\*\*="),
      (TokenKind::ModAssign, r"%="),
      (TokenKind::DivAssign, r"/="),
      (TokenKind::MulAssign, r"\*="),
      (TokenKind::SubAssign, r"-="),
      (TokenKind::AddAssign, r"\+="),
      (TokenKind::AndAssign, r"&="),
      (TokenKind::OrAssign, r"\|="),
      (TokenKind::XorAssign, r"\^="),
      (TokenKind::ShiftLeft, r"<<"),
      (TokenKind::ShiftRight, r">>"),
      (TokenKind::Exponent, r"\*\*"),
      (TokenKind::Assign, r"="),
      (TokenKind::Comma, r","),
      (TokenKind::LParen, r"\("),
      (TokenKind::RParen, r"\)"),
      (TokenKind::Factorial, r"!"),
      (TokenKind::Modulo, r"%"),
      (TokenKind::Divide, r"/"),
      (TokenKind::Multiply, r"\*"),
      (TokenKind::Subtract, r"-"),
      (TokenKind::Plus, r"\+"),
      (TokenKind::And, r"&"),
      (TokenKind::Or, r"\|"),
      (TokenKind::Xor, r"\^"),
      (TokenKind::DecDirective, r":dec"),
      (TokenKind::HexDirective, r":hex"),
      (TokenKind::OctDirective, r":oct"),
      (TokenKind::BinDirective, r":bin"),
      (TokenKind::StatusDirective, r":status"),
      (TokenKind::StatusDirective, r":s"),
      (TokenKind::VarsDirective, r":vars"),
      (TokenKind::QuitDirective, r":q"),
      (TokenKind::IntDirective, r":int"),
      (TokenKind::FloatDirective, r":float")];

/// A compiled lexeme rule, anchored at the start of the remaining input.
struct Lexeme {
    kind:    TokenKind,
    pattern: Regex,
}

static LEXEMES: LazyLock<Vec<Lexeme>> = LazyLock::new(|| {
    LEXEME_TABLE.iter()
                .map(|&(kind, pattern)| Lexeme { kind,
                                                 pattern: Regex::new(&format!("^(?:{pattern})"))
                                                     .expect("lexeme patterns are valid regexes") })
                .collect()
});

/// Splits a line into tokens.
///
/// Whitespace is matched so it can be skipped and is never returned. A rule
/// that matches the empty string at the current position counts as not
/// matching, which keeps the permissive decimal rule from stalling the scan.
///
/// # Errors
/// Returns a [`SyntaxError`] carrying the unmatched remainder of the line as
/// soon as no rule matches.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("x += 0x1f").unwrap()
///                                         .into_iter()
///                                         .map(|t| t.kind)
///                                         .collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::AddAssign, TokenKind::HexNumber]);
///
/// let err = tokenize("2 + 'x'").unwrap_err();
/// assert_eq!(err.remainder, "'x'");
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let (kind, len) = LEXEMES.iter()
                                 .find_map(|lexeme| {
                                     lexeme.pattern
                                           .find(rest)
                                           .filter(|m| !m.is_empty())
                                           .map(|m| (lexeme.kind, m.end()))
                                 })
                                 .ok_or_else(|| SyntaxError { remainder: rest.to_string() })?;

        if kind != TokenKind::Whitespace {
            tokens.push(Token::new(kind, &rest[..len]));
        }
        rest = &rest[len..];
    }

    tracing::trace!(line, count = tokens.len(), "tokenized line");
    Ok(tokens)
}
