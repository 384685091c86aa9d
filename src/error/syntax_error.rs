/// The lexer found text that no lexeme rule accepts.
///
/// Carries the unmatched remainder of the line verbatim, starting at the first
/// position where every rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Everything from the failing position to the end of the line.
    pub remainder: String,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.remainder)
    }
}

impl std::error::Error for SyntaxError {}
