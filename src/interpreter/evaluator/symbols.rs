use std::collections::BTreeMap;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// The golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Named values of a session.
///
/// Starts with `ans`, `e`, `pi` and `phi`. Every entry, the built-in ones
/// included, may be reassigned. Iteration is in byte order of the names.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Number>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        let symbols = [("ans", Number::Integer(0)),
                       ("e", Number::Real(std::f64::consts::E)),
                       ("pi", Number::Real(std::f64::consts::PI)),
                       ("phi", Number::Real(PHI))].into_iter()
                                                  .map(|(name, value)| (name.to_string(), value))
                                                  .collect();
        Self { symbols }
    }
}

impl SymbolTable {
    /// Creates a table holding only the built-in symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a symbol.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{evaluator::symbols::SymbolTable, value::core::Number};
    ///
    /// let symbols = SymbolTable::new();
    /// assert_eq!(symbols.lookup("ans").unwrap(), Number::Integer(0));
    /// assert_eq!(symbols.lookup("x").unwrap_err().to_string(),
    ///            "symbol 'x' is not defined.");
    /// ```
    pub fn lookup(&self, name: &str) -> EvalResult<Number> {
        self.get(name)
            .ok_or_else(|| ParseError::UndefinedSymbol { name: name.to_string() })
    }

    /// Returns the value of a symbol, if defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Number> {
        self.symbols.get(name).copied()
    }

    /// Binds a symbol, replacing any previous value.
    pub fn store(&mut self, name: impl Into<String>, value: Number) {
        self.symbols.insert(name.into(), value);
    }

    /// Iterates over all symbols in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
