/// Core parser types and the line entry point.
///
/// Contains the `Parse` result, the `Parser` over one line's tokens and the
/// `Line` it produces.
pub mod core;

/// Left and right fold combinators.
///
/// Build operator-precedence levels out of an operand parser and an operator
/// table.
pub mod fold;

/// Binary operator levels.
///
/// Expressions, terms and factors, with their operator tables.
pub mod binary;

/// Atoms.
///
/// Literal numbers, negative literals, symbols, function calls and
/// parenthesised expressions.
pub mod unary;

/// Statements.
///
/// Directives and assignments.
pub mod statement;
