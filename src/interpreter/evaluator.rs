/// Core evaluation logic and session management.
///
/// Contains the `Context` holding the session state, the `Response` to an
/// evaluated line and the entry points that run the lexer, parser and
/// formatter over one line.
pub mod core;

/// Directive execution.
///
/// Implements the `:` commands that switch the output mode or report on the
/// session.
pub mod directive;

/// Built-in function evaluation.
///
/// Looks up functions by name, checks argument counts and computes results.
pub mod function;

/// The symbol table.
pub mod symbols;
