//! # linecalc
//!
//! linecalc is a line-at-a-time calculator written in Rust.
//! Each line is tokenized, parsed and evaluated in a single pass against a
//! session holding named values and an output mode (decimal, hexadecimal,
//! octal or binary; floating point or integer precision).
//!
//! ```
//! use linecalc::Context;
//!
//! let mut session = Context::new();
//! assert_eq!(session.evaluate("2 ** 3 ** 2"), "ans = 512.0");
//! assert_eq!(session.evaluate(":bin"), "CHANGED OUTPUT BASE TO BINARY.");
//! assert_eq!(session.evaluate("ans / 64"), "ans = 0b1000");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing and evaluation.
///
/// This module defines the errors that can be raised while tokenizing,
/// parsing or evaluating a line, and the `CalcError` wrapper that renders
/// them with the prefix shown to the user.
///
/// # Responsibilities
/// - Defines `SyntaxError` for input the lexer cannot match.
/// - Defines `ParseError` for grammar, symbol and numeric failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a line.
///
/// This module ties together lexing, parsing, evaluation, number
/// representation and output formatting, and exposes the session type hosts
/// drive one line at a time.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and formatter.
/// - Owns the session state: symbols and output mode.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Binary operators shared by the parser and the number model.
pub mod operator;
/// General utilities for safe numeric conversion.
///
/// Conversions between `i64` and `f64` that report failures instead of
/// saturating, used throughout the evaluator and the formatter.
pub mod util;

pub use crate::{
    error::CalcError,
    interpreter::evaluator::core::{Context, QUIT_SENTINEL, Response},
};

/// Evaluates lines in order and collects their output.
///
/// Every line runs against the same `session`; blank lines are skipped.
/// Evaluation stops after a line that asks to quit, whose sentinel is not
/// included in the output.
///
/// # Parameters
/// - `session`: The session to evaluate in.
/// - `lines`: Input lines.
///
/// # Returns
/// One output string per evaluated line, errors included.
///
/// # Examples
/// ```
/// use linecalc::{Context, evaluate_lines};
///
/// let mut session = Context::new();
/// let output = evaluate_lines(&mut session, ["x = 4", "", "x + 1", ":q", "x"]);
///
/// assert_eq!(output, ["x = 4.0", "ans = 5.0"]);
/// ```
pub fn evaluate_lines<'a, I>(session: &mut Context, lines: I) -> Vec<String>
    where I: IntoIterator<Item = &'a str>
{
    let mut output = Vec::new();

    for line in lines.into_iter().filter(|line| !line.trim().is_empty()) {
        let shown = session.evaluate(line);
        if shown == QUIT_SENTINEL {
            tracing::debug!("quit requested");
            break;
        }
        output.push(shown);
    }

    output
}
