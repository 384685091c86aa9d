/// The evaluator module owns the session and runs a line end to end.
///
/// It holds the `Context` with the symbol table and output mode, executes
/// directives, calls builtin functions and commits the result of a line that
/// evaluated successfully.
///
/// # Responsibilities
/// - Drives tokenizing, parsing and formatting for each line.
/// - Implements directives and builtin functions.
/// - Keeps session state untouched when a line fails.
pub mod evaluator;
/// The lexer module splits a line into tokens.
///
/// The lexer tries an ordered table of regular expressions at each position
/// and keeps the first non-empty match. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input line into tokens with their kind and text.
/// - Drops whitespace.
/// - Reports the unmatched remainder of the line on failure.
pub mod lexer;
/// The parser module evaluates tokens while recognising the grammar.
///
/// There is no syntax tree: every production computes its value as soon as
/// it matches, and reports how many tokens it consumed either way.
///
/// # Responsibilities
/// - Implements precedence and associativity through fold combinators.
/// - Recognises directives, assignments and expressions.
/// - Raises hard errors for undefined symbols, unbalanced parentheses and
///   numeric failures.
pub mod parser;
/// The value module defines numbers and how they are printed.
///
/// # Responsibilities
/// - Defines the `Number` enum and its integer and real variants.
/// - Implements every binary operator, negation and factorial.
/// - Formats numbers in each output base and precision.
pub mod value;
