use std::fs::{self};

use linecalc::{Context, QUIT_SENTINEL, Response};
use walkdir::WalkDir;

#[test]
fn transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| {
                                             e.path().extension().is_some_and(|ext| ext == "calc")
                                         })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Context::new();
        for (input, expected) in extract_exchanges(&content) {
            count += 1;
            let output = session.evaluate(&input);
            assert_eq!(output.trim_end(),
                       expected,
                       "transcript {path:?} diverged on input:\n> {input}");
        }
    }

    assert!(count > 0, "No exchanges found in tests/transcripts");
}

/// Splits a transcript into `(input, expected output)` pairs.
///
/// `> ` starts an input line; the lines up to the next input are its output.
/// Blank lines and `#` comments are ignored.
fn extract_exchanges(content: &str) -> Vec<(String, String)> {
    let mut exchanges: Vec<(String, Vec<&str>)> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(input) = line.strip_prefix("> ") {
            exchanges.push((input.to_string(), Vec::new()));
        } else if let Some((_, output)) = exchanges.last_mut() {
            output.push(line);
        } else {
            panic!("output line before any input: {line:?}");
        }
    }

    exchanges.into_iter()
             .map(|(input, output)| (input, output.join("\n")))
             .collect()
}

fn assert_lines(lines: &[(&str, &str)]) {
    let mut session = Context::new();
    for (input, expected) in lines {
        assert_eq!(session.evaluate(input), *expected, "input: {input}");
    }
}

fn assert_answer(src: &str, expected: &str) {
    assert_lines(&[(src, &format!("ans = {expected}"))]);
}

fn assert_invalid(src: &str) {
    assert_lines(&[(src, "Parse error: the expression is invalid.")]);
}

#[test]
fn arithmetic_and_precedence() {
    assert_answer("5*4", "20.0");
    assert_answer("8 - 3 + 2", "7.0");
    assert_answer("2 + 3 * 4", "14.0");
    assert_answer("5 / 4", "1.25");
    assert_answer("0.1 + 0.2", "0.30000000000000004");
    assert_answer("10 / 3", "3.3333333333333335");
    assert_answer("(2 + 3) * 4", "20.0");
}

#[test]
fn modulo_follows_the_divisor_sign() {
    assert_answer("10 % 3", "1.0");
    assert_answer("-7 % 3", "2.0");
    assert_answer("7 % -3", "-2.0");
    assert_answer("-7.5 % 2", "0.5");
}

#[test]
fn exponent_is_right_associative() {
    assert_answer("2 ** 3 ** 2", "512.0");
    assert_answer("(2 ** 3) ** 2", "64.0");
    assert_answer("2 ** -1", "0.5");
    assert_answer("3 ** 0.5 ** 2", "1.3160740129524924");
}

#[test]
fn bitwise_operators_share_multiplication_precedence() {
    assert_answer("6 & 3", "2");
    assert_answer("6 | 3", "7");
    assert_answer("6 ^ 3", "5");
    assert_answer("1 << 4", "16");
    assert_answer("256 >> 4", "16");
    assert_answer("0xff ^ 0x0f", "240");
    assert_answer("1 + 2 & 3", "3.0");
    assert_answer("7.9 & 3.2", "3");
}

#[test]
fn factorial_applies_to_the_whole_term() {
    assert_answer("5!", "120");
    assert_answer("(3!)!", "720");
    assert_answer("2 * 3!", "720");
    assert_answer("1 + 3!", "7.0");
    assert_invalid("5!!");
}

#[test]
fn unary_minus_only_prefixes_numbers() {
    assert_answer("-5", "-5.0");
    assert_answer("3 - -2", "5.0");
    assert_answer("2 * -0x10", "-32.0");
    assert_invalid("-pi");
    assert_invalid("-(2 + 2)");
    assert_invalid("--1");
    assert_invalid("-sin(0)");
}

#[test]
fn number_literals() {
    assert_answer("010", "8");
    assert_answer("0x1F", "31");
    assert_answer("0b101", "5");
    assert_answer(".5", "0.5");
    assert_answer("1e3", "1000.0");
    assert_answer("1e16", "1e+16");
    assert_answer("1e-5 * 1.5", "1.5000000000000002e-05");
    assert_answer("0.0001", "0.0001");
    assert_invalid("0189");
    assert_lines(&[(".", "Parse error: could not convert string to float: '.'")]);
    assert_lines(&[("0x8000000000000000",
                    "Parse error: integer literal 0x8000000000000000 is too large.")]);
}

#[test]
fn identifiers_and_let() {
    assert_lines(&[("let x = 2", "x = 2.0"), ("x + 2", "ans = 4.0")]);
    assert_lines(&[("x' = 3", "x' = 3.0"), ("x' * 2", "ans = 6.0")]);
    assert_lines(&[("_tmp1 = 1", "_tmp1 = 1.0")]);
    // `let` is matched before identifiers.
    assert_lines(&[("letter = 5", "ter = 5.0"), ("ter", "ans = 5.0")]);
}

#[test]
fn compound_assignments() {
    assert_lines(&[("x = 2", "x = 2.0"),
                   ("x += 3", "x = 5.0"),
                   ("x **= 2", "x = 25.0"),
                   ("x &= 12", "x = 8"),
                   ("x |= 3", "x = 11"),
                   ("x ^= 1", "x = 10"),
                   ("x %= 4", "x = 2.0"),
                   ("x /= 4", "x = 0.5"),
                   ("x -= 1", "x = -0.5"),
                   ("x *= 4", "x = -2.0")]);
}

#[test]
fn ans_tracks_the_last_expression() {
    assert_lines(&[("ans", "ans = 0"),
                   ("3", "ans = 3.0"),
                   ("ans * 2", "ans = 6.0"),
                   ("y = 10", "y = 10.0"),
                   ("ans", "ans = 6.0"),
                   ("1 / 0", "Parse error: float division by zero"),
                   ("ans", "ans = 6.0")]);
}

#[test]
fn constants_are_predefined() {
    assert_answer("pi", "3.141592653589793");
    assert_answer("e", "2.718281828459045");
    assert_answer("phi", "1.618033988749895");
}

#[test]
fn failing_lines_leave_the_session_untouched() {
    assert_lines(&[("x = 1 / 0", "Parse error: float division by zero"),
                   ("x", "Parse error: symbol 'x' is not defined."),
                   ("y += 1", "Parse error: symbol 'y' is not defined."),
                   ("y", "Parse error: symbol 'y' is not defined.")]);

    let mut session = Context::new();
    let before = session.symbols().clone();
    for line in ["z = sqrt(-1)", "z += 1", "z = (1", "z = 1 2"] {
        assert!(session.run(line).is_err(), "{line} should fail");
    }
    assert_eq!(session.symbols(), &before);
}

#[test]
fn directives_change_the_output_mode() {
    assert_lines(&[(":hex", "CHANGED OUTPUT BASE TO HEXADECIMAL."),
                   ("10", "ans = 0xa"),
                   ("010", "ans = 0x8"),
                   ("-10", "ans = -0xa"),
                   (":oct", "CHANGED OUTPUT BASE TO OCTAL."),
                   ("8", "ans = 010"),
                   ("0", "ans = 00"),
                   ("-8", "ans = -010"),
                   (":bin", "CHANGED OUTPUT BASE TO BINARY."),
                   ("5", "ans = 0b101"),
                   ("0.9", "ans = 0b0"),
                   (":dec", "CHANGED OUTPUT BASE TO DECIMAL."),
                   ("5", "ans = 5.0")]);
}

#[test]
fn integer_precision_truncates_and_floors() {
    assert_lines(&[(":int", "CHANGED OUTPUT PRECISION TO INTEGER."),
                   ("2.9", "ans = 2"),
                   ("7 / 2", "ans = 3"),
                   ("-7 / 2", "ans = -4"),
                   ("1 / 0", "Parse error: integer division or modulo by zero"),
                   ("x = 10", "x = 10"),
                   ("x /= 4", "x = 2"),
                   (":float", "CHANGED OUTPUT PRECISION TO FLOATING POINT."),
                   ("7 / 2", "ans = 3.5")]);
}

#[test]
fn divide_assign_keeps_the_exact_quotient() {
    assert_lines(&[(":int", "CHANGED OUTPUT PRECISION TO INTEGER."),
                   ("x = 7", "x = 7"),
                   ("x /= 2", "x = 3"),
                   ("y = 1", "y = 1"),
                   ("y /= 0", "Parse error: division by zero"),
                   (":float", "CHANGED OUTPUT PRECISION TO FLOATING POINT."),
                   ("x", "ans = 3.5"),
                   ("y", "ans = 1"),
                   ("y /= 0", "Parse error: float division by zero")]);
}

#[test]
fn incomplete_assignments_are_invalid_whatever_the_symbols() {
    assert_lines(&[("x =", "Parse error: the expression is invalid."),
                   ("x += ", "Parse error: the expression is invalid."),
                   ("let x = *", "Parse error: the expression is invalid."),
                   ("x == 2", "Parse error: the expression is invalid."),
                   ("x = 1", "x = 1.0"),
                   ("x =", "Parse error: the expression is invalid."),
                   ("x == 2", "Parse error: the expression is invalid."),
                   ("x + 1", "ans = 2.0")]);
}

#[test]
fn directives_are_idempotent() {
    let mut session = Context::new();
    session.evaluate(":hex");
    session.evaluate(":int");
    let once = session.evaluate(":status");

    session.evaluate(":hex");
    session.evaluate(":int");
    assert_eq!(session.evaluate(":s"), once);
    assert_eq!(once, "STATUS: OUTPUT BASE: HEXADECIMAL; PRECISION: INTEGER.");
}

#[test]
fn directives_must_stand_alone() {
    assert_lines(&[(":hex 5", "Parse error: the expression is invalid."),
                   ("10", "ans = 10.0"),
                   (":status",
                    "STATUS: OUTPUT BASE: DECIMAL; PRECISION: FLOATING POINT.")]);
}

#[test]
fn vars_lists_every_symbol() {
    let mut session = Context::new();
    session.evaluate("x = 4");

    assert_eq!(session.evaluate(":vars"),
               "VARIABLES:\n----------\n ans : 0\n e   : 2.718281828459045\n phi : \
                1.618033988749895\n pi  : 3.141592653589793\n x   : 4.0\n");
}

#[test]
fn vars_uses_the_output_mode() {
    let mut session = Context::new();
    session.evaluate("value = 255");
    session.evaluate(":hex");

    let listing = session.evaluate(":vars");
    assert!(listing.contains(" value : 0xff\n"), "{listing}");
    assert!(listing.contains(" pi    : 0x3\n"), "{listing}");
}

#[test]
fn quit_returns_the_sentinel() {
    let mut session = Context::new();
    assert_eq!(session.evaluate(":q"), QUIT_SENTINEL);
    assert!(matches!(session.run(":q"), Ok(Response::Quit)));
    assert!(session.run(":q").is_ok_and(|response| response.is_quit()));
    assert!(session.run("1").is_ok_and(|response| !response.is_quit()));
}

#[test]
fn errors_are_reported_with_their_prefix() {
    assert_lines(&[("\"string\"", "Syntax error: \"string\""),
                   ("2 + 'x'", "Syntax error: 'x'"),
                   ("", "Parse error: the expression is invalid."),
                   ("(5", "Parse error: missing matching parenthesis in expression."),
                   ("sin(1", "Parse error: missing matching parenthesis for function sin."),
                   ("foo(1", "Parse error: missing matching parenthesis for function foo."),
                   ("foo()", "Parse error: built-in function 'foo' does not exist."),
                   ("bar", "Parse error: symbol 'bar' is not defined."),
                   ("1 2", "Parse error: the expression is invalid."),
                   ("0x1 / 0x0", "Parse error: division by zero"),
                   ("5 % 0", "Parse error: float modulo"),
                   ("0 ** -1", "Parse error: 0.0 cannot be raised to a negative power"),
                   ("(0-8) ** (1/3)",
                    "Parse error: negative number cannot be raised to a fractional power"),
                   ("10 ** 400", "Parse error: numerical result out of range"),
                   ("1 << -1", "Parse error: negative shift count"),
                   ("0x7fffffffffffffff + 0x1",
                    "Parse error: integer result does not fit in 64 bits."),
                   ("20!", "ans = 2432902008176640000"),
                   ("21!", "Parse error: integer result does not fit in 64 bits.")]);
}

#[test]
fn unprintable_results_are_not_stored() {
    assert_lines(&[("7", "ans = 7.0"),
                   (":hex", "CHANGED OUTPUT BASE TO HEXADECIMAL."),
                   ("1e300 * 1e300", "Parse error: cannot convert float infinity to integer"),
                   ("big = 1e300 * 1e300",
                    "Parse error: cannot convert float infinity to integer"),
                   ("big", "Parse error: symbol 'big' is not defined."),
                   (":dec", "CHANGED OUTPUT BASE TO DECIMAL."),
                   ("ans", "ans = 7.0")]);
}

#[test]
fn evaluate_lines_stops_at_quit() {
    let mut session = Context::new();
    let output = linecalc::evaluate_lines(&mut session, ["a = 1", "  ", "a * 3", ":q", "a"]);

    assert_eq!(output, ["a = 1.0", "ans = 3.0"]);
}
