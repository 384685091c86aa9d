use linecalc::{
    Context, Response, interpreter::evaluator::function::core::BUILTIN_FUNCTIONS,
};
use rstest::rstest;

fn eval(src: &str) -> String {
    Context::new().evaluate(src)
}

#[rstest]
#[case("sqrt(16)", "ans = 4.0")]
#[case("sqrt(2)", "ans = 1.4142135623730951")]
#[case("abs(-3)", "ans = 3.0")]
#[case("abs(-0x3)", "ans = 3.0")]
#[case("floor(2.7)", "ans = 2")]
#[case("floor(-2.1)", "ans = -3")]
#[case("ceil(2.1)", "ans = 3")]
#[case("round(2.5)", "ans = 2")]
#[case("round(3.5)", "ans = 4")]
#[case("round(3.14159, 0x2)", "ans = 3.14")]
#[case("round(0x7b, -0x1)", "ans = 120")]
#[case("max(1, 5, 3)", "ans = 5.0")]
#[case("max(0x5, 5)", "ans = 5")]
#[case("min(0x3, 2.5)", "ans = 2.5")]
#[case("choose(5, 2)", "ans = 10")]
#[case("choose(10, 3)", "ans = 120")]
#[case("perms(5, 2)", "ans = 20")]
#[case("choose(25, 2)", "ans = 300")]
#[case("choose(60, 30)", "ans = 118264581564861424")]
#[case("choose(3, 5)", "ans = 0")]
#[case("perms(22, 1)", "ans = 22")]
#[case("perms(30, 3)", "ans = 24360")]
#[case("log(8, 2)", "ans = 3.0")]
#[case("lg(1024)", "ans = 10.0")]
#[case("ln(1)", "ans = 0.0")]
#[case("log10(1000)", "ans = 3.0")]
#[case("exp(0)", "ans = 1.0")]
#[case("exp(1)", "ans = 2.718281828459045")]
#[case("deg(pi)", "ans = 180.0")]
#[case("rad(180)", "ans = 3.141592653589793")]
#[case("hypot(3, 4)", "ans = 5.0")]
#[case("atan2(1, 1)", "ans = 0.7853981633974483")]
#[case("inv(4)", "ans = 0.25")]
#[case("nrt(27, 3)", "ans = 3.0")]
#[case("pow(2, 10)", "ans = 1024.0")]
#[case("ldexp(3, 0x2)", "ans = 12.0")]
#[case("sin(0)", "ans = 0.0")]
#[case("sin(pi)", "ans = 1.2246467991473532e-16")]
#[case("cos(0)", "ans = 1.0")]
#[case("cosh(1)", "ans = 1.5430806348152437")]
#[case("tanh(0)", "ans = 0.0")]
#[case("sqrt(sqrt(16)) + 1", "ans = 3.0")]
fn builtin_results(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(eval(src), expected, "input: {src}");
}

#[rstest]
#[case("sin(1, 2)", "sin() takes exactly one argument (2 given)")]
#[case("sin()", "sin() takes exactly one argument (0 given)")]
#[case("atan2(1)", "atan2() takes exactly 2 arguments (1 given)")]
#[case("rand(1)", "rand() takes no arguments (1 given)")]
#[case("log()", "log expected at least 1 argument, got 0")]
#[case("log(1, 2, 3)", "log expected at most 2 arguments, got 3")]
#[case("max()", "max expected at least 1 argument, got 0")]
fn arity_is_checked(#[case] src: &str, #[case] message: &str) {
    assert_eq!(eval(src), format!("Parse error: {message}"), "input: {src}");
}

#[rstest]
#[case("sqrt(-1)", "math domain error")]
#[case("ln(0)", "math domain error")]
#[case("acos(2)", "math domain error")]
#[case("pow(0, -1)", "math domain error")]
#[case("exp(1000)", "math range error")]
#[case("log(8, 1)", "float division by zero")]
#[case("inv(0)", "float division by zero")]
#[case("ldexp(3, 2)", "Expected an int as second argument to ldexp.")]
#[case("round(1.5, 1)", "'float' object cannot be interpreted as an integer")]
#[case("floor(1e300 * 1e300)", "cannot convert float infinity to integer")]
#[case("nosuch(1)", "built-in function 'nosuch' does not exist.")]
#[case("choose(67, 33)", "integer result does not fit in 64 bits.")]
fn domain_errors(#[case] src: &str, #[case] message: &str) {
    assert_eq!(eval(src), format!("Parse error: {message}"), "input: {src}");
}

#[rstest]
#[case("sin(2,)")]
#[case("max(1,,2)")]
fn dangling_commas_are_invalid(#[case] src: &str) {
    assert_eq!(eval(src), "Parse error: the expression is invalid.");
}

#[rstest]
#[case("sin(,2)", "sin")]
#[case("max(1 2)", "max")]
fn unterminated_argument_lists(#[case] src: &str, #[case] name: &str) {
    assert_eq!(eval(src),
               format!("Parse error: missing matching parenthesis for function {name}."));
}

#[test]
fn rand_is_in_the_unit_interval() {
    let mut session = Context::new();
    for _ in 0..32 {
        let Ok(Response::Answer(shown)) = session.run("rand()") else {
            panic!("rand() did not produce an answer");
        };
        let value: f64 = shown.parse().expect("rand() prints a real");
        assert!((0.0..1.0).contains(&value), "{value}");
    }
}

#[test]
fn functions_and_symbols_have_separate_names() {
    let mut session = Context::new();

    assert_eq!(session.evaluate("ceil = 3.5"), "ceil = 3.5");
    assert_eq!(session.evaluate("ceil(ceil)"), "ans = 4");
    assert_eq!(session.evaluate("ceil"), "ans = 3.5");
}

#[test]
fn integer_precision_reaches_function_arguments() {
    let mut session = Context::new();
    session.evaluate(":int");

    assert_eq!(session.evaluate("ldexp(3, 2)"), "ans = 12");
    assert_eq!(session.evaluate("round(1.5, 1)"), "ans = 1");
    assert_eq!(session.evaluate("sqrt(10)"), "ans = 3");
}

#[test]
fn every_listed_builtin_is_callable() {
    assert_eq!(BUILTIN_FUNCTIONS.len(), 32);
    for name in BUILTIN_FUNCTIONS {
        let output = eval(&format!("{name}(0x1, 0x2, 0x3)"));
        assert!(!output.contains("does not exist"), "{name}: {output}");
    }
}
