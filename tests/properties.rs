use linecalc::Context;
use proptest::prelude::*;

fn answer(session: &mut Context, src: &str) -> String {
    session.evaluate(src)
}

fn directive() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![":dec", ":hex", ":oct", ":bin", ":int", ":float"])
}

proptest! {
    #[test]
    fn integer_addition_is_associative(a in -1000_i64..1000, b in -1000_i64..1000, c in -1000_i64..1000) {
        let mut session = Context::new();
        let left = answer(&mut session, &format!("({a} + {b}) + {c}"));
        let right = answer(&mut session, &format!("{a} + ({b} + {c})"));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn integer_multiplication_is_associative(a in -100_i64..100, b in -100_i64..100, c in -100_i64..100) {
        let mut session = Context::new();
        let left = answer(&mut session, &format!("({a} * {b}) * {c}"));
        let right = answer(&mut session, &format!("{a} * ({b} * {c})"));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn exponent_groups_to_the_right(a in 1_i64..6, b in 0_i64..4, c in 0_i64..3) {
        let mut session = Context::new();
        let chained = answer(&mut session, &format!("{a} ** {b} ** {c}"));
        let grouped = answer(&mut session, &format!("{a} ** ({b} ** {c})"));
        prop_assert_eq!(chained, grouped);
    }

    #[test]
    fn repeating_directives_changes_nothing(directives in prop::collection::vec(directive(), 1..8)) {
        let mut once = Context::new();
        let mut twice = Context::new();
        for d in &directives {
            once.evaluate(d);
            twice.evaluate(d);
            twice.evaluate(d);
        }
        prop_assert_eq!(once.mode(), twice.mode());
        prop_assert_eq!(once.evaluate(":s"), twice.evaluate(":s"));
    }

    #[test]
    fn hexadecimal_output_reads_back(n in 0_i64..=i64::MAX) {
        let mut session = Context::new();
        session.evaluate(":hex");
        prop_assert_eq!(session.evaluate(&format!("{n:#x}")), format!("ans = {n:#x}"));
        prop_assert_eq!(session.evaluate(&format!("-{n:#x}")),
                        if n == 0 { "ans = 0x0".to_string() } else { format!("ans = -{n:#x}") });
    }

    #[test]
    fn binary_and_octal_output_reads_back(n in 1_i64..=i64::MAX) {
        let mut session = Context::new();
        session.evaluate(":bin");
        prop_assert_eq!(session.evaluate(&format!("{n:#b}")), format!("ans = {n:#b}"));
        session.evaluate(":oct");
        prop_assert_eq!(session.evaluate(&format!("0{n:o}")), format!("ans = 0{n:o}"));
    }

    #[test]
    fn failed_compound_assignment_defines_nothing(name in "[a-z]{1,8}") {
        let mut session = Context::new();
        prop_assume!(!name.starts_with("let"));
        prop_assume!(session.symbols().get(&name).is_none());

        let before = session.symbols().clone();
        let output = session.evaluate(&format!("{name} += 1"));
        prop_assert_eq!(output, format!("Parse error: symbol '{name}' is not defined."));
        prop_assert_eq!(session.symbols(), &before);
    }
}
