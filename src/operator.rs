/// Represents a binary operator.
///
/// Binary operators are selected by the parser from operator tokens and by
/// compound assignments (`+=`, `&=`, ...), and applied with
/// [`Number::apply`](crate::interpreter::value::core::Number::apply).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), true or floor division depending on precision.
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    And,
    /// Bitwise or (`|`)
    Or,
    /// Bitwise exclusive or (`^`)
    Xor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Mod, Mul, Or, Pow, ShiftLeft, ShiftRight, Sub, Xor};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            And => "&",
            Or => "|",
            Xor => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
        };
        write!(f, "{operator}")
    }
}
