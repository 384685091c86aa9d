use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, choose, log, min_max, round},
        },
        value::core::Number,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments whose count has already
/// been checked against its [`Arity`].
type BuiltinFn = fn(&[Number]) -> EvalResult<Number>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Range(lo, hi)` accepts any count from `lo` to `hi` inclusive.
/// - `AtLeast(n)` accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "acos"  => { arity: Arity::Exact(1), func: builtin::acos },
    "asin"  => { arity: Arity::Exact(1), func: builtin::asin },
    "atan"  => { arity: Arity::Exact(1), func: builtin::atan },
    "atan2" => { arity: Arity::Exact(2), func: builtin::atan2 },
    "ceil"  => { arity: Arity::Exact(1), func: |args| round::integral("ceil", args) },
    "choose"=> { arity: Arity::Exact(2), func: choose::choose },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "cosh"  => { arity: Arity::Exact(1), func: builtin::cosh },
    "deg"   => { arity: Arity::Exact(1), func: builtin::deg },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "floor" => { arity: Arity::Exact(1), func: |args| round::integral("floor", args) },
    "hypot" => { arity: Arity::Exact(2), func: builtin::hypot },
    "inv"   => { arity: Arity::Exact(1), func: builtin::inv },
    "ldexp" => { arity: Arity::Exact(2), func: builtin::ldexp },
    "lg"    => { arity: Arity::Exact(1), func: log::lg },
    "ln"    => { arity: Arity::Exact(1), func: log::ln },
    "log"   => { arity: Arity::Range(1, 2), func: log::log },
    "log10" => { arity: Arity::Exact(1), func: log::log10 },
    "max"   => { arity: Arity::AtLeast(1), func: |args| min_max::min_max("max", args) },
    "min"   => { arity: Arity::AtLeast(1), func: |args| min_max::min_max("min", args) },
    "nrt"   => { arity: Arity::Exact(2), func: builtin::nrt },
    "perms" => { arity: Arity::Exact(2), func: choose::perms },
    "pow"   => { arity: Arity::Exact(2), func: builtin::pow },
    "rad"   => { arity: Arity::Exact(1), func: builtin::rad },
    "rand"  => { arity: Arity::Exact(0), func: builtin::rand },
    "round" => { arity: Arity::Range(1, 2), func: round::round },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "sinh"  => { arity: Arity::Exact(1), func: builtin::sinh },
    "sqrt"  => { arity: Arity::Exact(1), func: builtin::sqrt },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "tanh"  => { arity: Arity::Exact(1), func: builtin::tanh },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns the message describing the mismatch when it does not.
    fn check(self, name: &str, given: usize) -> Result<(), String> {
        match self {
            Self::Exact(expected) if given != expected => {
                let expectation = match expected {
                    0 => "no arguments".to_string(),
                    1 => "exactly one argument".to_string(),
                    n => format!("exactly {n} arguments"),
                };
                Err(format!("{name}() takes {expectation} ({given} given)"))
            },
            Self::Range(lo, _) | Self::AtLeast(lo) if given < lo => {
                Err(format!("{name} expected at least {lo} {}, got {given}", plural(lo)))
            },
            Self::Range(_, hi) if given > hi => {
                Err(format!("{name} expected at most {hi} {}, got {given}", plural(hi)))
            },
            _ => Ok(()),
        }
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "argument" } else { "arguments" }
}

/// Calls a builtin function by name.
///
/// # Parameters
/// - `name`: Function name.
/// - `args`: Evaluated arguments.
///
/// # Returns
/// The function result, or an error if the name is unknown, the argument count
/// does not fit, or the function itself fails.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::function::core::call, value::core::Number};
///
/// assert_eq!(call("floor", &[Number::Real(2.7)]).unwrap(), Number::Integer(2));
///
/// let err = call("sin", &[Number::Real(1.0), Number::Real(2.0)]).unwrap_err();
/// assert_eq!(err.to_string(), "sin() takes exactly one argument (2 given)");
///
/// let err = call("foo", &[]).unwrap_err();
/// assert_eq!(err.to_string(), "built-in function 'foo' does not exist.");
/// ```
pub fn call(name: &str, args: &[Number]) -> EvalResult<Number> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name == name)
                               .ok_or_else(|| ParseError::UnknownFunction { name: name.to_string() })?;

    builtin.arity
           .check(name, args.len())
           .map_err(|details| ParseError::ArgumentCount { details })?;

    tracing::trace!(name, argc = args.len(), "calling builtin");
    (builtin.func)(args)
}
