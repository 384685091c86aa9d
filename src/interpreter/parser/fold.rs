use crate::interpreter::{
    evaluator::core::EvalResult,
    lexer::{Token, TokenKind},
    parser::core::{Parse, ParseResult},
};

/// Parses a chain of operands joined by same-precedence operators, combining
/// from the left.
///
/// Starting at `start`, while the current token is one of the kinds in
/// `operators`, an operand is parsed right after it and folded into the
/// accumulator with `combine(op, acc, operand)`, where `op` is the entry the
/// table associates with that token kind.
///
/// Zero repetitions is a match that consumed nothing. If an operand fails to
/// match after its operator, the whole fold does not match and reports every
/// token consumed so far, the operator included. Hard errors from `operand`
/// and `combine` propagate unchanged.
///
/// # Parameters
/// - `tokens`: The line's tokens.
/// - `start`: Index of the first token after the initial operand.
/// - `initial`: Accumulator, usually the already parsed first operand.
/// - `operators`: Trigger token kinds and what each one selects.
/// - `operand`: Parses one operand at the given index.
/// - `combine`: Folds an operand into the accumulator.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     lexer::{TokenKind, tokenize},
///     parser::{core::Parse, fold::fold_left},
/// };
///
/// // 10 - 3 + 2, with every operand being a single integer token
/// let tokens = tokenize("10 - 3 + 2").unwrap();
/// let operand = |pos: usize| {
///     Ok(match tokens.get(pos) {
///         Some(token) if token.kind == TokenKind::DecNumber => {
///             Parse::Matched { value: token.text.parse::<i64>().unwrap(), consumed: 1 }
///         },
///         _ => Parse::Unmatched { consumed: 0 },
///     })
/// };
///
/// let result = fold_left(&tokens,
///                        1,
///                        10,
///                        &[(TokenKind::Plus, 1), (TokenKind::Subtract, -1)],
///                        operand,
///                        |sign, acc, n| Ok(acc + sign * n)).unwrap();
///
/// assert_eq!(result, Parse::Matched { value: 9, consumed: 4 });
/// ```
pub fn fold_left<A, T, Op, P, C>(tokens: &[Token],
                                 start: usize,
                                 initial: A,
                                 operators: &[(TokenKind, Op)],
                                 mut operand: P,
                                 mut combine: C)
                                 -> ParseResult<A>
    where Op: Copy,
          P: FnMut(usize) -> ParseResult<T>,
          C: FnMut(Op, A, T) -> EvalResult<A>
{
    let mut acc = initial;
    let mut pos = start;

    while let Some(op) = tokens.get(pos).and_then(|token| lookup(operators, token.kind)) {
        match operand(pos + 1)? {
            Parse::Matched { value, consumed } => {
                acc = combine(op, acc, value)?;
                pos += 1 + consumed;
            },
            Parse::Unmatched { consumed } => {
                return Ok(Parse::Unmatched { consumed: pos + 1 + consumed - start });
            },
        }
    }

    Ok(Parse::Matched { value:    acc,
                        consumed: pos - start, })
}

/// Parses a chain of operands joined by `trigger`, combining from the right.
///
/// The operands are collected with [`fold_left`] and then folded right to
/// left, so `a ^ b ^ c` becomes `combine(a, combine(b, c))`. Every operand is
/// parsed and evaluated before the first combination runs.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     lexer::{TokenKind, tokenize},
///     parser::{core::Parse, fold::fold_right},
/// };
///
/// let tokens = tokenize("2 - 3 - 4").unwrap();
/// let operand = |pos: usize| {
///     Ok(Parse::Matched { value: tokens[pos].text.parse::<i64>().unwrap(), consumed: 1 })
/// };
///
/// // 2 - (3 - 4)
/// let result = fold_right(&tokens, 1, 2, TokenKind::Subtract, operand, |a, b| Ok(a - b));
/// assert_eq!(result.unwrap(), Parse::Matched { value: 3, consumed: 4 });
/// ```
pub fn fold_right<T, P, C>(tokens: &[Token],
                           start: usize,
                           initial: T,
                           trigger: TokenKind,
                           operand: P,
                           mut combine: C)
                           -> ParseResult<T>
    where P: FnMut(usize) -> ParseResult<T>,
          C: FnMut(T, T) -> EvalResult<T>
{
    let push = |(), mut operands: Vec<T>, value| {
        operands.push(value);
        Ok(operands)
    };
    let collected = fold_left(tokens, start, Vec::new(), &[(trigger, ())], operand, push)?;
    let (operands, consumed) = match collected {
        Parse::Matched { value, consumed } => (value, consumed),
        Parse::Unmatched { consumed } => return Ok(Parse::Unmatched { consumed }),
    };

    let mut reversed = operands.into_iter().rev();
    let value = match reversed.next() {
        Some(last) => {
            let tail = reversed.try_fold(last, |acc, value| combine(value, acc))?;
            combine(initial, tail)?
        },
        None => initial,
    };

    Ok(Parse::Matched { value, consumed })
}

fn lookup<Op: Copy>(operators: &[(TokenKind, Op)], kind: TokenKind) -> Option<Op> {
    operators.iter()
             .find(|(trigger, _)| *trigger == kind)
             .map(|&(_, op)| op)
}
