use tracing::trace;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            core::{MAX_DEPTH, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each repetition
/// wraps the tree built so far as the new left operand, so `a - b - c` parses
/// as `(a - b) - c`.
///
/// The rule is: `additive := term { ("+" | "-") term }`
///
/// # Parameters
/// - `cursor`: Character cursor.
///
/// # Returns
/// An [`Expr::Operation`] chain, or the lone term.
pub fn parse_additive(cursor: &mut Cursor) -> ParseResult<Expr> {
    let mut left = parse_term(cursor)?;
    while let Some((op, position)) =
        next_operator(cursor, |op| matches!(op, Operator::Add | Operator::Sub))
    {
        let right = parse_term(cursor)?;
        left = build(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `term := factor { ("*" | "/" | "%") factor }`
///
/// # Parameters
/// - `cursor`: Character cursor.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term(cursor: &mut Cursor) -> ParseResult<Expr> {
    let mut left = parse_factor(cursor)?;
    while let Some((op, position)) =
        next_operator(cursor,
                      |op| matches!(op, Operator::Mul | Operator::Div | Operator::Mod))
    {
        let right = parse_factor(cursor)?;
        left = build(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Repeated exponentiation is left-associative, matching the
/// `fac -> fac ^ comp` production: `a ^ b ^ c` parses as `(a ^ b) ^ c`, and
/// the right operand of every `^` is a single primary.
///
/// The rule is: `factor := primary { "^" primary }`
///
/// # Parameters
/// - `cursor`: Character cursor.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_factor(cursor: &mut Cursor) -> ParseResult<Expr> {
    let mut left = parse_primary(cursor)?;
    while let Some((op, position)) = next_operator(cursor, |op| op == Operator::Pow) {
        let right = parse_primary(cursor)?;
        left = build(op, left, right, position)?;
    }
    Ok(left)
}

/// Consumes the next operator if `accepts` allows it.
///
/// Leading whitespace is skipped. Returns the operator and its offset, or
/// `None` (consuming nothing but whitespace) when the next character is not an
/// accepted operator.
fn next_operator(cursor: &mut Cursor,
                 accepts: impl Fn(Operator) -> bool)
                 -> Option<(Operator, usize)> {
    cursor.skip_whitespace();
    let op = cursor.peek()
                   .and_then(Operator::from_symbol)
                   .filter(|op| accepts(*op))?;
    let position = cursor.position();
    cursor.advance();
    Some((op, position))
}

/// Builds an operation node, rejecting it if the tree grows past
/// [`MAX_DEPTH`].
fn build(op: Operator, left: Expr, right: Expr, position: usize) -> ParseResult<Expr> {
    let node = Expr::operation(op, left, right, position);
    if node.depth() > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    trace!(%op, position, "operation node");
    Ok(node)
}
