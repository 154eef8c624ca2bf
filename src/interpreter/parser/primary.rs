use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::core::{MAX_DEPTH, ParseResult, parse_expression},
    },
    util::num::push_digit_checked,
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - non-negative integer literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | digit+
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the start of a primary expression
///   (leading whitespace is skipped).
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the input ends here.
/// - [`ParseError::UnexpectedCharacter`] for anything that is neither a digit
///   nor `(`.
pub fn parse_primary(cursor: &mut Cursor) -> ParseResult<Expr> {
    cursor.skip_whitespace();

    match cursor.peek() {
        Some('(') => parse_grouping(cursor),
        Some(c) if c.is_ascii_digit() => parse_literal(cursor),
        Some(found) => Err(ParseError::UnexpectedCharacter { found,
                                                             position: cursor.position() }),
        None => Err(ParseError::UnexpectedEndOfInput { position: cursor.position() }),
    }
}

/// Parses a parenthesized expression.
///
/// Parentheses only group; they never produce a node of their own, so
/// `((1+2))` yields the same tree as `1+2`.
///
/// # Errors
/// - [`ParseError::NestingTooDeep`] if this `(` would open more than
///   [`MAX_DEPTH`] groups.
/// - [`ParseError::ExpectedClosingParen`] if the inner expression is not
///   followed by `)`.
fn parse_grouping(cursor: &mut Cursor) -> ParseResult<Expr> {
    if cursor.nesting() >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position: cursor.position() });
    }
    cursor.advance(); // consume '('
    cursor.enter_group();

    let expr = parse_expression(cursor)?;
    cursor.skip_whitespace();
    if !cursor.eat(')') {
        return Err(ParseError::ExpectedClosingParen { position: cursor.position() });
    }

    cursor.leave_group();
    Ok(expr)
}

/// Parses a run of ASCII digits into a constant node.
///
/// Accumulates `value = value * 10 + digit` and stops at the first
/// non-digit.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] if the literal overflows `i64`.
fn parse_literal(cursor: &mut Cursor) -> ParseResult<Expr> {
    let position = cursor.position();
    let mut value: i64 = 0;

    while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
        value = push_digit_checked(value, digit, ParseError::LiteralTooLarge { position })?;
        cursor.advance();
    }

    trace!(value, position, "constant node");
    Ok(Expr::constant(value, position))
}
