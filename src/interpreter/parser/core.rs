use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{cursor::Cursor, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, counted both as open parentheses and
/// as the height of the syntax tree.
///
/// Parsing, evaluation, rendering and dropping all recurse once per level, so
/// this bounds the stack those phases use.
pub const MAX_DEPTH: usize = 256;

/// Parses a complete arithmetic expression.
///
/// The whole input must form exactly one expression; whitespace is allowed
/// between symbols and around the expression, anything else left over is an
/// error.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if the input is blank.
/// - [`ParseError::UnexpectedTrailingInput`] if characters remain after the
///   expression.
/// - [`ParseError::NestingTooDeep`] if the expression nests deeper than
///   [`MAX_DEPTH`].
/// - Any error raised by the grammar rules.
///
/// # Example
/// ```
/// use annota::interpreter::parser::core::parse;
///
/// let expr = parse("(3+4)*2").unwrap();
/// assert_eq!(expr.to_string(), "((3 + 4) * 2)");
///
/// assert!(parse("3+").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(source);

    cursor.skip_whitespace();
    if cursor.is_at_end() {
        return Err(ParseError::EmptyInput);
    }

    let expr = parse_expression(&mut cursor)?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(ParseError::UnexpectedTrailingInput { remaining: cursor.remaining().to_string(),
                                                         position:  cursor.position(), });
    }

    debug!(nodes = expr.node_count(), depth = expr.depth(), "parsed {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the rule used both at the top level and inside parentheses. It
/// begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := term { ("+" | "-") term }`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut Cursor) -> ParseResult<Expr> {
    parse_additive(cursor)
}
