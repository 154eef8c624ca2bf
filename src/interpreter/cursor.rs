use std::{iter::Peekable, str::Chars};

/// A forward-only cursor over the characters of an input string.
///
/// Positions are 0-based character offsets, not byte offsets, so they line up
/// with what a user sees when counting columns in the expression.
///
/// # Example
/// ```
/// use annota::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1 +2");
/// assert_eq!(cursor.advance(), Some('1'));
/// cursor.skip_whitespace();
/// assert_eq!(cursor.peek(), Some('+'));
/// assert_eq!(cursor.position(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars:    Peekable<Chars<'a>>,
    source:   &'a str,
    position: usize,
    offset:   usize,
    nesting:  usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { chars: source.chars().peekable(),
               source,
               position: 0,
               offset: 0,
               nesting: 0 }
    }

    /// Returns the current character without consuming it, or `None` at the
    /// end of input.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consumes and returns the current character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Offset of the current character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every character has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consumes any run of whitespace at the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Number of parenthesised groups currently open.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.nesting
    }

    /// Records that a `(` group has been entered.
    pub const fn enter_group(&mut self) {
        self.nesting += 1;
    }

    /// Records that the innermost group has been closed.
    pub const fn leave_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }
}
