use thiserror::Error;

/// Represents all errors that can occur while parsing an expression.
///
/// Every variant except [`ParseError::EmptyInput`] carries the 0-based
/// character offset at which parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained nothing but whitespace.
    #[error("Error: Empty input, expected an arithmetic expression.")]
    EmptyInput,
    /// Found a character that cannot start or continue the expression here.
    #[error("Error at position {position}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        found:    char,
        /// Offset of the character.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Offset where the `)` was expected.
        position: usize,
    },
    /// Found extra characters after a complete expression.
    #[error("Error at position {position}: Extra input after expression: {remaining}")]
    UnexpectedTrailingInput {
        /// The unconsumed text.
        remaining: String,
        /// Offset of the first unconsumed character.
        position:  usize,
    },
    /// Parentheses or operator chains nest deeper than
    /// [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH) levels.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Offset of the `(` or operator that crossed the limit.
        position: usize,
    },
    /// An integer literal was too large to be represented.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Offset of the literal's first digit.
        position: usize,
    },
}

impl ParseError {
    /// Offset at which the error was detected, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::NestingTooDeep { position }
            | Self::LiteralTooLarge { position } => Some(*position),
        }
    }
}
