use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur while evaluating a syntax tree.
///
/// Each variant carries the offset of the operator whose step failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero: {left} / 0.")]
    DivisionByZero {
        /// The dividend.
        left:     i64,
        /// Offset of the `/` operator.
        position: usize,
    },
    /// Attempted remainder by zero.
    #[error("Error at position {position}: Modulo by zero: {left} % 0.")]
    ModuloByZero {
        /// The dividend.
        left:     i64,
        /// Offset of the `%` operator.
        position: usize,
    },
    /// An exponent evaluated to a negative number.
    #[error("Error at position {position}: Negative exponent {exponent} is not supported.")]
    NegativeExponent {
        /// The offending exponent.
        exponent: i64,
        /// Offset of the `^` operator.
        position: usize,
    },
    /// An arithmetic step overflowed a 64-bit signed integer.
    #[error("Error at position {position}: Overflow evaluating {left} {op} {right}.")]
    Overflow {
        /// The operator being applied.
        op:       Operator,
        /// Left operand.
        left:     i64,
        /// Right operand.
        right:    i64,
        /// Offset of the operator.
        position: usize,
    },
}

impl EvalError {
    /// Offset of the operator whose evaluation failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position, .. }
            | Self::ModuloByZero { position, .. }
            | Self::NegativeExponent { position, .. }
            | Self::Overflow { position, .. } => *position,
        }
    }
}
