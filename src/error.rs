/// Parsing errors.
///
/// Defines every way reading an expression can fail: unexpected characters,
/// missing parentheses, literals that do not fit, and input left over after a
/// complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the arithmetic failures raised while computing node values, such
/// as division by zero, overflow, or a negative exponent.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure produced by [`annotate`](crate::annotate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
