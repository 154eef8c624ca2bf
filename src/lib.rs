//! # annota
//!
//! annota reads a single arithmetic expression, builds a syntax tree that
//! reflects operator precedence, evaluates it bottom-up, and annotates every
//! node with the grammar production and arithmetic step that produced its
//! value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, parser::core::parse, tree::AnnotatedNode},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum produced by the parser and the
/// `Operator` enum shared by both phases. Operators know their printable
/// symbol, their precedence, and the grammar production quoted in
/// annotations.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Every failure carries the position in the input where it happened. Nothing
/// is recovered from: the first error ends the run.
pub mod error;
/// Orchestrates parsing, evaluation and rendering.
///
/// # Responsibilities
/// - Walks the input through a character cursor.
/// - Parses it into a precedence-respecting tree.
/// - Evaluates and annotates the tree.
/// - Renders the annotated tree as indented text.
pub mod interpreter;
/// Checked integer helpers shared by the parser and the evaluator.
pub mod util;

/// Parses and evaluates `source`, returning the annotated syntax tree.
///
/// # Errors
/// Returns [`Error::Parse`] if the input is not a well-formed expression and
/// [`Error::Eval`] if an arithmetic step fails (division by zero, overflow,
/// negative exponent).
///
/// # Examples
/// ```
/// use annota::annotate;
///
/// let tree = annotate("3+4*2").unwrap();
/// assert_eq!(tree.value(), 11);
/// assert_eq!(tree.annotation(), "exp -> exp + term : 3 + 8 = 11");
///
/// // Division by zero is reported, not a crash.
/// assert!(annotate("1/0").is_err());
/// ```
pub fn annotate(source: &str) -> Result<AnnotatedNode, Error> {
    debug!(source, "annotating expression");
    let expr = parse(source)?;
    let tree = evaluate(&expr)?;
    Ok(tree)
}
