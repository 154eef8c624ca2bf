/// Core evaluation logic.
///
/// Contains the post-order walk that turns a parsed [`Expr`](crate::ast::Expr)
/// into an [`AnnotatedNode`](crate::interpreter::tree::AnnotatedNode) tree.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the checked integer arithmetic for all six operators.
pub mod binary;

/// Annotation formatting.
///
/// Builds the derivation strings recorded on every node.
pub mod annotation;
