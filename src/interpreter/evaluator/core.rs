use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            annotation::{constant_annotation, operation_annotation},
            binary::eval_binary,
        },
        tree::AnnotatedNode,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a parsed tree and annotates every node.
///
/// The walk is post-order: for an operation, the left subtree is evaluated,
/// then the right, and then the operator is applied to their values. Each
/// node is visited exactly once.
///
/// The parsed tree is only borrowed. Evaluating the same tree again performs
/// the same pure computation and yields an identical annotated tree.
///
/// # Errors
/// Returns the first [`EvalError`] encountered; the walk stops there.
///
/// # Example
/// ```
/// use annota::interpreter::{evaluator::core::evaluate, parser::core::parse};
///
/// let expr = parse("2^3+1").unwrap();
/// let tree = evaluate(&expr).unwrap();
///
/// assert_eq!(tree.value(), 9);
/// assert_eq!(tree.annotation(), "exp -> exp + term : 8 + 1 = 9");
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<AnnotatedNode> {
    let tree = eval_node(expr)?;
    debug!(value = tree.value(), "evaluated {expr}");
    Ok(tree)
}

fn eval_node(expr: &Expr) -> EvalResult<AnnotatedNode> {
    match expr {
        Expr::Constant { value, .. } => {
            Ok(AnnotatedNode::constant(*value, constant_annotation(*value)))
        },
        Expr::Operation { op,
                          left,
                          right,
                          position,
                          .. } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            let value = eval_binary(*op, left.value(), right.value(), *position)?;
            let annotation = operation_annotation(*op, left.value(), right.value(), value);
            trace!(position, "{annotation}");
            Ok(AnnotatedNode::operation(*op, left, right, value, annotation))
        },
    }
}
