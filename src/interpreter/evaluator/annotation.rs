use crate::ast::Operator;

/// Formats the annotation of a constant node: `comp -> num : V`.
///
/// # Example
/// ```
/// use annota::interpreter::evaluator::annotation::constant_annotation;
///
/// assert_eq!(constant_annotation(7), "comp -> num : 7");
/// ```
#[must_use]
pub fn constant_annotation(value: i64) -> String {
    format!("comp -> num : {value}")
}

/// Formats the annotation of an operation node:
/// `<production> : L <symbol> R = V`.
///
/// # Example
/// ```
/// use annota::{ast::Operator, interpreter::evaluator::annotation::operation_annotation};
///
/// assert_eq!(operation_annotation(Operator::Mod, 10, 3, 1),
///            "term -> term % fac : 10 % 3 = 1");
/// ```
#[must_use]
pub fn operation_annotation(op: Operator, left: i64, right: i64, value: i64) -> String {
    format!("{} : {left} {op} {right} = {value}", op.production())
}
