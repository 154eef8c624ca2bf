use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::pow_checked,
};

/// Applies a binary operator to two evaluated operands.
///
/// All arithmetic is checked. Division and remainder truncate toward zero, so
/// the sign of a remainder follows the dividend. Exponentiation multiplies
/// `left` into an accumulator starting at `1`, `right` times.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator for error reporting.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] / [`EvalError::ModuloByZero`] when `right`
///   is zero.
/// - [`EvalError::NegativeExponent`] when raising to a negative power.
/// - [`EvalError::Overflow`] when the result does not fit in an `i64`. A
///   remainder always fits, so `%` never overflows.
///
/// # Example
/// ```
/// use annota::{ast::Operator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(Operator::Sub, 3, 4, 1), Ok(-1));
/// assert_eq!(eval_binary(Operator::Div, -7, 2, 1), Ok(-3));
/// assert!(eval_binary(Operator::Mod, 5, 0, 1).is_err());
/// ```
pub fn eval_binary(op: Operator, left: i64, right: i64, position: usize) -> EvalResult<i64> {
    let overflow = EvalError::Overflow { op,
                                         left,
                                         right,
                                         position };

    match op {
        Operator::Add => left.checked_add(right).ok_or(overflow),
        Operator::Sub => left.checked_sub(right).ok_or(overflow),
        Operator::Mul => left.checked_mul(right).ok_or(overflow),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { left, position });
            }
            left.checked_div(right).ok_or(overflow)
        },
        Operator::Mod => {
            if right == 0 {
                return Err(EvalError::ModuloByZero { left, position });
            }
            // `i64::MIN % -1` is 0; only the implied quotient overflows.
            Ok(left.wrapping_rem(right))
        },
        Operator::Pow => {
            let exponent = u64::try_from(right).map_err(|_| {
                                                   EvalError::NegativeExponent { exponent: right,
                                                                                 position }
                                               })?;
            pow_checked(left, exponent, overflow)
        },
    }
}
