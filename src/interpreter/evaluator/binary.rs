use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary arithmetic operation on floating-point operands.
///
/// The operator must be one of `Add`, `Sub`, `Mul` or `Div`. Division is
/// checked explicitly: the right operand is compared against zero before the
/// division is performed, so no partial result escapes a faulting line.
/// Division is floating-point division, never integer truncation.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use linecalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// let result = eval_binary_op(BinaryOperator::Mul, 6.0, 7.0, 0).unwrap();
/// assert_eq!(result, 42.0);
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: f64, right: f64, column: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { column });
            }
            Ok(left / right)
        },
    }
}
