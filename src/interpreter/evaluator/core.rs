use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::eval_binary_op};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches based on expression variant: literals yield their value
/// directly, and binary operations evaluate both operands before applying
/// the operator. Evaluation holds no state of its own, so separate calls
/// share nothing.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed floating-point value, or the first runtime fault
/// encountered, which aborts the remaining evaluation.
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::BinaryOp { left, op, right, column } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary_op(*op, left, right, *column)
        },
    }
}
