use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a single integer.
///
/// The tree is traversed by structural recursion: a literal returns its
/// value, and a binary operation evaluates both children before combining
/// them with checked arithmetic. The tree is borrowed read-only, so the same
/// tree can be evaluated any number of times with identical results.
///
/// # Errors
/// `RuntimeError::NumericOverflow` if an addition or subtraction overflows
/// `i64`.
///
/// # Examples
/// ```
/// use summa::{ast::Expr, interpreter::evaluator::eval};
///
/// let expr = Expr::Literal { value: 42 };
/// assert_eq!(eval(&expr).unwrap(), 42);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value } => Ok(*value),

        Expr::BinaryOp { op, left, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;

            let result = match op {
                BinaryOperator::Add => lhs.checked_add(rhs),
                BinaryOperator::Subtract => lhs.checked_sub(rhs),
            };

            result.ok_or(RuntimeError::NumericOverflow { left: lhs,
                                                         operator: *op,
                                                         right: rhs, })
        },
    }
}
