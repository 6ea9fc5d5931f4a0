use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::apply_binary, function::call_builtin},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns its value.
///
/// The traversal is post-order: operands are evaluated (left before right)
/// before the operator or function applied to them. Evaluation is pure, so the
/// same tree always produces the same value.
///
/// - Literals evaluate to themselves.
/// - `+ - * /` follow IEEE-754; dividing by zero yields an infinity or NaN,
///   not an error.
/// - `^` is [`f64::powf`].
/// - Functions are the builtin trigonometric functions, in radians.
/// - The variable is not bound to anything and always evaluates to NaN.
///
/// # Errors
/// [`EvalError::UnknownFunction`] if the tree calls a function that is not a
/// builtin.
///
/// # Examples
/// ```
/// use trigcalc::interpreter::{evaluator::core::eval, parser::parse};
///
/// assert_eq!(eval(&parse("2+3*4").unwrap()).unwrap(), 14.0);
/// assert!(eval(&parse("x+1").unwrap()).unwrap().is_nan());
/// assert!(eval(&parse("sqrt(4)").unwrap()).is_err());
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    let value = match expr {
        Expr::NumericLiteral(value) => *value,
        Expr::Identifier(_) => f64::NAN,
        Expr::BinaryExpression { op, left, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            apply_binary(*op, lhs, rhs)
        },
        Expr::MathFunction { name, argument } => {
            let arg = eval(argument)?;
            call_builtin(name, arg)?
        },
    };

    tracing::trace!(node = %expr, value, "evaluated");
    Ok(value)
}
