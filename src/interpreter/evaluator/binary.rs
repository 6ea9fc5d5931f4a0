use crate::ast::BinaryOperator;

/// Applies a binary operator to two evaluated operands.
///
/// Plain IEEE-754 double arithmetic: division by zero and overflow produce
/// infinities or NaN. Exponentiation accepts negative and fractional
/// exponents with the semantics of [`f64::powf`].
///
/// # Example
/// ```
/// use trigcalc::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, -1.0), 0.5);
/// assert!(apply_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::Pow => lhs.powf(rhs),
    }
}
