/// Core evaluation logic.
///
/// Contains the post-order tree walk and the evaluator's result type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic of `+`, `-`, `*`, `/` and `^` on doubles.
pub mod binary;

/// Builtin function evaluation.
///
/// Holds the table of trigonometric functions callable from expressions.
pub mod function;
