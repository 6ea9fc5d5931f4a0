//! # trigcalc
//!
//! trigcalc reads a textual arithmetic expression and computes its value.
//! Expressions combine integers, the operators `+ - * / ^`, parentheses, the
//! trigonometric functions `sin cos tan asin acos atan` (in radians) and the
//! variable `x`, which is never bound and evaluates to NaN.
//!
//! The work happens in three stages: [`interpreter::lexer::tokenize`],
//! [`interpreter::parser::parse`] and [`interpreter::evaluator::core::eval`].
//! [`evaluate`] runs all three.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval,
    parser::{ParserConfig, parse_with},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The tree is built by the parser and
/// traversed by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the tokenizer, parser and evaluator.
///
/// Exposes each stage on its own so callers can inspect tokens or keep a
/// parsed tree around and evaluate it repeatedly.
pub mod interpreter;

/// Parses and evaluates `source` in one call.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use trigcalc::{evaluate, interpreter::parser::ParserConfig};
///
/// let value = evaluate("(2+3)*4", &ParserConfig::default()).unwrap();
/// assert_eq!(value, 20.0);
///
/// // `@` is not part of the language.
/// assert!(evaluate("2+@", &ParserConfig::default()).is_err());
/// ```
pub fn evaluate(source: &str, config: &ParserConfig) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse_with(source, config)?;
    let value = eval(&expr)?;
    tracing::debug!(value, "evaluated expression");
    Ok(value)
}
