/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// expression tree: unrecognized characters, unexpected tokens, malformed
/// number literals, unbalanced parentheses and leftover input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while computing the value of a parsed tree.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
