/// Parser state, configuration and entry points.
///
/// Holds the owned token stream and the trailing-input policy, and exposes
/// [`parse`] and [`parse_with`].
pub mod core;

/// Binary operator tiers.
///
/// Parses the additive, multiplicative and exponentiative tiers through one
/// shared left fold.
pub mod binary;

/// Primary expressions: parenthesized expressions, function calls and
/// literals.
pub mod primary;

pub use self::core::{
    DEFAULT_MAX_DEPTH, ParseResult, Parser, ParserConfig, TrailingTokens, parse, parse_with,
};
