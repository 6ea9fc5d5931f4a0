use std::collections::VecDeque;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// What the parser does with tokens left over after a complete expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingTokens {
    /// Fail with [`ParseError::UnexpectedTrailingTokens`].
    #[default]
    Reject,
    /// Drop the leftover tokens and return the expression parsed so far.
    Ignore,
}

/// Deepest expression tree, and deepest parenthesis nesting, accepted by
/// default.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Settings that change how input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Policy for input after a complete top-level expression.
    pub trailing_tokens: TrailingTokens,
    /// Limit on both the depth of the resulting tree and the nesting of
    /// parentheses. Parsing, evaluating and dropping a tree all recurse over
    /// it, so this bounds their stack use.
    pub max_depth:       usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { trailing_tokens: TrailingTokens::default(),
               max_depth:       DEFAULT_MAX_DEPTH, }
    }
}

/// A parsed expression together with the depth of its tree.
pub(in crate::interpreter::parser) struct Subtree {
    pub expr:  Expr,
    pub depth: usize,
}

impl Subtree {
    pub(in crate::interpreter::parser) fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }
}

/// A recursive-descent parser over an owned token stream.
///
/// The parser only ever looks at the front token and removes tokens from the
/// front as it consumes them. It is single-use: [`Parser::parse`] takes
/// `self`.
#[derive(Debug)]
pub struct Parser {
    tokens:  VecDeque<Token>,
    config:  ParserConfig,
    end:     usize,
    nesting: usize,
}

impl Parser {
    /// Creates a parser that takes ownership of `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<Token>, config: ParserConfig) -> Self {
        let end = tokens.last()
                        .map_or(0, |token| token.position + token.lexeme.len());
        Self { tokens: tokens.into(),
               config,
               end,
               nesting: 0 }
    }

    /// Parses the whole token stream into one expression.
    ///
    /// # Errors
    /// - [`ParseError::InvalidCharacter`] if any token is
    ///   [`TokenKind::Unknown`]; this is checked before anything is parsed.
    /// - Any grammar error from the expression itself.
    /// - [`ParseError::NestingTooDeep`] if the tree or the parentheses nest
    ///   deeper than [`ParserConfig::max_depth`].
    /// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain and the
    ///   configuration rejects them.
    pub fn parse(mut self) -> ParseResult<Expr> {
        if let Some(unknown) = self.tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
            return Err(ParseError::InvalidCharacter { position: unknown.position });
        }

        let expr = self.parse_expression()?.expr;

        if let Some(extra) = self.tokens.front() {
            match self.config.trailing_tokens {
                TrailingTokens::Reject => {
                    return Err(ParseError::UnexpectedTrailingTokens { token:    extra.lexeme.clone(),
                                                                      position: extra.position, });
                },
                TrailingTokens::Ignore => {
                    tracing::debug!(ignored = self.tokens.len(), "dropping trailing tokens");
                },
            }
        }

        tracing::debug!(expression = %expr, "parsed expression");
        Ok(expr)
    }

    /// Kind of the front token, if any.
    pub(in crate::interpreter::parser) fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.front().map(|token| token.kind)
    }

    /// Removes and returns the front token.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedEndOfInput`] when the stream is empty.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> ParseResult<Token> {
        self.tokens
            .pop_front()
            .ok_or(ParseError::UnexpectedEndOfInput { position: self.end })
    }

    /// Fails once `depth` exceeds the configured limit.
    pub(in crate::interpreter::parser) fn check_depth(&self,
                                                      depth: usize,
                                                      position: usize)
                                                      -> ParseResult<()> {
        if depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.config.max_depth,
                                                    position });
        }
        Ok(())
    }

    /// Enters one level of parenthesis nesting.
    pub(in crate::interpreter::parser) fn enter_group(&mut self,
                                                      position: usize)
                                                      -> ParseResult<()> {
        self.nesting += 1;
        self.check_depth(self.nesting, position)
    }

    /// Leaves one level of parenthesis nesting.
    pub(in crate::interpreter::parser) fn leave_group(&mut self) {
        self.nesting -= 1;
    }

    /// Offset just past the last token, reported when input runs out.
    pub(in crate::interpreter::parser) const fn end(&self) -> usize {
        self.end
    }
}

/// Parses `source` with the default configuration.
///
/// Trailing input after a complete expression is rejected.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found.
///
/// # Examples
/// ```
/// use trigcalc::{ast::Expr, interpreter::parser::parse};
///
/// assert_eq!(parse("7").unwrap(), Expr::NumericLiteral(7.0));
/// assert!(parse("(2+3").is_err());
/// assert!(parse("2+@").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with(source, &ParserConfig::default())
}

/// Parses `source` with an explicit configuration.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found.
///
/// # Examples
/// ```
/// use trigcalc::interpreter::parser::{ParserConfig, TrailingTokens, parse_with};
///
/// let lenient = ParserConfig { trailing_tokens: TrailingTokens::Ignore,
///                               ..ParserConfig::default() };
/// assert_eq!(parse_with("1+2 3", &lenient).unwrap().to_string(), "(1 + 2)");
/// assert!(parse_with("1+2 3", &ParserConfig::default()).is_err());
/// ```
pub fn parse_with(source: &str, config: &ParserConfig) -> ParseResult<Expr> {
    Parser::new(tokenize(source), *config).parse()
}
