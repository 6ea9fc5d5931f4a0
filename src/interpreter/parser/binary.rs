use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Subtree},
    },
};

/// A parse function for one precedence tier.
type Production = fn(&mut Parser) -> ParseResult<Subtree>;

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level and descends through the tiers.
    ///
    /// Grammar: `expression := additive`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Subtree> {
        self.parse_additive()
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Subtree> {
        self.fold_left(TokenKind::AdditiveOp, Self::parse_multiplicative)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `multiplicative := exponentiative (("*" | "/") exponentiative)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Subtree> {
        self.fold_left(TokenKind::MultiplicativeOp, Self::parse_exponentiative)
    }

    /// Parses exponentiation.
    ///
    /// Unlike the usual convention, `^` groups to the left like every other
    /// operator: `a ^ b ^ c` parses as `(a ^ b) ^ c`.
    ///
    /// Grammar: `exponentiative := primary ("^" primary)*`
    fn parse_exponentiative(&mut self) -> ParseResult<Subtree> {
        self.fold_left(TokenKind::ExponentOp, Self::parse_primary)
    }

    /// Parses one left-associative precedence tier.
    ///
    /// Parses an operand with `operand`, then, while the front token is of
    /// kind `operator`, consumes it, parses the next operand, and wraps both
    /// sides into a new binary node that becomes the left side.
    ///
    /// Every iteration deepens the tree by one, so a long chain fails with
    /// `NestingTooDeep` once it passes the configured depth.
    fn fold_left(&mut self, operator: TokenKind, operand: Production) -> ParseResult<Subtree> {
        let mut left = operand(self)?;

        while self.peek_kind() == Some(operator) {
            let token = self.next_token()?;
            let op = token.first_char()
                          .and_then(BinaryOperator::from_symbol)
                          .ok_or_else(|| ParseError::UnexpectedToken { token:    token.lexeme.clone(),
                                                                       position: token.position, })?;
            let right = operand(self)?;
            let depth = left.depth.max(right.depth) + 1;
            self.check_depth(depth, token.position)?;
            left = Subtree { expr: Expr::binary(op, left.expr, right.expr),
                             depth };
        }

        Ok(left)
    }
}
