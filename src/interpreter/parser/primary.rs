use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Subtree},
    },
};

impl Parser {
    /// Parses a primary expression.
    ///
    /// The front token decides the production: `(` starts a parenthesized
    /// expression, a function name starts a call, anything else must be a
    /// literal.
    ///
    /// Grammar: `primary := parenthesized | function | literal`
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Subtree> {
        match self.peek_kind() {
            Some(TokenKind::OpenParen) => self.parse_parenthesized(),
            Some(TokenKind::Function) => self.parse_function(),
            _ => self.parse_literal(),
        }
    }

    /// Grammar: `parenthesized := "(" expression ")"`
    ///
    /// # Errors
    /// - `UnexpectedToken` if the front token is not `(`.
    /// - `ExpectedClosingParen` if the inner expression is not followed by
    ///   `)`, including when the input ends.
    /// - `NestingTooDeep` if this group nests deeper than the configured
    ///   depth.
    fn parse_parenthesized(&mut self) -> ParseResult<Subtree> {
        let open = self.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(unexpected(open));
        }

        self.enter_group(open.position)?;
        let inner = self.parse_expression()?;
        self.leave_group();

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::CloseParen => Ok(inner),
            Ok(token) => Err(ParseError::ExpectedClosingParen { position: token.position }),
            Err(_) => Err(ParseError::ExpectedClosingParen { position: self.end() }),
        }
    }

    /// Grammar: `function := FUNCTION parenthesized`
    fn parse_function(&mut self) -> ParseResult<Subtree> {
        let token = self.next_token()?;
        let argument = self.parse_parenthesized()?;
        let depth = argument.depth + 1;
        self.check_depth(depth, token.position)?;
        Ok(Subtree { expr: Expr::function(token.lexeme, argument.expr),
                     depth })
    }

    /// Grammar: `literal := NUMBER | VARIABLE`
    ///
    /// # Errors
    /// - `InvalidNumber` if a number lexeme is not a floating-point value.
    /// - `LiteralTooLarge` if it is outside the finite `f64` range.
    fn parse_literal(&mut self) -> ParseResult<Subtree> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Subtree::leaf(Expr::NumericLiteral(value))),
                Ok(_) => Err(ParseError::LiteralTooLarge { lexeme:   token.lexeme,
                                                           position: token.position, }),
                Err(_) => Err(ParseError::InvalidNumber { lexeme:   token.lexeme,
                                                          position: token.position, }),
            },
            TokenKind::Variable => match token.first_char() {
                Some(name) => Ok(Subtree::leaf(Expr::Identifier(name))),
                None => Err(unexpected(token)),
            },
            _ => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: Token) -> ParseError {
    ParseError::UnexpectedToken { token:    token.lexeme,
                                  position: token.position, }
}
