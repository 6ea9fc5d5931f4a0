#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant carries the byte offset of the offending token, or the
/// offset just past the last token when the input ended too early.
pub enum ParseError {
    /// The input contains a character the tokenizer could not classify.
    InvalidCharacter {
        /// Byte offset of the first such character.
        position: usize,
    },
    /// Found a token where the grammar does not allow it.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A number token could not be read as a floating-point value.
    InvalidNumber {
        /// The offending lexeme.
        lexeme:   String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A number literal is too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// The offending lexeme.
        lexeme:   String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The expression tree or the parentheses nest deeper than allowed.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset of the token that crossed the limit.
        position: usize,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// Offset just past the last token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the token found instead, or just past the last
        /// token.
        position: usize,
    },
    /// Tokens remain after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { position } => {
                write!(f, "Syntax error at {position}: Unrecognized character.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at {position}: Unexpected token: {token}.")
            },
            Self::InvalidNumber { lexeme, position } => {
                write!(f, "Syntax error at {position}: Invalid number literal '{lexeme}'.")
            },
            Self::LiteralTooLarge { lexeme, position } => {
                let digits = lexeme.len();
                write!(f, "Syntax error at {position}: Literal is too large ({digits} digits).")
            },
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Syntax error at {position}: Expression nests deeper than {limit} levels."),
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at {position}: Unexpected end of input.")
            },
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Syntax error at {position}: Expected closing parenthesis ')' but none found."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Syntax error at {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
