use logos::Logos;

/// The category of a lexical token.
///
/// The scanner is derived with `logos`. Runs are matched greedily and never
/// read past the end of the input. Any Unicode whitespace separates tokens
/// and is dropped. Characters that match no rule surface as
/// lexer errors and are turned into [`TokenKind::Unknown`] by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// A run of ASCII digits, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+` or `-`
    #[token("+")]
    #[token("-")]
    AdditiveOp,
    /// `*` or `/`
    #[token("*")]
    #[token("/")]
    MultiplicativeOp,
    /// `^`
    #[token("^")]
    ExponentOp,
    /// A run of letters naming a function, such as `sin` or `atan`.
    ///
    /// A run never starts with `x`, which is always the variable.
    #[regex(r"[a-wyzA-Z][a-zA-Z]*")]
    Function,
    /// `x`
    #[token("x")]
    Variable,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Any character no other rule accepts.
    Unknown,
}

/// Lexeme recorded for every [`TokenKind::Unknown`] token.
pub const UNKNOWN_LEXEME: &str = "??";

/// A token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The raw source text of the token, or [`UNKNOWN_LEXEME`].
    pub lexeme:   String,
    /// Byte offset of the token in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token of `kind` starting at byte offset `position`.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               position }
    }

    /// First character of the lexeme.
    ///
    /// Operators and the variable are single characters, so this is the whole
    /// token for them.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.lexeme.chars().next()
    }
}

/// Splits `source` into tokens.
///
/// Never fails: unrecognized characters become [`TokenKind::Unknown`] tokens
/// with the lexeme `"??"`, one per character, and are rejected later by the
/// parser.
///
/// # Example
/// ```
/// use trigcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("sin(12) ^ x").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Function,
///             TokenKind::OpenParen,
///             TokenKind::Number,
///             TokenKind::CloseParen,
///             TokenKind::ExponentOp,
///             TokenKind::Variable]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span.start)),
            Err(()) => {
                // One token per character starting inside the error span.
                tokens.extend(span.filter(|&offset| source.is_char_boundary(offset))
                                  .map(|offset| Token::new(TokenKind::Unknown, UNKNOWN_LEXEME, offset)));
            },
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized input");
    tokens
}
