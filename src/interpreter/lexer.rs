use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literals carry their decoded value; every other token is fully described
/// by its variant.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Imaginary literal tokens, a real literal directly followed by `j` or
    /// `i`, such as `2j` or `1.5e3i`. The value is the imaginary part.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[ij]", parse_imaginary)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[ij]", parse_imaginary)]
    Imaginary(f64),
    /// Identifier tokens; variable, constant or function names such as `x`
    /// or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^` or `**`
    #[token("^")]
    #[token("**")]
    Power,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Statement separators, `;` or a newline.
    #[token(";")]
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Token::Separator
    })]
    Separator,
}

impl Token {
    /// Returns `true` for real and imaginary number literals.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Imaginary(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Imaginary(n) => write!(f, "{n}j"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Power => write!(f, "^"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Separator => write!(f, "end of statement"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset it starts at, so token
/// positions can be reported as line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number in bytes, starting at 1.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The output of [`tokenize`]: the tokens in source order and the position
/// just past the last character, used to report errors at end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Tokens paired with their start positions.
    pub tokens: Vec<(Token, Position)>,
    /// Position of the end of input.
    pub end:    Position,
}

/// Converts source text into a flat sequence of positioned tokens.
///
/// # Errors
/// - `UnexpectedCharacter` for text that starts no token.
/// - `MalformedLiteral` when a number literal runs straight into another
///   literal, an identifier or a stray `.`, as in `1e`, `1.2.3`, `2jx` or `1.`.
///
/// # Example
/// ```
/// use mapa::interpreter::lexer::{Token, tokenize};
///
/// let lexed = tokenize("3 ** 2j").unwrap();
/// let tokens: Vec<_> = lexed.tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(tokens, vec![Token::Number(3.0), Token::Power, Token::Imaginary(2.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Lexed, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();
    // Byte span of the previous token when it was a number literal.
    let mut previous_literal: Option<(usize, usize)> = None;

    loop {
        let (line, line_start) = (lexer.extras.line, lexer.extras.line_start);
        let Some(result) = lexer.next() else {
            break;
        };
        let span = lexer.span();
        let position = Position { line,
                                  column: span.start - line_start + 1 };
        let glued = previous_literal.filter(|(_, end)| *end == span.start);

        let token = match result {
            Ok(token) => token,
            Err(()) => {
                if let Some((start, _)) = glued {
                    return Err(malformed(source, start, span.end, &tokens));
                }
                return Err(ParseError::UnexpectedCharacter { character: lexer.slice()
                                                                             .to_string(),
                                                             position });
            },
        };

        if let Some((start, _)) = glued
           && (token.is_literal() || matches!(token, Token::Identifier(_)))
        {
            return Err(malformed(source, start, span.end, &tokens));
        }

        previous_literal = token.is_literal().then_some((span.start, span.end));
        tokens.push((token, position));
    }

    let end = Position { line:   lexer.extras.line,
                         column: source.len() - lexer.extras.line_start + 1, };

    Ok(Lexed { tokens, end })
}

/// Builds a `MalformedLiteral` error covering `source[start..end]`, reported
/// at the position of the literal that was already pushed.
fn malformed(source: &str, start: usize, end: usize, tokens: &[(Token, Position)]) -> ParseError {
    let position = tokens.last().map(|(_, p)| *p).unwrap_or_default();
    ParseError::MalformedLiteral { literal: source[start..end].to_string(),
                                   position }
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float, which turns into a lexer
///   error.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an imaginary literal, dropping the trailing unit suffix.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}
