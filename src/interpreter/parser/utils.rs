use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// A peekable cursor over positioned tokens.
///
/// Wraps the token slice produced by the lexer and remembers where the input
/// ends, so errors raised at end of input still carry a real position.
#[derive(Clone)]
pub struct TokenStream<'a> {
    tokens: Peekable<Iter<'a, (Token, Position)>>,
    end:    Position,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`; `end` is reported once they run out.
    #[must_use]
    pub fn new(tokens: &'a [(Token, Position)], end: Position) -> Self {
        Self { tokens: tokens.iter().peekable(),
               end }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().map(|&entry| &entry.0)
    }

    /// Returns the position of the next token, or the end of input.
    pub fn position(&mut self) -> Position {
        self.tokens.peek().map_or(self.end, |entry| entry.1)
    }

    /// Consumes the next token when it equals `expected`.
    pub fn next_if(&mut self, expected: &Token) -> Option<&'a (Token, Position)> {
        self.tokens.next_if(|(token, _)| token == expected)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a (Token, Position);

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Builds the error for a token that may not appear where it was found.
///
/// `=` and `)` get their own variants since they usually point at a
/// misplaced assignment or an unbalanced parenthesis.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, position: Position) -> ParseError {
    match token {
        Token::Equals => ParseError::MisplacedAssignment { position },
        Token::RParen => ParseError::UnmatchedClosingParen { position },
        _ => ParseError::UnexpectedToken { token: token.to_string(),
                                           position },
    }
}

/// Parses a comma-separated argument list up to and including the closing
/// `)`.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `arguments := (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Stream positioned just after the opening `(`.
/// - `open`: Position of the opening `(`, reported when it is never closed.
///
/// # Errors
/// - `ExpectedClosingParen` if the input or statement ends first.
/// - `UnexpectedToken` (or a more specific variant) for any other token
///   between arguments.
pub(in crate::interpreter::parser) fn parse_arguments(tokens: &mut TokenStream<'_>,
                                                      open: Position)
                                                      -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();
    if tokens.next_if(&Token::RParen).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::Separator, _)) | None => {
                return Err(ParseError::ExpectedClosingParen { position: open });
            },
            Some((token, position)) => return Err(unexpected(token, *position)),
        }
    }
    Ok(items)
}
