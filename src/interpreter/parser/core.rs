use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            binary::parse_additive,
            statement::parse_statement,
            utils::{TokenStream, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into its statements.
///
/// Statements are separated by one or more `;` or newlines; leading,
/// trailing and repeated separators produce no statements, so a blank
/// program parses to an empty list.
///
/// Grammar: `program := separator* (statement (separator+ statement)*)?
/// separator*`
///
/// # Errors
/// Returns the first grammar violation found. Nothing is evaluated before
/// the whole program has parsed.
///
/// # Example
/// ```
/// use mapa::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let lexed = tokenize("x = 2;;\n x * 3\n").unwrap();
/// let statements = parse_program(&lexed).unwrap();
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[1].to_string(), "x * 3");
/// ```
pub fn parse_program(lexed: &Lexed) -> ParseResult<Vec<Statement>> {
    let mut tokens = TokenStream::new(&lexed.tokens, lexed.end);
    let mut statements = Vec::new();

    loop {
        while tokens.next_if(&Token::Separator).is_some() {}
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(&mut tokens)?);
        match tokens.next() {
            Some((Token::Separator, _)) | None => {},
            Some((token, position)) => return Err(unexpected(token, *position)),
        }
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_additive(tokens)
}
