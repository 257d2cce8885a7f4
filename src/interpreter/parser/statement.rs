use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::TokenStream,
        },
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment or an expression. An identifier
/// directly followed by `=` starts an assignment; anything else is parsed as
/// an expression statement.
///
/// Grammar: `statement := IDENT "=" expression | expression`
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr })
}

/// Parses an assignment of the form `name = expression`.
///
/// Looks two tokens ahead on a copy of the stream; if they are not an
/// identifier followed by `=`, nothing is consumed and `Ok(None)` is
/// returned.
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Statement>> {
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), _)) = lookahead.next() else {
        return Ok(None);
    };
    if lookahead.next_if(&Token::Equals).is_none() {
        return Ok(None);
    }

    *tokens = lookahead;
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value }))
}
