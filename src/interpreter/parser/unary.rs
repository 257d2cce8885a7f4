use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::{TokenStream, parse_arguments, unexpected},
        },
        value::complex::ComplexNumber,
    },
};

/// Parses a unary expression.
///
/// Supports prefix signs:
/// - `-`  (numeric negation)
/// - `+`  (accepted and dropped)
///
/// Signs are right-associative and may repeat, so `--x` is `-(-x)`. A sign
/// binds looser than `^`, so `-2^2` is `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if tokens.next_if(&Token::Minus).is_some() {
        let expr = parse_unary(tokens)?;
        return Ok(negate(expr));
    }
    if tokens.next_if(&Token::Plus).is_some() {
        return parse_unary(tokens);
    }
    parse_power(tokens)
}

/// Parses the prefix square root, `%x`, the tightest-binding operator.
///
/// Grammar:
/// ```text
///     prefix_root := "%" root_operand
///                  | primary
/// ```
pub(crate) fn parse_prefix_root(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if tokens.next_if(&Token::Percent).is_some() {
        let expr = parse_root_operand(tokens)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Root,
                                  expr: Box::new(expr), });
    }
    parse_primary(tokens)
}

/// Parses an operand of either root form, which may carry a sign of its own
/// (`%-4`, `3%-8`).
///
/// Grammar: `root_operand := ("-" | "+") root_operand | prefix_root`
pub(crate) fn parse_root_operand(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if tokens.next_if(&Token::Minus).is_some() {
        let expr = parse_root_operand(tokens)?;
        return Ok(negate(expr));
    }
    if tokens.next_if(&Token::Plus).is_some() {
        return parse_root_operand(tokens);
    }
    parse_prefix_root(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IMAGINARY
///              | IDENT
///              | IDENT "(" arguments ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `MissingOperand` when the input, the statement or the bracket ends, or
///   an operator sits where an operand belongs.
/// - `MisplacedAssignment` for an `=` here.
/// - `ExpectedClosingParen` for a `(` that is never closed.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let position = tokens.position();
    let Some(token) = tokens.peek() else {
        return Err(ParseError::MissingOperand { position });
    };

    match token {
        Token::Number(n) => {
            tokens.next();
            Ok(Expr::literal(*n))
        },
        Token::Imaginary(n) => {
            tokens.next();
            Ok(Expr::literal(ComplexNumber::new(0.0, *n)))
        },
        Token::Identifier(name) => {
            tokens.next();
            let open = tokens.position();
            if tokens.next_if(&Token::LParen).is_some() {
                let arguments = parse_arguments(tokens, open)?;
                return Ok(Expr::FunctionCall { name: name.clone(),
                                               arguments });
            }
            Ok(Expr::variable(name.clone()))
        },
        Token::LParen => {
            tokens.next();
            parse_grouping(tokens, position)
        },
        Token::Equals => Err(ParseError::MisplacedAssignment { position }),
        Token::Separator
        | Token::RParen
        | Token::Comma
        | Token::Plus
        | Token::Minus
        | Token::Star
        | Token::Slash
        | Token::Power
        | Token::Percent => Err(ParseError::MissingOperand { position }),
    }
}

/// Parses the inside of a parenthesized expression, after its `(`.
///
/// The inner expression is returned as-is; no wrapper node is created.
fn parse_grouping(tokens: &mut TokenStream<'_>, open: Position) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((Token::Separator, _)) | None => Err(ParseError::ExpectedClosingParen { position: open }),
        Some((token, position)) => Err(unexpected(token, *position)),
    }
}

fn negate(expr: Expr) -> Expr {
    Expr::UnaryOp { op:   UnaryOperator::Negate,
                    expr: Box::new(expr), }
}
