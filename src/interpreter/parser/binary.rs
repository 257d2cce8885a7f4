use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_prefix_root, parse_root_operand, parse_unary},
            utils::TokenStream,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Both operands are unary
/// expressions, so `2 * -x` needs no parentheses.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        tokens.next();
        let right = parse_unary(tokens)?;
        left = binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. The exponent may carry its own sign, and that sign applies
/// to the whole remaining power chain, so `2 ^ -3 ^ 2` is `2 ^ -(3 ^ 2)`.
///
/// The rule is: `power := root ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let base = parse_root(tokens)?;
    if tokens.next_if(&Token::Power).is_some() {
        let exponent = parse_unary(tokens)?;
        return Ok(binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}

/// Parses binary root expressions, `index % radicand`.
///
/// Binds tighter than `^` and groups to the left, so `3%8^2` is
/// `(3%8)^2` and `2%3%64` is `(2%3)%64`. The radicand may be signed.
///
/// The rule is: `root := prefix_root ("%" root_operand)*`
pub fn parse_root(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_prefix_root(tokens)?;
    while tokens.next_if(&Token::Percent).is_some() {
        let right = parse_root_operand(tokens)?;
        left = binary(left, BinaryOperator::Root, right);
    }
    Ok(left)
}

/// Maps a token to its binary operator, if it is one.
///
/// `%` maps to [`BinaryOperator::Root`]; whether it is the prefix or infix
/// form is decided by position, not here.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Power => Some(BinaryOperator::Pow),
        Token::Percent => Some(BinaryOperator::Root),
        _ => None,
    }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}
