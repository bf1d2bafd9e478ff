use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column: *column };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op,
                      BinaryOperator::Mul
                      | BinaryOperator::Div
                      | BinaryOperator::FloorDiv
                      | BinaryOperator::Mod)
    {
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column: *column };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// The base is a primary, so a sign in front of it belongs to the enclosing
/// unary level: `-2 ** 2` is `-(2 ** 2)`. The exponent is a full unary
/// expression, which makes `**` right-associative (`2 ** 3 ** 2` is
/// `2 ** (3 ** 2)`) and allows signed exponents (`2 ** -1`).
///
/// The rule is: `power := primary ("**" unary)?`
pub fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let base = parse_primary(tokens)?;

    let Some((Token::DoubleStar, column)) = tokens.peek() else {
        return Ok(base);
    };
    tokens.next();

    tokens.descend(*column)?;
    let exponent = parse_unary(tokens)?;
    tokens.ascend();

    Ok(Expr::BinaryOp { left:   Box::new(base),
                        op:     BinaryOperator::Pow,
                        right:  Box::new(exponent),
                        column: *column, })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+ - * / // % **`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
