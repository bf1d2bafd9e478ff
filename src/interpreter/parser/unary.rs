use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_additive, parse_power},
            core::{ParseResult, TokenStream},
        },
        value::Number,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. They are right-associative, so
/// `- -x` is `-(-x)`, and they bind looser than `**` on their right, so
/// `-2 ** 2` is `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some((sign @ (Token::Minus | Token::Plus), column)) = tokens.peek() else {
        return parse_power(tokens);
    };
    let op = if *sign == Token::Minus {
        UnaryOperator::Minus
    } else {
        UnaryOperator::Plus
    };
    tokens.next();

    tokens.descend(*column)?;
    let expr = parse_unary(tokens)?;
    tokens.ascend();

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       column: *column })
}

/// Parses a primary (atomic) expression: a numeric literal or a
/// parenthesised expression.
///
/// Every other token is rejected here with the most specific error
/// available, so names, strings and non-arithmetic operators never reach the
/// tree.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" additive ")"
/// ```
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let end = tokens.end();
    match tokens.next() {
        Some((Token::Integer(n), column)) => Ok(Expr::Number { value:  Number::Int(n.clone()),
                                                               column: *column, }),
        Some((Token::Float(f), column)) => Ok(Expr::Number { value:  Number::Float(*f),
                                                             column: *column, }),
        Some((Token::LParen, column)) => parse_grouping(tokens, *column),
        Some((token, column)) => Err(reject(token, *column)),
        None => Err(ParseError::UnexpectedEndOfInput { column: end }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The enclosed expression is returned as-is (no wrapper node). A missing
/// `)` yields `ParseError::ExpectedClosingParen` pointing at the `(`.
///
/// Grammar: `grouping := "(" additive ")"`
fn parse_grouping(tokens: &mut TokenStream<'_>, column: usize) -> ParseResult<Expr> {
    tokens.descend(column)?;
    let expr = parse_additive(tokens)?;
    tokens.ascend();

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, at)) => Err(reject(token, *at)),
        None => Err(ParseError::ExpectedClosingParen { column }),
    }
}

/// Builds the error for a token that cannot appear where it was found.
///
/// Names, strings and non-arithmetic symbols get dedicated errors; any other
/// token is simply unexpected.
#[must_use]
pub fn reject(token: &Token, column: usize) -> ParseError {
    match token {
        Token::Identifier(name) => ParseError::NameNotAllowed { name: name.clone(),
                                                                column },
        Token::Str(literal) => ParseError::StringNotAllowed { literal: literal.clone(),
                                                              column },
        Token::Symbol(operator) => ParseError::UnsupportedOperator { operator: operator.clone(),
                                                                     column },
        other => ParseError::UnexpectedToken { token: other.to_string(),
                                               column },
    }
}
