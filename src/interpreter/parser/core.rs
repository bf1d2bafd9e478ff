use std::{iter::Peekable, slice::Iter};

use logos::Logos;
use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexError, Token},
        parser::{binary::parse_additive, unary::reject},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A token paired with its 1-based source column.
pub type Spanned = (Token, usize);

/// Default limit on nested parentheses, prefix operators and exponent chains.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Lookahead over the tokens of one expression, tracking nesting depth.
pub struct TokenStream<'t> {
    tokens:    Peekable<Iter<'t, Spanned>>,
    depth:     usize,
    max_depth: usize,
    end:       usize,
}

impl<'t> TokenStream<'t> {
    /// Wraps `tokens`; `end` is the column just past the end of the source.
    #[must_use]
    pub fn new(tokens: &'t [Spanned], end: usize, max_depth: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               depth: 0,
               max_depth,
               end }
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'t Spanned> {
        self.tokens.peek().copied()
    }

    /// Column just past the last character of the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Enters one nesting level, failing once the limit is exceeded.
    pub fn descend(&mut self, column: usize) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    column });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves a nesting level entered with [`TokenStream::descend`].
    pub const fn ascend(&mut self) {
        self.depth -= 1;
    }
}

impl<'t> Iterator for TokenStream<'t> {
    type Item = &'t Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source` as a single arithmetic expression.
///
/// Grammar, lowest precedence first:
/// ```text
///     expression     := additive EOF
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/" | "//" | "%") unary)*
///     unary          := ("+" | "-") unary | power
///     power          := primary ("**" unary)?
///     primary        := NUMBER | "(" additive ")"
/// ```
/// Anything else (names, calls, strings, comparisons, assignments) is a
/// [`ParseError`].
///
/// # Example
/// ```
/// use reckon::{error::ParseError, parse};
///
/// assert_eq!(parse("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
/// assert_eq!(parse("-2 ** 2").unwrap().to_string(), "(-(2 ** 2))");
/// assert!(matches!(parse("x + 1"), Err(ParseError::NameNotAllowed { .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], with an explicit nesting limit.
pub fn parse_with_limit(source: &str, max_depth: usize) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut stream = TokenStream::new(&tokens, source.chars().count() + 1, max_depth);

    let expr = parse_expression(&mut stream)?;
    debug!(tree = %expr, "parsed");
    Ok(expr)
}

/// Parses a full expression and requires the input to end there.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_additive(tokens)?;

    match tokens.next() {
        None => Ok(expr),
        Some((token @ (Token::Identifier(_) | Token::Str(_) | Token::Symbol(_)), column)) => {
            Err(reject(token, *column))
        },
        Some((token, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                       column: *column, })
        },
    }
}

/// Splits `source` into tokens tagged with their 1-based columns.
///
/// # Errors
/// - `UnexpectedCharacter` for text no token matches.
/// - `InvalidLiteral` for malformed numbers.
/// - `UnexpectedToken` for an unterminated string.
pub fn tokenize(source: &str) -> ParseResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut offset = 0;
    let mut column = 1;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        column += source[offset..span.start].chars().count();
        offset = span.start;

        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(LexError::UnexpectedCharacter) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character,
                                                             column });
            },
            Err(LexError::InvalidLiteral(reason)) => {
                return Err(ParseError::InvalidLiteral { literal: lexer.slice().to_string(),
                                                        reason,
                                                        column });
            },
            Err(LexError::UnterminatedString) => {
                return Err(ParseError::UnexpectedToken { token: format!("unterminated string {}",
                                                                        lexer.slice()),
                                                         column });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{BinaryOperator, UnaryOperator};

    #[test]
    fn columns_count_characters_not_bytes() {
        let err = tokenize("2 +\u{3000}3").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedCharacter { character: '\u{3000}',
                                                     column:    4, });

        let err = tokenize("é").unwrap_err();
        assert_eq!(err.column(), 1);

        let tokens = tokenize("  12 *  (3)").unwrap();
        let columns: Vec<usize> = tokens.iter().map(|(_, column)| *column).collect();
        assert_eq!(columns, vec![3, 6, 9, 10, 11]);
    }

    #[test]
    fn tree_shape_and_columns() {
        let expr = parse("1 - -2").unwrap();
        let expected =
            Expr::BinaryOp { left:   Box::new(Expr::Number { value:  1_i64.into(),
                                                             column: 1, }),
                             op:     BinaryOperator::Sub,
                             right:  Box::new(Expr::UnaryOp { op:     UnaryOperator::Minus,
                                                              expr:   Box::new(Expr::Number { value:  2_i64.into(),
                                                                                              column: 6, }),
                                                              column: 5, }),
                             column: 3, };
        assert_eq!(expr, expected);
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                              column: 3, }));
        assert_eq!(parse("(1))"),
                   Err(ParseError::UnexpectedTrailingTokens { token:  ")".to_string(),
                                                              column: 4, }));
        assert_eq!(parse("1 == 1"),
                   Err(ParseError::UnsupportedOperator { operator: "==".to_string(),
                                                         column:   3, }));
    }

    #[test]
    fn nesting_limit() {
        let source = format!("{}1{}", "(".repeat(5), ")".repeat(5));
        assert!(parse_with_limit(&source, 5).is_ok());
        assert_eq!(parse_with_limit(&source, 4),
                   Err(ParseError::NestingTooDeep { limit: 4, column: 5 }));

        let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse(&deep), Err(ParseError::NestingTooDeep { limit: 200, .. })));

        let negations = format!("{}1", "-".repeat(10_000));
        assert!(matches!(parse(&negations), Err(ParseError::NestingTooDeep { .. })));
    }
}
