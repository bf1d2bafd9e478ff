use std::fmt;

use logos::Logos;
use num_bigint::BigInt;

use crate::util::num::strip_separators;

/// Represents a lexical token in the source input.
///
/// Besides the arithmetic vocabulary, the lexer also recognises names,
/// strings and common non-arithmetic symbols. They are never valid, but
/// tokenizing them lets the parser say precisely what was rejected.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Float literal tokens, such as `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9][0-9_]*\.([0-9][0-9_]*)?([eE][+-]?[0-9][0-9_]*)?", parse_float)]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?", parse_float)]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`, `1_000`, `0xff`, `0o17` or
    /// `0b101`.
    #[regex(r"[0-9][0-9_]*", parse_decimal)]
    #[regex(r"0[xXoObB][0-9a-zA-Z_]*", parse_prefixed)]
    Integer(BigInt),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Identifiers and keywords, such as `x`, `import` or `abs`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Quoted string literals, kept with their quotes.
    #[token("'", lex_string)]
    #[token("\"", lex_string)]
    Str(String),
    /// Comparison, assignment, bitwise and bracketing symbols.
    #[regex(r"==|!=|<=|>=|<<|>>|:=|->|[<>=!&|^~@,;:\[\]{}.]", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `# Comments.`
    #[token("#", skip_comment)]
    Comment,
    /// Spaces, tabs, feeds and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Failure while forming a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// The text looks like a number but is not a valid literal.
    InvalidLiteral(String),
    /// A quote was opened but not closed on the same line.
    UnterminatedString,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::DoubleStar => write!(f, "**"),
            Self::Star => write!(f, "*"),
            Self::DoubleSlash => write!(f, "//"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Identifier(s) | Self::Str(s) | Self::Symbol(s) => write!(f, "{s}"),
            Self::Comment | Self::Ignored => Ok(()),
        }
    }
}

/// Consumes a comment up to the end of the line.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    lex.bump(rest.find(['\n', '\r']).unwrap_or(rest.len()));
    logos::Skip
}

/// Consumes a quoted string up to its closing quote on the same line.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let quote = lex.slice();
    let rest = lex.remainder();
    let line = rest.find(['\n', '\r']).map_or(rest, |end| &rest[..end]);
    let end = line.find(quote).ok_or(LexError::UnterminatedString)?;
    lex.bump(end + 1);
    Ok(lex.slice().to_string())
}

/// Parses a float literal from the current token slice.
///
/// Digit separators are validated and removed first.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    let (mantissa, exponent) = match slice.find(['e', 'E']) {
        Some(at) => (&slice[..at], Some(&slice[at + 1..])),
        None => (slice, None),
    };

    let mut cleaned = String::with_capacity(slice.len());
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if !whole.is_empty() {
        cleaned.push_str(&strip_separators(whole, 10, false).map_err(LexError::InvalidLiteral)?);
    }
    cleaned.push('.');
    if !fraction.is_empty() {
        cleaned.push_str(&strip_separators(fraction, 10, false).map_err(LexError::InvalidLiteral)?);
    }
    if let Some(exponent) = exponent {
        let (sign, digits) = match exponent.strip_prefix(['+', '-']) {
            Some(digits) => (&exponent[..1], digits),
            None => ("", exponent),
        };
        cleaned.push('e');
        cleaned.push_str(sign);
        cleaned.push_str(&strip_separators(digits, 10, false).map_err(LexError::InvalidLiteral)?);
    }

    cleaned.parse()
           .map_err(|_| LexError::InvalidLiteral("not a valid float".to_string()))
}

/// Parses a decimal integer literal from the current token slice.
///
/// Non-zero integers may not start with `0`; write `0o17` for octal.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<BigInt, LexError> {
    let digits = strip_separators(lex.slice(), 10, false).map_err(LexError::InvalidLiteral)?;
    if digits.len() > 1 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
        return Err(LexError::InvalidLiteral("leading zeros are not permitted; use 0o for octal".to_string()));
    }
    digits.parse()
          .map_err(|_| LexError::InvalidLiteral("not a valid integer".to_string()))
}

/// Parses a `0x`, `0o` or `0b` integer literal from the current token slice.
fn parse_prefixed(lex: &logos::Lexer<Token>) -> Result<BigInt, LexError> {
    let slice = lex.slice();
    let radix = match &slice[1..2] {
        "x" | "X" => 16,
        "o" | "O" => 8,
        _ => 2,
    };
    let digits = strip_separators(&slice[2..], radix, true).map_err(LexError::InvalidLiteral)?;
    BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
                                                    LexError::InvalidLiteral("not a valid integer".to_string())
                                                })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Result<Token, LexError>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn arithmetic_tokens() {
        assert_eq!(lex("2 ** -3 // (4 % 5)"),
                   vec![Ok(Token::Integer(2.into())),
                        Ok(Token::DoubleStar),
                        Ok(Token::Minus),
                        Ok(Token::Integer(3.into())),
                        Ok(Token::DoubleSlash),
                        Ok(Token::LParen),
                        Ok(Token::Integer(4.into())),
                        Ok(Token::Percent),
                        Ok(Token::Integer(5.into())),
                        Ok(Token::RParen)]);
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(lex("1_000 0x_FF 0o17 0b101"),
                   vec![Ok(Token::Integer(1000.into())),
                        Ok(Token::Integer(255.into())),
                        Ok(Token::Integer(15.into())),
                        Ok(Token::Integer(5.into()))]);
        assert_eq!(lex("3.25 .5 5. 1e3 2.5E-1 1_0.0_1"),
                   vec![Ok(Token::Float(3.25)),
                        Ok(Token::Float(0.5)),
                        Ok(Token::Float(5.0)),
                        Ok(Token::Float(1000.0)),
                        Ok(Token::Float(0.25)),
                        Ok(Token::Float(10.01))]);
        assert_eq!(lex("00 0"),
                   vec![Ok(Token::Integer(0.into())), Ok(Token::Integer(0.into()))]);
    }

    #[test]
    fn malformed_literals() {
        assert!(matches!(lex("0123")[..], [Err(LexError::InvalidLiteral(_))]));
        assert!(matches!(lex("1__0")[..], [Err(LexError::InvalidLiteral(_))]));
        assert!(matches!(lex("0x")[..], [Err(LexError::InvalidLiteral(_))]));
        assert!(matches!(lex("0b102")[..], [Err(LexError::InvalidLiteral(_))]));
        assert!(matches!(lex("1_.5")[..], [Err(LexError::InvalidLiteral(_))]));
    }

    #[test]
    fn rejected_vocabulary_is_still_tokenized() {
        assert_eq!(lex("x == 'a' # trailing"),
                   vec![Ok(Token::Identifier("x".to_string())),
                        Ok(Token::Symbol("==".to_string())),
                        Ok(Token::Str("'a'".to_string()))]);
        assert_eq!(lex("$"), vec![Err(LexError::UnexpectedCharacter)]);
        assert_eq!(lex("\"abc"), vec![Err(LexError::UnterminatedString),
                                     Ok(Token::Identifier("abc".to_string()))]);
    }
}
