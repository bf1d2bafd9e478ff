/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 1-based column of the offending text so the
/// message can point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not form any token at this position.
    #[error("unexpected character '{character}' at column {column}")]
    UnexpectedCharacter {
        /// The character that could not be tokenized.
        character: char,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A numeric literal is malformed (bad digit separators, leading zeros,
    /// an empty radix prefix, ...).
    #[error("invalid numeric literal '{literal}' at column {column}: {reason}")]
    InvalidLiteral {
        /// The literal as written.
        literal: String,
        /// Why it was rejected.
        reason:  String,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Found a token that cannot appear at this point of the expression.
    #[error("unexpected token '{token}' at column {column}")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input in the middle of an expression.
    #[error("unexpected end of input at column {column}")]
    UnexpectedEndOfInput {
        /// The column just past the end of the input.
        column: usize,
    },
    /// An opening parenthesis was never closed.
    #[error("expected closing parenthesis ')' for '(' at column {column}")]
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("extra tokens after expression: '{token}' at column {column}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Identifiers (variables, keywords, function names) are never allowed.
    #[error("names are not allowed: '{name}' at column {column}")]
    NameNotAllowed {
        /// The identifier as written.
        name:   String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// String literals are never allowed.
    #[error("only numeric constants are allowed, found string {literal} at column {column}")]
    StringNotAllowed {
        /// The string literal including its quotes.
        literal: String,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A recognised operator or delimiter that is not arithmetic
    /// (comparisons, assignment, brackets, ...).
    #[error("unsupported operator '{operator}' at column {column}")]
    UnsupportedOperator {
        /// The operator as written.
        operator: String,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Parentheses, prefix operators or exponent chains nest deeper than the
    /// parser allows.
    #[error("expression nested too deeply (limit {limit}) at column {column}")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:  usize,
        /// The source column where the limit was exceeded.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based source column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::InvalidLiteral { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::ExpectedClosingParen { column }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::NameNotAllowed { column, .. }
            | Self::StringNotAllowed { column, .. }
            | Self::UnsupportedOperator { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}
