/// Parser entry points and the token stream.
///
/// Tokenizes the source, drives the descent from the lowest precedence level
/// and enforces that nothing follows a complete expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix signs, numeric literals, parenthesised groups and the
/// rejection of every non-arithmetic construct.
pub mod unary;

pub use self::core::{DEFAULT_MAX_DEPTH, parse, parse_with_limit};
