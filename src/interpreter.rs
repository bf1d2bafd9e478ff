/// The evaluator module computes the value of a parsed tree.
///
/// The evaluator walks the tree post-order, looks every operator up in an
/// operator table and applies the matching numeric function. It holds no
/// mutable state.
///
/// # Responsibilities
/// - Dispatches operators through a whitelist table.
/// - Attaches source columns to arithmetic failures.
/// - Bounds recursion on hand-built trees.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// Besides the arithmetic vocabulary it also recognises names, strings and
/// other symbols, so the parser can reject them with a precise error instead
/// of a generic one.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// A recursive descent parser with one function per precedence level. Only
/// the productions of the arithmetic grammar create nodes; any other token is
/// a `ParseError`.
///
/// # Responsibilities
/// - Encodes precedence and associativity, including `-2 ** 2 == -4`.
/// - Reports errors with 1-based character columns.
/// - Limits nesting depth so hostile input cannot exhaust the stack.
pub mod parser;
/// The value module defines the `Number` type and its operators.
///
/// Numbers are exact big integers or `f64` floats. Mixed operations promote to
/// float, `/` always produces a float, and `//` and `%` round toward negative
/// infinity.
pub mod value;
