/// Numeric helpers.
///
/// Float formatting, floor-division arithmetic on floats and validation of
/// digit separators in numeric literals. These are shared by the lexer and the
/// numeric value type.
pub mod num;
