/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The tree contains a node kind the evaluator does not know.
    #[error("unsupported expression: {kind}")]
    UnsupportedNode {
        /// Name of the node kind.
        kind: String,
    },
    /// The operator has no entry in the operator table in use.
    #[error("unsupported {arity} operator '{operator}' at column {column}")]
    UnsupportedOperator {
        /// The operator symbol.
        operator: String,
        /// `"unary"` or `"binary"`.
        arity:    &'static str,
        /// Column of the operator in the source.
        column:   usize,
    },
    /// The numeric operation itself failed.
    #[error("{cause} (at column {column})")]
    ArithmeticFailure {
        /// The underlying numeric fault.
        #[source]
        cause:  ArithmeticError,
        /// Column of the operator in the source.
        column: usize,
    },
    /// The tree nests deeper than the evaluator allows.
    #[error("expression nested too deeply (limit {limit})")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
}

/// A runtime numeric fault raised by one of the operator functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// `x / 0`
    #[error("division by zero")]
    DivisionByZero,
    /// `x // 0`
    #[error("floor division by zero")]
    FloorDivisionByZero,
    /// `x % 0`
    #[error("modulo by zero")]
    ModuloByZero,
    /// `0 ** -n`
    #[error("0 cannot be raised to a negative power")]
    ZeroToNegativePower,
    /// A negative base raised to a fractional exponent has no real result.
    #[error("negative number cannot be raised to a fractional power")]
    ComplexResult,
    /// The result does not fit the numeric type.
    #[error("numeric result out of range: {0}")]
    Overflow(&'static str),
    /// An integer operand had to become a float but is too large for `f64`.
    #[error("integer too large to convert to float")]
    IntTooLargeForFloat,
}
