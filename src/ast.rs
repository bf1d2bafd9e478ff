use std::fmt;

use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Only three shapes exist: numeric literals, unary operations and binary
/// operations. The parser never builds anything else, so names, calls,
/// strings and comparisons are rejected before a tree exists. Every node
/// records the column of the token that introduced it.
///
/// The enum is `#[non_exhaustive]` so downstream code keeps a fallback arm;
/// the evaluator keeps one too and reports unknown shapes as
/// [`EvalError::UnsupportedNode`](crate::error::EvalError::UnsupportedNode).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Expr {
    /// A numeric literal such as `42`, `0x1f` or `2.5e-3`.
    Number {
        /// The literal value.
        value:  Number,
        /// Column of the literal in the source (1-based).
        column: usize,
    },
    /// A prefix operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column of the operator in the source (1-based).
        column: usize,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator in the source (1-based).
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    ///
    /// ## Example
    /// ```
    /// use reckon::{ast::Expr, interpreter::value::Number};
    ///
    /// let expr = Expr::Number { value:  Number::from(7),
    ///                           column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }

    /// Short name of the node kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::UnaryOp { .. } => "unary operation",
            Self::BinaryOp { .. } => "binary operation",
        }
    }
}

/// Renders the tree fully parenthesised, e.g. `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always producing a float.
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`), with the sign of the divisor.
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
