use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{evaluator::table::OperatorTable, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on how deeply a tree may nest before evaluation refuses it.
///
/// Only unary operands and right operands count as nesting; a chain such as
/// `1 + 2 + 3` is walked along its left operands without going deeper.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Walks expression trees and computes their values.
///
/// An evaluator only holds its operator whitelist and a depth limit; it has no
/// mutable state, so one instance can evaluate any number of trees, from any
/// number of threads.
///
/// ## Usage
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::evaluator::{Evaluator, OperatorTable},
///     parse,
/// };
///
/// let tree = parse("2 ** 8").unwrap();
///
/// let standard = Evaluator::default();
/// assert_eq!(standard.evaluate(&tree).unwrap().to_string(), "256");
///
/// let no_powers = Evaluator::new(OperatorTable::standard().without_binary(BinaryOperator::Pow));
/// assert!(matches!(no_powers.evaluate(&tree),
///                  Err(EvalError::UnsupportedOperator { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    table:     OperatorTable,
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(OperatorTable::standard())
    }
}

impl Evaluator {
    /// Creates an evaluator restricted to the operators in `table`.
    #[must_use]
    pub const fn new(table: OperatorTable) -> Self {
        Self { table,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Creates a standard evaluator that accepts every tree the parser
    /// produces under `parse_limit`.
    ///
    /// Each parser nesting level (a group, a sign or an exponent) can add at
    /// most two evaluation levels, so the limit is `2 * parse_limit + 3`, and
    /// never lower than [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::Evaluator, parser::parse_with_limit};
    ///
    /// let source = format!("{}1{}", "1 + 2 * (".repeat(300), ")".repeat(300));
    /// let tree = parse_with_limit(&source, 300).unwrap();
    ///
    /// assert!(Evaluator::default().evaluate(&tree).is_err());
    /// assert!(Evaluator::for_parse_limit(300).evaluate(&tree).is_ok());
    /// ```
    #[must_use]
    pub fn for_parse_limit(parse_limit: usize) -> Self {
        let max_depth = parse_limit.saturating_mul(2)
                                   .saturating_add(3)
                                   .max(DEFAULT_MAX_DEPTH);
        Self::default().with_max_depth(max_depth)
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates a tree and returns its value.
    ///
    /// Both operands of a binary operation are always evaluated, left first,
    /// before the operator is applied. The first error aborts the walk.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Number> {
        self.eval(expr, 1)
    }

    fn eval(&self, expr: &Expr, depth: usize) -> EvalResult<Number> {
        if depth > self.max_depth {
            return Err(EvalError::NestingTooDeep { limit: self.max_depth });
        }

        match expr {
            Expr::Number { value, .. } => Ok(value.clone()),
            Expr::UnaryOp { op, expr, column } => {
                let operand = self.eval(expr, depth + 1)?;
                self.eval_unary(*op, &operand, *column)
            },
            Expr::BinaryOp { .. } => self.eval_chain(expr, depth),
            #[allow(unreachable_patterns)]
            other => Err(EvalError::UnsupportedNode { kind: other.kind().to_string() }),
        }
    }

    /// Evaluates a binary operation and every binary operation along its left
    /// operands.
    ///
    /// The left spine is collected with a loop, so a long flat chain such as
    /// `1 + 1 + ... + 1` costs no depth. Right operands are one level deeper.
    fn eval_chain(&self, expr: &Expr, depth: usize) -> EvalResult<Number> {
        let mut spine = Vec::new();
        let mut node = expr;
        while let Expr::BinaryOp { left,
                                   op,
                                   right,
                                   column, } = node
        {
            spine.push((*op, right.as_ref(), *column));
            node = left.as_ref();
        }

        let mut value = self.eval(node, depth)?;
        for (op, right, column) in spine.into_iter().rev() {
            let right = self.eval(right, depth + 1)?;
            value = self.eval_binary(op, &value, &right, column)?;
        }
        Ok(value)
    }

    /// Applies a unary operator looked up in the operator table.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Number},
    /// };
    ///
    /// let v = Evaluator::default().eval_unary(UnaryOperator::Minus, &Number::from(5), 1)
    ///                             .unwrap();
    /// assert_eq!(v, Number::from(-5));
    /// ```
    pub fn eval_unary(&self,
                      op: UnaryOperator,
                      operand: &Number,
                      column: usize)
                      -> EvalResult<Number> {
        let function = self.table
                           .unary(op)
                           .ok_or_else(|| EvalError::UnsupportedOperator { operator: op.to_string(),
                                                                           arity: "unary",
                                                                           column })?;
        let result = function(operand).map_err(|cause| EvalError::ArithmeticFailure { cause,
                                                                                     column })?;
        trace!(%op, %operand, %result, "unary");
        Ok(result)
    }

    /// Applies a binary operator looked up in the operator table.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Number},
    /// };
    ///
    /// let evaluator = Evaluator::default();
    /// let result = evaluator.eval_binary(BinaryOperator::FloorDiv,
    ///                                    &Number::from(-7),
    ///                                    &Number::from(2),
    ///                                    1);
    /// assert_eq!(result.unwrap(), Number::from(-4));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Number,
                       right: &Number,
                       column: usize)
                       -> EvalResult<Number> {
        let function = self.table
                           .binary(op)
                           .ok_or_else(|| EvalError::UnsupportedOperator { operator: op.to_string(),
                                                                           arity: "binary",
                                                                           column })?;
        let result = function(left, right).map_err(|cause| EvalError::ArithmeticFailure { cause,
                                                                                         column })?;
        trace!(%left, %op, %right, %result, "binary");
        Ok(result)
    }
}

/// Evaluates a tree with the standard operator table.
///
/// # Example
/// ```
/// use reckon::{evaluate, parse};
///
/// let tree = parse("7 / 2").unwrap();
/// assert_eq!(evaluate(&tree).unwrap().to_string(), "3.5");
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    Evaluator::default().evaluate(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithmeticError;

    fn num(value: i64, column: usize) -> Box<Expr> {
        Box::new(Expr::Number { value: value.into(),
                                column })
    }

    fn binary(left: Box<Expr>, op: BinaryOperator, right: Box<Expr>, column: usize) -> Box<Expr> {
        Box::new(Expr::BinaryOp { left,
                                  op,
                                  right,
                                  column })
    }

    #[test]
    fn evaluates_hand_built_trees() {
        let tree = binary(num(2, 1), BinaryOperator::Mul, num(21, 5), 3);
        assert_eq!(evaluate(&tree).unwrap(), Number::from(42));
    }

    #[test]
    fn arithmetic_failures_carry_the_operator_column() {
        let tree = binary(num(1, 1), BinaryOperator::Mod, num(0, 5), 3);
        assert_eq!(evaluate(&tree),
                   Err(EvalError::ArithmeticFailure { cause:  ArithmeticError::ModuloByZero,
                                                      column: 3, }));
    }

    #[test]
    fn missing_table_entries_are_reported() {
        let evaluator =
            Evaluator::new(OperatorTable::standard().without_unary(UnaryOperator::Minus));
        let tree = Expr::UnaryOp { op:     UnaryOperator::Minus,
                                   expr:   num(1, 2),
                                   column: 1, };
        assert_eq!(evaluator.evaluate(&tree),
                   Err(EvalError::UnsupportedOperator { operator: "-".to_string(),
                                                        arity:    "unary",
                                                        column:   1, }));
    }

    #[test]
    fn both_operands_are_evaluated_before_combining() {
        // Only the right operand fails.
        let tree = binary(num(1, 1),
                          BinaryOperator::Add,
                          binary(num(1, 5), BinaryOperator::Div, num(0, 9), 7),
                          3);
        assert!(matches!(evaluate(&tree),
                         Err(EvalError::ArithmeticFailure { column: 7, .. })));
    }

    #[test]
    fn deep_trees_hit_the_limit() {
        let mut tree = num(1, 1);
        for _ in 0..20 {
            tree = Box::new(Expr::UnaryOp { op:     UnaryOperator::Minus,
                                            expr:   tree,
                                            column: 1, });
        }
        let evaluator = Evaluator::default().with_max_depth(10);
        assert_eq!(evaluator.evaluate(&tree),
                   Err(EvalError::NestingTooDeep { limit: 10 }));
        assert_eq!(evaluate(&tree).unwrap(), Number::from(1));
    }

    #[test]
    fn long_left_chains_cost_no_depth() {
        let mut tree = num(1, 1);
        for _ in 0..2_000 {
            tree = binary(tree, BinaryOperator::Add, num(1, 1), 1);
        }
        let evaluator = Evaluator::default().with_max_depth(3);
        assert_eq!(evaluator.evaluate(&tree).unwrap(), Number::from(2_001));
    }

    #[test]
    fn right_nesting_counts_toward_the_limit() {
        let mut tree = num(1, 1);
        for _ in 0..600 {
            tree = binary(num(1, 1), BinaryOperator::Sub, tree, 1);
        }
        assert_eq!(evaluate(&tree), Err(EvalError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH }));
        assert_eq!(Evaluator::for_parse_limit(300).evaluate(&tree).unwrap(), Number::from(1));
    }

    #[test]
    fn chains_evaluate_left_to_right() {
        // ((10 - 4) - 3) // 2
        let tree = binary(binary(binary(num(10, 1), BinaryOperator::Sub, num(4, 6), 4),
                                 BinaryOperator::Sub,
                                 num(3, 10),
                                 8),
                          BinaryOperator::FloorDiv,
                          num(2, 15),
                          12);
        assert_eq!(evaluate(&tree).unwrap(), Number::from(1));

        // The innermost failure is reported, not the later one.

        let tree = binary(binary(num(1, 1), BinaryOperator::Mod, num(0, 5), 3),
                          BinaryOperator::Div,
                          num(0, 9),
                          7);
        assert!(matches!(evaluate(&tree),
                         Err(EvalError::ArithmeticFailure { cause: ArithmeticError::ModuloByZero,
                                                            column: 3 })));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let tree = binary(num(7, 1), BinaryOperator::Div, num(2, 5), 3);
        assert_eq!(evaluate(&tree), evaluate(&tree));
    }
}
