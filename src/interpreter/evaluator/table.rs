use std::borrow::Cow;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::arith::{self, BinaryFn, UnaryFn},
};

/// Every binary operator and its numeric function.
pub static BINARY_OPERATORS: [(BinaryOperator, BinaryFn); 7] =
    [(BinaryOperator::Add, arith::add),
     (BinaryOperator::Sub, arith::sub),
     (BinaryOperator::Mul, arith::mul),
     (BinaryOperator::Div, arith::true_div),
     (BinaryOperator::FloorDiv, arith::floor_div),
     (BinaryOperator::Mod, arith::modulo),
     (BinaryOperator::Pow, arith::pow)];

/// Every unary operator and its numeric function.
pub static UNARY_OPERATORS: [(UnaryOperator, UnaryFn); 2] =
    [(UnaryOperator::Plus, arith::pos), (UnaryOperator::Minus, arith::neg)];

/// The whitelist of operators an [`Evaluator`](super::Evaluator) may apply.
///
/// The standard table borrows the process-wide statics. Removing an operator
/// copies the remaining entries, so the statics are never touched.
///
/// # Example
/// ```
/// use reckon::{ast::BinaryOperator, interpreter::evaluator::OperatorTable};
///
/// let table = OperatorTable::standard().without_binary(BinaryOperator::Pow);
///
/// assert!(table.binary(BinaryOperator::Pow).is_none());
/// assert!(table.binary(BinaryOperator::Add).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct OperatorTable {
    binary: Cow<'static, [(BinaryOperator, BinaryFn)]>,
    unary:  Cow<'static, [(UnaryOperator, UnaryFn)]>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl OperatorTable {
    /// The full arithmetic whitelist.
    #[must_use]
    pub fn standard() -> Self {
        Self { binary: Cow::Borrowed(&BINARY_OPERATORS),
               unary:  Cow::Borrowed(&UNARY_OPERATORS), }
    }

    /// Returns a table without the given binary operator.
    #[must_use]
    pub fn without_binary(self, op: BinaryOperator) -> Self {
        let binary = self.binary
                         .iter()
                         .filter(|(candidate, _)| *candidate != op)
                         .copied()
                         .collect::<Vec<_>>();
        Self { binary: Cow::Owned(binary),
               unary:  self.unary, }
    }

    /// Returns a table without the given unary operator.
    #[must_use]
    pub fn without_unary(self, op: UnaryOperator) -> Self {
        let unary = self.unary
                        .iter()
                        .filter(|(candidate, _)| *candidate != op)
                        .copied()
                        .collect::<Vec<_>>();
        Self { binary: self.binary,
               unary:  Cow::Owned(unary), }
    }

    /// Looks up the function for a binary operator.
    #[must_use]
    pub fn binary(&self, op: BinaryOperator) -> Option<BinaryFn> {
        self.binary
            .iter()
            .find_map(|(candidate, function)| (*candidate == op).then_some(*function))
    }

    /// Looks up the function for a unary operator.
    #[must_use]
    pub fn unary(&self, op: UnaryOperator) -> Option<UnaryFn> {
        self.unary
            .iter()
            .find_map(|(candidate, function)| (*candidate == op).then_some(*function))
    }
}
