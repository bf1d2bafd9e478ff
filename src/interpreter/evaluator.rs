/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), the recursive tree walk and
/// the free [`evaluate`](core::evaluate) entry point.
pub mod core;

/// Operator lookup tables.
///
/// Maps every whitelisted operator to its numeric function. Tables are
/// immutable; narrower whitelists are derived by copying and filtering.
pub mod table;

pub use self::{
    core::{Evaluator, evaluate},
    table::OperatorTable,
};
