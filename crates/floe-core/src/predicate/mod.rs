//! Predicate trees: pure, immutable boolean expressions over item
//! attributes. Construction never touches a store; evaluation is a separate
//! pass (`eval`) used by interpreters.

mod ast;
mod eval;


pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use eval::eval;
