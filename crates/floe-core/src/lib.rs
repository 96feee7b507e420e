//! Core runtime for Floe: the store value model, predicate trees and their
//! pure evaluation, the operation-description algebra, the interpreter
//! contract, and the reference in-memory interpreter.
//!
//! Nothing in this crate performs I/O. Every public operation is a value
//! construction or a pure computation; execution happens behind the
//! [`interp::Interpreter`] trait.

pub mod interp;
pub mod item;
pub mod key;
pub mod mem;
pub mod op;
pub mod predicate;
pub mod record;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary only; interpreters and helpers are imported from their
/// modules explicitly.
///

pub mod prelude {
    pub use crate::{
        interp::{Interpreter, Outcome, WriteOutcome},
        item::Item,
        key::Key,
        op::{Op, OpKind},
        predicate::Predicate,
        record::{ReadError, Record},
        value::Value,
    };
}
