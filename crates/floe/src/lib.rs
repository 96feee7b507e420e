//! Floe: a typed, deferred-execution access layer for wide-column stores.
//!
//! Callers describe reads, writes, conditional writes, and range queries
//! against tables and secondary indexes using native record types. Every
//! entry point builds an inert operation description; an
//! [`Interpreter`](floe_core::interp::Interpreter) executes them. Which
//! backend behavior serves a `scan`/`query` call is resolved at compile time
//! from the handle's shape (table, index, or either bounded by a limit).
//!
//! ## Crate layout
//! - `caps`: the `Scannable`/`Queryable` capabilities and their eight
//!   handle-shape implementations.
//! - `given`: the conditional-write builder.
//! - `session`: typed execution through an interpreter.
//! - `table`: the handle model (`Table`, `Index`, `Limited`).

pub use floe_core as core;

pub mod caps;
pub mod given;
pub mod session;
pub mod table;

pub use caps::{Queryable, Scannable};
pub use given::Given;
pub use session::{Session, SessionError};
pub use table::{Index, Limited, Table};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        caps::{Queryable as _, Scannable as _},
        session::Session,
        table::{Index, Limited, Table},
    };
    pub use floe_core::{
        interp::{Interpreter, Outcome, WriteOutcome},
        item::Item,
        key::Key,
        op::UpdateAction,
        predicate::Predicate,
        record::{ReadError, Record},
        value::Value,
    };
}
