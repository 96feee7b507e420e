use crate::table::{Index, Limited, Table};
use floe_core::{
    op::{QueryOp, ReadTarget, ScanOp},
    predicate::Predicate,
    record::Record,
};

///
/// Capabilities
///
/// `Scannable` and `Queryable` are resolved entirely at the call site from
/// the handle's static type: one implementation per handle shape per
/// capability, and no runtime inspection anywhere. Adding a handle shape or
/// a capability means adding implementations, never editing a dispatcher.
///

///
/// Scannable
///
/// Unconditional full read over the handle's target.
///

pub trait Scannable {
    type Rec: Record;

    /// Describe a full read; never executes anything.
    fn scan(&self) -> ScanOp;
}

///
/// Queryable
///
/// Predicate-bounded read over the handle's target.
///

pub trait Queryable {
    type Rec: Record;

    /// Describe a key-condition-bounded read; never executes anything.
    fn query(&self, predicate: Predicate) -> QueryOp;
}

// ─────────────────────────────────────────────────────────────
// Table
// ─────────────────────────────────────────────────────────────

impl<R: Record> Scannable for Table<R> {
    type Rec = R;

    fn scan(&self) -> ScanOp {
        ScanOp {
            target: ReadTarget::table(self.name()),
            limit: None,
        }
    }
}

impl<R: Record> Queryable for Table<R> {
    type Rec = R;

    fn query(&self, predicate: Predicate) -> QueryOp {
        QueryOp {
            target: ReadTarget::table(self.name()),
            predicate,
            limit: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Index
// ─────────────────────────────────────────────────────────────

impl<R: Record> Scannable for Index<R> {
    type Rec = R;

    fn scan(&self) -> ScanOp {
        ScanOp {
            target: ReadTarget::index(self.table_name(), self.index_name()),
            limit: None,
        }
    }
}

impl<R: Record> Queryable for Index<R> {
    type Rec = R;

    fn query(&self, predicate: Predicate) -> QueryOp {
        QueryOp {
            target: ReadTarget::index(self.table_name(), self.index_name()),
            predicate,
            limit: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Limited table
// ─────────────────────────────────────────────────────────────

impl<R: Record> Scannable for Limited<Table<R>> {
    type Rec = R;

    fn scan(&self) -> ScanOp {
        ScanOp {
            limit: Some(self.item_limit()),
            ..self.inner().scan()
        }
    }
}

impl<R: Record> Queryable for Limited<Table<R>> {
    type Rec = R;

    fn query(&self, predicate: Predicate) -> QueryOp {
        QueryOp {
            limit: Some(self.item_limit()),
            ..self.inner().query(predicate)
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Limited index
// ─────────────────────────────────────────────────────────────

impl<R: Record> Scannable for Limited<Index<R>> {
    type Rec = R;

    fn scan(&self) -> ScanOp {
        ScanOp {
            limit: Some(self.item_limit()),
            ..self.inner().scan()
        }
    }
}

impl<R: Record> Queryable for Limited<Index<R>> {
    type Rec = R;

    fn query(&self, predicate: Predicate) -> QueryOp {
        QueryOp {
            limit: Some(self.item_limit()),
            ..self.inner().query(predicate)
        }
    }
}
