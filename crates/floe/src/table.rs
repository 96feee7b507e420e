use crate::given::Given;
use floe_core::{
    key::Key,
    op::{DeleteOp, GetAllOp, GetOp, PutAllOp, PutOp, UpdateAction, UpdateOp},
    predicate::Predicate,
    record::Record,
};
use std::{fmt, marker::PhantomData, num::NonZeroU32};

///
/// Table
///
/// Typed descriptor of a base table. Carries the table name and the record
/// codec capability (via `R`); holds no connection and owns no store state,
/// so values are freely shareable. Every method is a pure description
/// constructor.
///

pub struct Table<R> {
    name: String,
    marker: PhantomData<fn() -> R>,
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            marker: PhantomData,
        }
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table").field("name", &self.name).finish()
    }
}

impl<R: Record> Table<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor for one of this table's secondary indexes, bound to the
    /// same record codec and table name.
    pub fn index(&self, index_name: impl Into<String>) -> Index<R> {
        Index {
            table_name: self.name.clone(),
            index_name: index_name.into(),
            marker: PhantomData,
        }
    }

    /// Bound the number of items the interpreter may evaluate per request.
    /// Non-positive limits are unrepresentable.
    #[must_use]
    pub fn limit(&self, limit: NonZeroU32) -> Limited<Self> {
        Limited {
            inner: self.clone(),
            limit,
        }
    }

    /// Conditional-write builder bound to this table and condition.
    #[must_use]
    pub const fn given(&self, condition: Predicate) -> Given<'_, R> {
        Given::new(self, condition)
    }

    // ─────────────────────────────────────────────────────────────
    // Plain write/read descriptions
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn put(&self, record: &R) -> PutOp {
        PutOp {
            table: self.name.clone(),
            item: record.to_item(),
            condition: None,
        }
    }

    #[must_use]
    pub fn put_all(&self, records: &[R]) -> PutAllOp {
        PutAllOp {
            table: self.name.clone(),
            items: records.iter().map(Record::to_item).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: Key) -> GetOp {
        GetOp {
            table: self.name.clone(),
            key: key.into_item(),
        }
    }

    #[must_use]
    pub fn get_all(&self, keys: impl IntoIterator<Item = Key>) -> GetAllOp {
        GetAllOp {
            table: self.name.clone(),
            keys: keys.into_iter().map(Key::into_item).collect(),
        }
    }

    #[must_use]
    pub fn delete(&self, key: Key) -> DeleteOp {
        DeleteOp {
            table: self.name.clone(),
            key: key.into_item(),
            condition: None,
        }
    }

    #[must_use]
    pub fn update(&self, key: Key, actions: Vec<UpdateAction>) -> UpdateOp {
        UpdateOp {
            table: self.name.clone(),
            key: key.into_item(),
            actions,
            condition: None,
        }
    }
}

///
/// Index
///
/// Typed descriptor of a secondary index. Always derived from a `Table` via
/// `index(name)`, so the table binding is never fabricated.
///

pub struct Index<R> {
    table_name: String,
    index_name: String,
    marker: PhantomData<fn() -> R>,
}

impl<R> Clone for Index<R> {
    fn clone(&self) -> Self {
        Self {
            table_name: self.table_name.clone(),
            index_name: self.index_name.clone(),
            marker: PhantomData,
        }
    }
}

impl<R> fmt::Debug for Index<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("table_name", &self.table_name)
            .field("index_name", &self.index_name)
            .finish()
    }
}

impl<R: Record> Index<R> {
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Bound the number of items the interpreter may evaluate per request.
    #[must_use]
    pub fn limit(&self, limit: NonZeroU32) -> Limited<Self> {
        Limited {
            inner: self.clone(),
            limit,
        }
    }
}

///
/// Limited
///
/// A table or index handle bounded by an evaluation limit. Re-limiting
/// replaces the bound: the last value wins.
///

#[derive(Clone, Debug)]
pub struct Limited<H> {
    inner: H,
    limit: NonZeroU32,
}

impl<H> Limited<H> {
    #[must_use]
    pub const fn inner(&self) -> &H {
        &self.inner
    }

    #[must_use]
    pub const fn item_limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Replace the limit (last-write-wins).
    #[must_use]
    pub fn limit(self, limit: NonZeroU32) -> Self {
        Self { limit, ..self }
    }
}
