use crate::table::Table;
use floe_core::{
    key::Key,
    op::{DeleteOp, PutOp, UpdateAction, UpdateOp},
    predicate::Predicate,
    record::Record,
};

///
/// Given
///
/// Conditional-write builder: each description it produces instructs the
/// interpreter to apply the write only if the condition holds against the
/// currently stored item, and to report `WriteOutcome::ConditionFailed`
/// otherwise (a normal outcome, never an error).
///
/// The builder clones its condition into every description, so one `Given`
/// may produce any number of writes guarded by the same tree.
///

pub struct Given<'t, R> {
    table: &'t Table<R>,
    condition: Predicate,
}

impl<'t, R: Record> Given<'t, R> {
    pub(crate) const fn new(table: &'t Table<R>, condition: Predicate) -> Self {
        Self { table, condition }
    }

    #[must_use]
    pub fn put(&self, record: &R) -> PutOp {
        PutOp {
            condition: Some(self.condition.clone()),
            ..self.table.put(record)
        }
    }

    #[must_use]
    pub fn delete(&self, key: Key) -> DeleteOp {
        DeleteOp {
            condition: Some(self.condition.clone()),
            ..self.table.delete(key)
        }
    }

    #[must_use]
    pub fn update(&self, key: Key, actions: Vec<UpdateAction>) -> UpdateOp {
        UpdateOp {
            condition: Some(self.condition.clone()),
            ..self.table.update(key, actions)
        }
    }
}
