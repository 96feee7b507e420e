//! Reference in-memory interpreter.
//!
//! `MemStore` executes the full `Op` algebra against owned state with
//! deterministic semantics. It is the behavioral reference for any
//! network-backed interpreter, and the fixture every end-to-end test runs
//! against.

#[cfg(test)]
mod tests;

use crate::{
    interp::{Interpreter, Outcome, WriteOutcome},
    item::Item,
    op::{
        DeleteOp, GetAllOp, GetOp, Op, PutAllOp, PutOp, QueryOp, ReadTarget, ScanOp, UpdateAction,
        UpdateOp,
    },
    predicate::{Predicate, eval},
    value::{Value, canonical_cmp},
};
use std::{cmp::Ordering, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Interpreter faults: misaddressed requests and malformed key material.
/// Distinct from decode errors (codec) and from condition rejection
/// (a normal `WriteOutcome`).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("table '{table}' does not exist")]
    TableNotFound { table: String },

    #[error("index '{index}' does not exist on table '{table}'")]
    IndexNotFound { table: String, index: String },

    #[error("item for table '{table}' lacks key attribute '{field}'")]
    MissingKeyField { table: String, field: String },

    #[error("update on table '{table}' targets key attribute '{field}'")]
    KeyFieldUpdate { table: String, field: String },
}

///
/// ExecStats
///
/// Execution counters maintained by the store, exposed read-only for
/// diagnostics and asserted in tests.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExecStats {
    pub scan_calls: u64,
    pub query_calls: u64,
    pub get_calls: u64,
    pub put_calls: u64,
    pub delete_calls: u64,
    pub update_calls: u64,
    pub rows_scanned: u64,
    pub rows_returned: u64,
    pub condition_rejections: u64,
}

impl ExecStats {
    fn bump(field: &mut u64, delta: u64) {
        *field = field.saturating_add(delta);
    }
}

///
/// MemTable
///

#[derive(Clone, Debug, Default)]
struct MemTable {
    key_fields: Vec<String>,
    indexes: BTreeMap<String, Vec<String>>,
    rows: BTreeMap<Vec<Value>, Item>,
}

impl MemTable {
    /// Extract this table's row key from an item.
    fn row_key(&self, table: &str, item: &Item) -> Result<Vec<Value>, StoreError> {
        self.key_fields
            .iter()
            .map(|field| {
                item.get(field).cloned().ok_or_else(|| {
                    StoreError::MissingKeyField {
                        table: table.to_string(),
                        field: field.clone(),
                    }
                })
            })
            .collect()
    }
}

///
/// MemStore
///

#[derive(Clone, Debug, Default)]
pub struct MemStore {
    tables: BTreeMap<String, MemTable>,
    stats: ExecStats,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table keyed by the given attributes, in order.
    pub fn create_table(&mut self, name: impl Into<String>, key_fields: &[&str]) {
        let table = MemTable {
            key_fields: key_fields.iter().map(ToString::to_string).collect(),
            ..MemTable::default()
        };
        self.tables.insert(name.into(), table);
    }

    /// Register a secondary index over an existing table.
    pub fn create_index(
        &mut self,
        table: &str,
        index: impl Into<String>,
        key_fields: &[&str],
    ) -> Result<(), StoreError> {
        let entry = self.table_mut(table)?;
        entry.indexes.insert(
            index.into(),
            key_fields.iter().map(ToString::to_string).collect(),
        );
        Ok(())
    }

    #[must_use]
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    fn table(&self, name: &str) -> Result<&MemTable, StoreError> {
        self.tables.get(name).ok_or_else(|| StoreError::TableNotFound {
            table: name.to_string(),
        })
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut MemTable, StoreError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StoreError::TableNotFound {
                table: name.to_string(),
            })
    }

    // ─────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────

    /// Produce the target's row stream in its key order.
    ///
    /// Index targets are sparse: rows lacking any index key attribute are
    /// not visible through the index.
    fn target_rows(&self, target: &ReadTarget) -> Result<Vec<Item>, StoreError> {
        let table = self.table(&target.table)?;

        let Some(index_name) = &target.index else {
            return Ok(table.rows.values().cloned().collect());
        };

        let index_fields =
            table
                .indexes
                .get(index_name)
                .ok_or_else(|| StoreError::IndexNotFound {
                    table: target.table.clone(),
                    index: index_name.clone(),
                })?;

        let mut rows: Vec<Item> = table
            .rows
            .values()
            .filter(|item| index_fields.iter().all(|field| item.get(field).is_some()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| field_order(a, b, index_fields));

        Ok(rows)
    }

    fn scan(&mut self, op: &ScanOp) -> Result<Vec<Item>, StoreError> {
        let mut rows = self.target_rows(&op.target)?;

        // The limit bounds evaluation, so it applies before anything else.
        if let Some(limit) = op.limit {
            rows.truncate(limit.get() as usize);
        }

        ExecStats::bump(&mut self.stats.scan_calls, 1);
        ExecStats::bump(&mut self.stats.rows_scanned, rows.len() as u64);
        ExecStats::bump(&mut self.stats.rows_returned, rows.len() as u64);

        Ok(rows)
    }

    fn query(&mut self, op: &QueryOp) -> Result<Vec<Item>, StoreError> {
        let rows = self.target_rows(&op.target)?;
        let scanned = rows.len() as u64;

        let mut rows: Vec<Item> = rows
            .into_iter()
            .filter(|item| eval(item, &op.predicate))
            .collect();

        if let Some(limit) = op.limit {
            rows.truncate(limit.get() as usize);
        }

        ExecStats::bump(&mut self.stats.query_calls, 1);
        ExecStats::bump(&mut self.stats.rows_scanned, scanned);
        ExecStats::bump(&mut self.stats.rows_returned, rows.len() as u64);

        Ok(rows)
    }

    fn get(&mut self, op: &GetOp) -> Result<Option<Item>, StoreError> {
        ExecStats::bump(&mut self.stats.get_calls, 1);

        let table = self.table(&op.table)?;
        let key = table.row_key(&op.table, &op.key)?;

        Ok(table.rows.get(&key).cloned())
    }

    fn get_all(&mut self, op: &GetAllOp) -> Result<Vec<Item>, StoreError> {
        ExecStats::bump(&mut self.stats.get_calls, 1);

        let table = self.table(&op.table)?;
        let mut rows = Vec::new();
        for key_item in &op.keys {
            let key = table.row_key(&op.table, key_item)?;
            if let Some(item) = table.rows.get(&key) {
                rows.push(item.clone());
            }
        }

        Ok(rows)
    }

    // ─────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────

    /// Evaluate a write guard against the currently stored item.
    ///
    /// An absent item evaluates with every attribute missing, so `exists`
    /// fails and `not_exists` holds.
    fn condition_holds(existing: Option<&Item>, condition: Option<&Predicate>) -> bool {
        let Some(condition) = condition else {
            return true;
        };

        static EMPTY: Item = Item::new();
        eval(existing.unwrap_or(&EMPTY), condition)
    }

    fn put(&mut self, op: &PutOp) -> Result<WriteOutcome, StoreError> {
        ExecStats::bump(&mut self.stats.put_calls, 1);

        let outcome = {
            let table = self.table_mut(&op.table)?;
            let key = table.row_key(&op.table, &op.item)?;

            if Self::condition_holds(table.rows.get(&key), op.condition.as_ref()) {
                table.rows.insert(key, op.item.clone());
                WriteOutcome::Applied
            } else {
                WriteOutcome::ConditionFailed
            }
        };

        if outcome.is_rejected() {
            ExecStats::bump(&mut self.stats.condition_rejections, 1);
        }
        Ok(outcome)
    }

    fn put_all(&mut self, op: &PutAllOp) -> Result<WriteOutcome, StoreError> {
        ExecStats::bump(&mut self.stats.put_calls, 1);

        let table = self.table_mut(&op.table)?;
        for item in &op.items {
            let key = table.row_key(&op.table, item)?;
            table.rows.insert(key, item.clone());
        }

        Ok(WriteOutcome::Applied)
    }

    fn delete(&mut self, op: &DeleteOp) -> Result<WriteOutcome, StoreError> {
        ExecStats::bump(&mut self.stats.delete_calls, 1);

        let outcome = {
            let table = self.table_mut(&op.table)?;
            let key = table.row_key(&op.table, &op.key)?;

            if Self::condition_holds(table.rows.get(&key), op.condition.as_ref()) {
                table.rows.remove(&key);
                WriteOutcome::Applied
            } else {
                WriteOutcome::ConditionFailed
            }
        };

        if outcome.is_rejected() {
            ExecStats::bump(&mut self.stats.condition_rejections, 1);
        }
        Ok(outcome)
    }

    fn update(&mut self, op: &UpdateOp) -> Result<WriteOutcome, StoreError> {
        ExecStats::bump(&mut self.stats.update_calls, 1);

        let outcome = {
            let table = self.table_mut(&op.table)?;

            // Key attributes are immutable per row.
            for action in &op.actions {
                let field = match action {
                    UpdateAction::Set { field, .. } | UpdateAction::Remove { field } => field,
                };
                if table.key_fields.contains(field) {
                    return Err(StoreError::KeyFieldUpdate {
                        table: op.table.clone(),
                        field: field.clone(),
                    });
                }
            }

            let key = table.row_key(&op.table, &op.key)?;
            let existing = table.rows.get(&key);

            if Self::condition_holds(existing, op.condition.as_ref()) {
                // Updating an absent row creates it from the key attributes.
                let mut item = existing.cloned().unwrap_or_else(|| op.key.clone());
                for action in &op.actions {
                    match action {
                        UpdateAction::Set { field, value } => {
                            item.insert(field.clone(), value.clone());
                        }
                        UpdateAction::Remove { field } => {
                            item.remove(field);
                        }
                    }
                }

                table.rows.insert(key, item);
                WriteOutcome::Applied
            } else {
                WriteOutcome::ConditionFailed
            }
        };

        if outcome.is_rejected() {
            ExecStats::bump(&mut self.stats.condition_rejections, 1);
        }
        Ok(outcome)
    }
}

impl Interpreter for MemStore {
    type Error = StoreError;

    fn execute(&mut self, op: Op) -> Result<Outcome, Self::Error> {
        match op {
            Op::Scan(op) => self.scan(&op).map(Outcome::Rows),
            Op::Query(op) => self.query(&op).map(Outcome::Rows),
            Op::Get(op) => self.get(&op).map(Outcome::Row),
            Op::GetAll(op) => self.get_all(&op).map(Outcome::Rows),
            Op::Put(op) => self.put(&op).map(Outcome::Write),
            Op::PutAll(op) => self.put_all(&op).map(Outcome::Write),
            Op::Delete(op) => self.delete(&op).map(Outcome::Write),
            Op::Update(op) => self.update(&op).map(Outcome::Write),
        }
    }
}

/// Compare two items by the given fields' values, canonically.
fn field_order(a: &Item, b: &Item, fields: &[String]) -> Ordering {
    for field in fields {
        let ord = match (a.get(field), b.get(field)) {
            (Some(x), Some(y)) => canonical_cmp(x, y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
