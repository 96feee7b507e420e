use crate::{
    caps::{Queryable, Scannable},
    table::Table,
};
use floe_core::{
    interp::{Interpreter, Outcome, WriteOutcome},
    item::Item,
    key::Key,
    op::{Op, OpKind, UpdateAction},
    predicate::Predicate,
    record::{ReadError, Record},
};
use thiserror::Error as ThisError;

///
/// SessionError
///
/// Interpreter faults, plus the contract breach where an interpreter yields
/// an outcome shape that does not match the issued request kind. Decode
/// failures and condition rejections are NOT errors here; they surface as
/// per-item `Result`s and `WriteOutcome` respectively.
///

#[derive(Debug, ThisError)]
pub enum SessionError<E: std::error::Error + Send + Sync + 'static> {
    #[error(transparent)]
    Interpreter(#[from] E),

    #[error("interpreter returned '{found}' outcome for a {expected} request")]
    OutcomeMismatch { expected: OpKind, found: &'static str },
}

///
/// Session
///
/// Typed execution front end. A session binds an interpreter to the typed
/// surface: it issues a handle's description, runs it, and decodes raw items
/// through the handle's record codec. Reads yield one `Result` per item, so
/// a batch may mix decoded records and decode errors.
///

pub struct Session<I> {
    interp: I,
}

impl<I: Interpreter> Session<I> {
    pub const fn new(interp: I) -> Self {
        Self { interp }
    }

    #[must_use]
    pub const fn interpreter(&self) -> &I {
        &self.interp
    }

    pub fn into_inner(self) -> I {
        self.interp
    }

    // ─────────────────────────────────────────────────────────────
    // Capability reads
    // ─────────────────────────────────────────────────────────────

    pub fn scan<H: Scannable>(
        &mut self,
        handle: &H,
    ) -> Result<Vec<Result<H::Rec, ReadError>>, SessionError<I::Error>> {
        let rows = self.rows(handle.scan().into())?;
        Ok(decode_rows(&rows))
    }

    pub fn query<H: Queryable>(
        &mut self,
        handle: &H,
        predicate: Predicate,
    ) -> Result<Vec<Result<H::Rec, ReadError>>, SessionError<I::Error>> {
        let rows = self.rows(handle.query(predicate).into())?;
        Ok(decode_rows(&rows))
    }

    // ─────────────────────────────────────────────────────────────
    // Point reads and writes
    // ─────────────────────────────────────────────────────────────

    pub fn get<R: Record>(
        &mut self,
        table: &Table<R>,
        key: Key,
    ) -> Result<Option<Result<R, ReadError>>, SessionError<I::Error>> {
        let row = self.row(table.get(key).into())?;
        Ok(row.as_ref().map(R::from_item))
    }

    pub fn get_all<R: Record>(
        &mut self,
        table: &Table<R>,
        keys: impl IntoIterator<Item = Key>,
    ) -> Result<Vec<Result<R, ReadError>>, SessionError<I::Error>> {
        let rows = self.rows(table.get_all(keys).into())?;
        Ok(decode_rows(&rows))
    }

    pub fn put<R: Record>(
        &mut self,
        table: &Table<R>,
        record: &R,
    ) -> Result<WriteOutcome, SessionError<I::Error>> {
        self.write(table.put(record))
    }

    pub fn put_all<R: Record>(
        &mut self,
        table: &Table<R>,
        records: &[R],
    ) -> Result<(), SessionError<I::Error>> {
        self.write(table.put_all(records)).map(|_| ())
    }

    pub fn delete<R: Record>(
        &mut self,
        table: &Table<R>,
        key: Key,
    ) -> Result<WriteOutcome, SessionError<I::Error>> {
        self.write(table.delete(key))
    }

    pub fn update<R: Record>(
        &mut self,
        table: &Table<R>,
        key: Key,
        actions: Vec<UpdateAction>,
    ) -> Result<WriteOutcome, SessionError<I::Error>> {
        self.write(table.update(key, actions))
    }

    /// Execute any write description, including those built via `given`.
    pub fn write(&mut self, op: impl Into<Op>) -> Result<WriteOutcome, SessionError<I::Error>> {
        let op = op.into();
        let kind = op.kind();

        match self.interp.execute(op)? {
            Outcome::Write(outcome) => Ok(outcome),
            other => Err(SessionError::OutcomeMismatch {
                expected: kind,
                found: other.label(),
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Outcome shaping
    // ─────────────────────────────────────────────────────────────

    fn rows(&mut self, op: Op) -> Result<Vec<Item>, SessionError<I::Error>> {
        let kind = op.kind();

        match self.interp.execute(op)? {
            Outcome::Rows(rows) => Ok(rows),
            other => Err(SessionError::OutcomeMismatch {
                expected: kind,
                found: other.label(),
            }),
        }
    }

    fn row(&mut self, op: Op) -> Result<Option<Item>, SessionError<I::Error>> {
        let kind = op.kind();

        match self.interp.execute(op)? {
            Outcome::Row(row) => Ok(row),
            other => Err(SessionError::OutcomeMismatch {
                expected: kind,
                found: other.label(),
            }),
        }
    }
}

fn decode_rows<R: Record>(rows: &[Item]) -> Vec<Result<R, ReadError>> {
    rows.iter().map(R::from_item).collect()
}
