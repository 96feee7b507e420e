use crate::{item::Item, predicate::Predicate, value::Value};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

///
/// Operation descriptions
///
/// Inert values, each describing one logical store request. The core only
/// constructs these; an `Interpreter` consumes them. Descriptions are never
/// mutated after construction and never perform I/O themselves.
///

///
/// ReadTarget
///
/// What a scan or query reads from: a base table, or one of its secondary
/// indexes named explicitly.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReadTarget {
    pub table: String,
    pub index: Option<String>,
}

impl ReadTarget {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            index: None,
        }
    }

    pub fn index(table: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            index: Some(index.into()),
        }
    }
}

///
/// ScanOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScanOp {
    pub target: ReadTarget,
    /// Bounds the number of items the interpreter may evaluate, not the
    /// number returned after filtering.
    pub limit: Option<NonZeroU32>,
}

///
/// QueryOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryOp {
    pub target: ReadTarget,
    pub predicate: Predicate,
    pub limit: Option<NonZeroU32>,
}

///
/// GetOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetOp {
    pub table: String,
    pub key: Item,
}

///
/// GetAllOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetAllOp {
    pub table: String,
    pub keys: Vec<Item>,
}

///
/// PutOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PutOp {
    pub table: String,
    pub item: Item,
    /// Evaluated against the currently stored item, atomically with the
    /// write. `None` writes unconditionally.
    pub condition: Option<Predicate>,
}

///
/// PutAllOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PutAllOp {
    pub table: String,
    pub items: Vec<Item>,
}

///
/// DeleteOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeleteOp {
    pub table: String,
    pub key: Item,
    pub condition: Option<Predicate>,
}

///
/// UpdateAction
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum UpdateAction {
    Set { field: String, value: Value },
    Remove { field: String },
}

impl UpdateAction {
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn remove(field: impl Into<String>) -> Self {
        Self::Remove {
            field: field.into(),
        }
    }
}

///
/// UpdateOp
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UpdateOp {
    pub table: String,
    pub key: Item,
    pub actions: Vec<UpdateAction>,
    pub condition: Option<Predicate>,
}

///
/// Op
///
/// The closed algebra of requests. Interpreters pattern-match the kind and
/// perform the actual I/O.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Op {
    Delete(DeleteOp),
    Get(GetOp),
    GetAll(GetAllOp),
    Put(PutOp),
    PutAll(PutAllOp),
    Query(QueryOp),
    Scan(ScanOp),
    Update(UpdateOp),
}

impl Op {
    #[must_use]
    pub const fn kind(&self) -> OpKind {
        match self {
            Self::Delete(_) => OpKind::Delete,
            Self::Get(_) => OpKind::Get,
            Self::GetAll(_) => OpKind::GetAll,
            Self::Put(_) => OpKind::Put,
            Self::PutAll(_) => OpKind::PutAll,
            Self::Query(_) => OpKind::Query,
            Self::Scan(_) => OpKind::Scan,
            Self::Update(_) => OpKind::Update,
        }
    }
}

///
/// OpKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OpKind {
    Delete,
    Get,
    GetAll,
    Put,
    PutAll,
    Query,
    Scan,
    Update,
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Delete => "delete",
            Self::Get => "get",
            Self::GetAll => "get_all",
            Self::Put => "put",
            Self::PutAll => "put_all",
            Self::Query => "query",
            Self::Scan => "scan",
            Self::Update => "update",
        };
        write!(f, "{label}")
    }
}

impl From<DeleteOp> for Op {
    fn from(op: DeleteOp) -> Self {
        Self::Delete(op)
    }
}

impl From<GetOp> for Op {
    fn from(op: GetOp) -> Self {
        Self::Get(op)
    }
}

impl From<GetAllOp> for Op {
    fn from(op: GetAllOp) -> Self {
        Self::GetAll(op)
    }
}

impl From<PutOp> for Op {
    fn from(op: PutOp) -> Self {
        Self::Put(op)
    }
}

impl From<PutAllOp> for Op {
    fn from(op: PutAllOp) -> Self {
        Self::PutAll(op)
    }
}

impl From<QueryOp> for Op {
    fn from(op: QueryOp) -> Self {
        Self::Query(op)
    }
}

impl From<ScanOp> for Op {
    fn from(op: ScanOp) -> Self {
        Self::Scan(op)
    }
}

impl From<UpdateOp> for Op {
    fn from(op: UpdateOp) -> Self {
        Self::Update(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    #[test]
    fn descriptions_round_trip_through_json() {
        let op = Op::Query(QueryOp {
            target: ReadTarget::index("transport", "by-line"),
            predicate: Predicate::eq("mode", "Underground")
                .and(Predicate::begins_with("line", "C")),
            limit: NonZeroU32::new(5),
        });

        let json = serde_json::to_string(&op).unwrap();
        let back: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn kind_labels_are_stable() {
        let scan = Op::Scan(ScanOp {
            target: ReadTarget::table("t"),
            limit: None,
        });
        assert_eq!(scan.kind(), OpKind::Scan);
        assert_eq!(scan.kind().to_string(), "scan");
    }
}
