mod compare;


use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub(crate) use compare::{begins_with, compare_eq, compare_order};
pub use compare::canonical_cmp;

///
/// Value
///
/// The store's scalar/document value universe. One `Value` is the wire shape
/// of a single attribute; an item is a named map of these.
///
/// `Null` means the attribute is present and explicitly null; a missing
/// attribute is not a `Value` at all (see `Item`).
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Value {
    Blob(#[serde(with = "serde_bytes")] Vec<u8>),
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    /// Entries are kept in insertion order; equality is order-sensitive.
    Map(Vec<(String, Self)>),
    Null,
    Text(String),
}

impl Value {
    /// Stable human-readable kind label, used in decode errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Blob(_) => "blob",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Null => "null",
            Self::Text(_) => "text",
        }
    }

    /// Cross-variant rank for canonical ordering.
    pub(crate) const fn rank(&self) -> u8 {
        match self {
            Self::Blob(_) => 0,
            Self::Bool(_) => 1,
            Self::Float(_) => 2,
            Self::Int(_) => 3,
            Self::List(_) => 4,
            Self::Map(_) => 5,
            Self::Null => 6,
            Self::Text(_) => 7,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

/// Canonical total order. Floats compare via IEEE total ordering, so `Value`
/// may key ordered containers; cross-variant order follows `rank`.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
