use crate::{item::Item, value::Value};
use serde::{Deserialize, Serialize};

///
/// Key
///
/// Builder for primary-key attribute maps: a partition attribute, optionally
/// extended with a sort attribute (or any further composite parts). Purely a
/// construction convenience over `Item`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Key(Item);

impl Key {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(Item::new().with(field, value))
    }

    /// Extend the key with another attribute.
    #[must_use]
    pub fn and(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(self.0.with(field, value))
    }

    #[must_use]
    pub fn into_item(self) -> Item {
        self.0
    }

    #[must_use]
    pub const fn as_item(&self) -> &Item {
        &self.0
    }
}

impl From<Key> for Item {
    fn from(key: Key) -> Self {
        key.into_item()
    }
}
