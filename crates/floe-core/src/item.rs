use crate::{record::ReadError, value::Value};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Item
///
/// One stored record in wire form: named attributes, each a `Value`.
/// Field reads distinguish a missing attribute (`None`) from a present,
/// explicitly-null one (`Some(Value::Null)`).
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct Item(BTreeMap<String, Value>);

impl Item {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    // ─────────────────────────────────────────────────────────────
    // Typed accessors for record codecs
    // ─────────────────────────────────────────────────────────────

    fn required(&self, field: &str) -> Result<&Value, ReadError> {
        self.0.get(field).ok_or_else(|| ReadError::missing(field))
    }

    pub fn text(&self, field: &str) -> Result<&str, ReadError> {
        match self.required(field)? {
            Value::Text(text) => Ok(text),
            other => Err(ReadError::type_mismatch(field, "text", other.kind())),
        }
    }

    pub fn int(&self, field: &str) -> Result<i64, ReadError> {
        match self.required(field)? {
            Value::Int(value) => Ok(*value),
            other => Err(ReadError::type_mismatch(field, "int", other.kind())),
        }
    }

    pub fn float(&self, field: &str) -> Result<f64, ReadError> {
        match self.required(field)? {
            Value::Float(value) => Ok(*value),
            Value::Int(value) => int_to_float(field, *value),
            other => Err(ReadError::type_mismatch(field, "float", other.kind())),
        }
    }

    pub fn boolean(&self, field: &str) -> Result<bool, ReadError> {
        match self.required(field)? {
            Value::Bool(value) => Ok(*value),
            other => Err(ReadError::type_mismatch(field, "bool", other.kind())),
        }
    }

    pub fn blob(&self, field: &str) -> Result<&[u8], ReadError> {
        match self.required(field)? {
            Value::Blob(bytes) => Ok(bytes),
            other => Err(ReadError::type_mismatch(field, "blob", other.kind())),
        }
    }

    pub fn list(&self, field: &str) -> Result<&[Value], ReadError> {
        match self.required(field)? {
            Value::List(values) => Ok(values),
            other => Err(ReadError::type_mismatch(field, "list", other.kind())),
        }
    }

    /// Optional text: missing or null reads as `None`.
    pub fn opt_text(&self, field: &str) -> Result<Option<&str>, ReadError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Text(text)) => Ok(Some(text)),
            Some(other) => Err(ReadError::type_mismatch(field, "text", other.kind())),
        }
    }

    /// Optional int: missing or null reads as `None`.
    pub fn opt_int(&self, field: &str) -> Result<Option<i64>, ReadError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(ReadError::type_mismatch(field, "int", other.kind())),
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn int_to_float(field: &str, value: i64) -> Result<f64, ReadError> {
    const F64_SAFE: i64 = 1_i64 << 53;
    if (-F64_SAFE..=F64_SAFE).contains(&value) {
        Ok(value as f64)
    } else {
        Err(ReadError::malformed(
            field,
            format!("integer {value} exceeds exact float range"),
        ))
    }
}

impl FromIterator<(String, Value)> for Item {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item::new()
            .with("name", "Circle")
            .with("age", 156)
            .with("score", 2.5)
            .with("tag", Value::Null)
    }

    #[test]
    fn typed_accessors_read_present_fields() {
        let item = sample();
        assert_eq!(item.text("name").unwrap(), "Circle");
        assert_eq!(item.int("age").unwrap(), 156);
        assert_eq!(item.float("score").unwrap(), 2.5);
    }

    #[test]
    fn missing_field_is_precise() {
        let err = sample().text("nope").unwrap_err();
        assert_eq!(err, ReadError::missing("nope"));
    }

    #[test]
    fn type_mismatch_reports_both_kinds() {
        let err = sample().int("name").unwrap_err();
        assert_eq!(err, ReadError::type_mismatch("name", "int", "text"));
    }

    #[test]
    fn optional_accessors_fold_null_and_missing() {
        let item = sample();
        assert_eq!(item.opt_text("tag").unwrap(), None);
        assert_eq!(item.opt_text("absent").unwrap(), None);
        assert_eq!(item.opt_int("age").unwrap(), Some(156));
    }

    #[test]
    fn float_accessor_widens_exact_ints() {
        let item = Item::new().with("n", 3);
        assert_eq!(item.float("n").unwrap(), 3.0);

        let big = Item::new().with("n", i64::MAX);
        assert!(matches!(
            big.float("n"),
            Err(ReadError::Malformed { .. })
        ));
    }
}
