use crate::item::Item;
use thiserror::Error as ThisError;

///
/// ReadError
///
/// Why one item's wire data could not be decoded into a native record.
/// Produced by record codecs; read paths surface these unchanged, one per
/// item, so a batch read may mix successes and decode failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReadError {
    #[error("field '{field}' is missing")]
    Missing { field: String },

    #[error("field '{field}' has type {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' is malformed: {message}")]
    Malformed { field: String, message: String },
}

impl ReadError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            message: message.into(),
        }
    }
}

///
/// Record
///
/// Marshaling capability between a native record type and the store's item
/// shape. Implementations must round-trip: `from_item(&r.to_item())` yields
/// a record equal to `r`.
///

pub trait Record: Sized {
    /// Marshal this record into its wire item.
    fn to_item(&self) -> Item;

    /// Unmarshal a wire item, reporting the first decode failure.
    fn from_item(item: &Item) -> Result<Self, ReadError>;
}
