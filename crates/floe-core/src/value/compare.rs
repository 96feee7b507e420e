use crate::value::Value;
use std::cmp::Ordering;

///
/// Value comparison
///
/// Two distinct regimes live here:
///
/// - `canonical_cmp` is a total order over all values, used for row keys and
///   deterministic result ordering. It never coerces across variants.
/// - `compare_eq` / `compare_order` / `begins_with` are the semantic
///   comparisons used by predicate evaluation. They coerce within the
///   numeric family (`Int` ↔ `Float`) and return `None` when a comparison
///   is not defined, which evaluation treats as a non-match.
///

/// Total order over values: rank first, then within-variant order.
#[must_use]
pub fn canonical_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Blob(x), Value::Blob(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => seq_cmp(x.iter(), y.iter()),
        (Value::Map(x), Value::Map(y)) => map_cmp(x, y),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}

fn seq_cmp<'a>(
    a: impl Iterator<Item = &'a Value>,
    b: impl Iterator<Item = &'a Value>,
) -> Ordering {
    let mut a = a;
    let mut b = b;
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match canonical_cmp(x, y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

fn map_cmp(a: &[(String, Value)], b: &[(String, Value)]) -> Ordering {
    let mut a = a.iter();
    let mut b = b.iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((ka, va)), Some((kb, vb))) => match ka.cmp(kb) {
                Ordering::Equal => match canonical_cmp(va, vb) {
                    Ordering::Equal => {}
                    other => return other,
                },
                other => return other,
            },
        }
    }
}

/// Semantic equality; `None` when the comparison is not defined.
///
/// `Int` and `Float` compare as one numeric family. All other cross-variant
/// comparisons are undefined rather than false, so evaluation can distinguish
/// "compared and differed" from "not comparable".
#[must_use]
pub(crate) fn compare_eq(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Int(x), Value::Float(y)) => Some(as_f64(*x).total_cmp(y) == Ordering::Equal),
        (Value::Float(x), Value::Int(y)) => Some(x.total_cmp(&as_f64(*y)) == Ordering::Equal),
        _ if a.rank() == b.rank() => Some(canonical_cmp(a, b) == Ordering::Equal),
        _ => None,
    }
}

/// Semantic ordering; defined for numbers, text, and blobs only.
#[must_use]
pub(crate) fn compare_order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Some(x.total_cmp(y)),
        (Value::Int(x), Value::Float(y)) => Some(as_f64(*x).total_cmp(y)),
        (Value::Float(x), Value::Int(y)) => Some(x.total_cmp(&as_f64(*y))),
        (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
        (Value::Blob(x), Value::Blob(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Text prefix match; defined for text operands only.
#[must_use]
pub(crate) fn begins_with(a: &Value, prefix: &Value) -> Option<bool> {
    match (a, prefix) {
        (Value::Text(x), Value::Text(p)) => Some(x.starts_with(p)),
        _ => None,
    }
}

#[expect(clippy::cast_precision_loss)]
fn as_f64(value: i64) -> f64 {
    value as f64
}
