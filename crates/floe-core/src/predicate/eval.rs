use crate::{
    item::Item,
    predicate::{CompareOp, ComparePredicate, Predicate},
    value::{begins_with, compare_eq, compare_order},
};
use std::cmp::Ordering;

///
/// Evaluate a predicate against a single item.
///
/// Pure runtime evaluation: no schema access, no planning, no I/O. A missing
/// attribute fails every comparison leaf, satisfies `NotExists`, and fails
/// `Exists`. Comparisons that are undefined for the operand types evaluate
/// to `false` rather than erroring.
///
#[must_use]
pub fn eval(item: &Item, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(left, right) => eval(item, left) && eval(item, right),
        Predicate::Or(left, right) => eval(item, left) || eval(item, right),
        Predicate::Not(inner) => !eval(item, inner),

        Predicate::Compare(cmp) => eval_compare(item, cmp),

        Predicate::Exists { field } => item.get(field).is_some(),
        Predicate::NotExists { field } => item.get(field).is_none(),
    }
}

fn eval_compare(item: &Item, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let Some(actual) = item.get(field) else {
        return false;
    };

    // Undefined comparisons are non-matches.
    match op {
        CompareOp::Eq => compare_eq(actual, value).unwrap_or(false),
        CompareOp::Ne => compare_eq(actual, value).is_some_and(|eq| !eq),

        CompareOp::Lt => compare_order(actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(actual, value).is_some_and(Ordering::is_ge),

        CompareOp::BeginsWith => begins_with(actual, value).unwrap_or(false),
    }
}
