//! Description-shape coverage: every handle shape resolves its own scan and
//! query implementations statically, and the emitted descriptions carry the
//! right target and limit.

mod common;

use common::Transport;
use floe::prelude::*;
use floe::{Queryable, Scannable};
use floe_core::op::{QueryOp, ScanOp};
use std::num::NonZeroU32;

fn table() -> Table<Transport> {
    Table::new("transport")
}

fn n(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap()
}

/// Handle-shape-agnostic call sites: resolution is purely a trait bound.
fn describe_scan<H: Scannable>(handle: &H) -> ScanOp {
    handle.scan()
}

fn describe_query<H: Queryable>(handle: &H, predicate: Predicate) -> QueryOp {
    handle.query(predicate)
}

#[test]
fn table_scan_targets_base_table_without_limit() {
    let op = describe_scan(&table());
    assert_eq!(op.target.table, "transport");
    assert_eq!(op.target.index, None);
    assert_eq!(op.limit, None);
}

#[test]
fn index_scan_targets_index_explicitly() {
    let op = describe_scan(&table().index("by-line"));
    assert_eq!(op.target.table, "transport");
    assert_eq!(op.target.index.as_deref(), Some("by-line"));
    assert_eq!(op.limit, None);
}

#[test]
fn limited_table_scan_carries_limit() {
    let op = describe_scan(&table().limit(n(10)));
    assert_eq!(op.target.table, "transport");
    assert_eq!(op.target.index, None);
    assert_eq!(op.limit, NonZeroU32::new(10));
}

#[test]
fn limited_index_scan_carries_limit_and_index() {
    let op = describe_scan(&table().index("by-line").limit(n(3)));
    assert_eq!(op.target.index.as_deref(), Some("by-line"));
    assert_eq!(op.limit, NonZeroU32::new(3));
}

#[test]
fn query_descriptions_mirror_scan_targets() {
    let predicate = Predicate::eq("mode", "Underground");

    let plain = describe_query(&table(), predicate.clone());
    assert_eq!(plain.target.index, None);
    assert_eq!(plain.limit, None);

    let indexed = describe_query(&table().index("by-line"), predicate.clone());
    assert_eq!(indexed.target.index.as_deref(), Some("by-line"));

    let bounded = describe_query(&table().limit(n(7)), predicate.clone());
    assert_eq!(bounded.limit, NonZeroU32::new(7));

    let both = describe_query(&table().index("by-line").limit(n(2)), predicate);
    assert_eq!(both.target.index.as_deref(), Some("by-line"));
    assert_eq!(both.limit, NonZeroU32::new(2));
}

#[test]
fn relimiting_is_last_write_wins() {
    let handle = table().limit(n(10)).limit(n(3));
    assert_eq!(handle.item_limit(), n(3));
    assert_eq!(describe_scan(&handle).limit, NonZeroU32::new(3));
}

#[test]
fn one_predicate_tree_serves_many_descriptions() {
    let predicate = Predicate::eq("mode", "Underground").and(Predicate::begins_with("line", "C"));

    let a = table().query(predicate.clone());
    let b = table().index("by-line").query(predicate.clone());

    // Composition never mutated the tree; both descriptions carry it intact.
    assert_eq!(a.predicate, predicate);
    assert_eq!(b.predicate, predicate);
}

#[test]
fn given_descriptions_carry_the_condition() {
    let table = table();
    let guard = table.given(Predicate::eq("mode", "Underground"));

    let put = guard.put(&Transport::new("Underground", "Circle"));
    assert_eq!(put.condition, Some(Predicate::eq("mode", "Underground")));

    let delete = guard.delete(Key::new("mode", "Underground").and("line", "Circle"));
    assert_eq!(delete.condition, Some(Predicate::eq("mode", "Underground")));
}
