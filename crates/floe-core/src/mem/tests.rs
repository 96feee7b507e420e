use crate::{
    interp::{Interpreter, Outcome, WriteOutcome},
    item::Item,
    mem::{MemStore, StoreError},
    op::{DeleteOp, GetOp, Op, PutOp, QueryOp, ReadTarget, ScanOp, UpdateAction, UpdateOp},
    predicate::Predicate,
};
use std::num::NonZeroU32;

fn transport(mode: &str, line: &str) -> Item {
    Item::new().with("mode", mode).with("line", line)
}

fn store_with_lines() -> MemStore {
    let mut store = MemStore::new();
    store.create_table("transport", &["mode", "line"]);

    for line in ["Circle", "Metropolitan", "Central"] {
        let put = PutOp {
            table: "transport".into(),
            item: transport("Underground", line),
            condition: None,
        };
        assert_eq!(
            store.execute(put.into()).unwrap(),
            Outcome::Write(WriteOutcome::Applied)
        );
    }

    store
}

fn rows(outcome: Outcome) -> Vec<Item> {
    match outcome {
        Outcome::Rows(rows) => rows,
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn put_overwrites_by_key() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    let first = Item::new().with("id", 1).with("v", "a");
    let second = Item::new().with("id", 1).with("v", "b");
    for item in [first, second.clone()] {
        let op = PutOp {
            table: "t".into(),
            item,
            condition: None,
        };
        store.execute(op.into()).unwrap();
    }

    let got = store
        .execute(Op::Get(GetOp {
            table: "t".into(),
            key: Item::new().with("id", 1),
        }))
        .unwrap();
    assert_eq!(got, Outcome::Row(Some(second)));
}

#[test]
fn scan_returns_key_order_and_applies_limit_first() {
    let mut store = store_with_lines();

    let all = rows(
        store
            .execute(Op::Scan(ScanOp {
                target: ReadTarget::table("transport"),
                limit: None,
            }))
            .unwrap(),
    );
    // Key order is (mode, line): Central, Circle, Metropolitan.
    let lines: Vec<&str> = all.iter().map(|i| i.text("line").unwrap()).collect();
    assert_eq!(lines, ["Central", "Circle", "Metropolitan"]);

    let bounded = rows(
        store
            .execute(Op::Scan(ScanOp {
                target: ReadTarget::table("transport"),
                limit: NonZeroU32::new(2),
            }))
            .unwrap(),
    );
    assert_eq!(bounded.len(), 2);
    assert_eq!(bounded[0].text("line").unwrap(), "Central");
}

#[test]
fn query_filters_before_limiting() {
    let mut store = store_with_lines();

    let op = QueryOp {
        target: ReadTarget::table("transport"),
        predicate: Predicate::eq("mode", "Underground")
            .and(Predicate::begins_with("line", "C")),
        limit: NonZeroU32::new(1),
    };
    let matched = rows(store.execute(op.into()).unwrap());

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].text("line").unwrap(), "Central");
}

#[test]
fn index_targets_are_sparse_and_index_ordered() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);
    store.create_index("t", "by-rank", &["rank"]).unwrap();

    let items = [
        Item::new().with("id", 1).with("rank", 30),
        Item::new().with("id", 2).with("rank", 10),
        Item::new().with("id", 3), // no rank: invisible through the index
    ];
    for item in items {
        store
            .execute(Op::Put(PutOp {
                table: "t".into(),
                item,
                condition: None,
            }))
            .unwrap();
    }

    let via_index = rows(
        store
            .execute(Op::Scan(ScanOp {
                target: ReadTarget::index("t", "by-rank"),
                limit: None,
            }))
            .unwrap(),
    );
    let ids: Vec<i64> = via_index.iter().map(|i| i.int("id").unwrap()).collect();
    assert_eq!(ids, [2, 1]);
}

#[test]
fn unknown_table_and_index_are_faults() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    let missing_table = store.execute(Op::Scan(ScanOp {
        target: ReadTarget::table("nope"),
        limit: None,
    }));
    assert_eq!(
        missing_table.unwrap_err(),
        StoreError::TableNotFound {
            table: "nope".into()
        }
    );

    let missing_index = store.execute(Op::Scan(ScanOp {
        target: ReadTarget::index("t", "ghost"),
        limit: None,
    }));
    assert_eq!(
        missing_index.unwrap_err(),
        StoreError::IndexNotFound {
            table: "t".into(),
            index: "ghost".into()
        }
    );
}

#[test]
fn missing_key_attribute_is_a_fault() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    let err = store
        .execute(Op::Put(PutOp {
            table: "t".into(),
            item: Item::new().with("v", 1),
            condition: None,
        }))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::MissingKeyField {
            table: "t".into(),
            field: "id".into()
        }
    );
}

#[test]
fn conditional_put_evaluates_against_stored_item() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    store
        .execute(Op::Put(PutOp {
            table: "t".into(),
            item: Item::new().with("id", 1).with("age", 15),
            condition: None,
        }))
        .unwrap();

    let guarded = |condition: Predicate| {
        Op::Put(PutOp {
            table: "t".into(),
            item: Item::new().with("id", 1).with("age", 200),
            condition: Some(condition),
        })
    };

    let rejected = store.execute(guarded(Predicate::eq("age", 156))).unwrap();
    assert_eq!(rejected, Outcome::Write(WriteOutcome::ConditionFailed));

    let applied = store.execute(guarded(Predicate::eq("age", 15))).unwrap();
    assert_eq!(applied, Outcome::Write(WriteOutcome::Applied));

    assert_eq!(store.stats().condition_rejections, 1);
}

#[test]
fn conditional_delete_against_absent_row() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    // Absent row: every attribute is missing.
    let op = |condition: Predicate| {
        Op::Delete(DeleteOp {
            table: "t".into(),
            key: Item::new().with("id", 9),
            condition: Some(condition),
        })
    };

    assert_eq!(
        store.execute(op(Predicate::exists("id"))).unwrap(),
        Outcome::Write(WriteOutcome::ConditionFailed)
    );
    assert_eq!(
        store.execute(op(Predicate::not_exists("id"))).unwrap(),
        Outcome::Write(WriteOutcome::Applied)
    );
}

#[test]
fn update_sets_and_removes_fields() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    store
        .execute(Op::Put(PutOp {
            table: "t".into(),
            item: Item::new().with("id", 1).with("a", 1).with("b", 2),
            condition: None,
        }))
        .unwrap();

    store
        .execute(Op::Update(UpdateOp {
            table: "t".into(),
            key: Item::new().with("id", 1),
            actions: vec![UpdateAction::set("a", 10), UpdateAction::remove("b")],
            condition: None,
        }))
        .unwrap();

    let row = match store
        .execute(Op::Get(GetOp {
            table: "t".into(),
            key: Item::new().with("id", 1),
        }))
        .unwrap()
    {
        Outcome::Row(Some(row)) => row,
        other => panic!("expected a row, got {other:?}"),
    };
    assert_eq!(row.int("a").unwrap(), 10);
    assert!(row.get("b").is_none());
}

#[test]
fn update_rejects_key_attribute_mutation() {
    let mut store = MemStore::new();
    store.create_table("t", &["id"]);

    let err = store
        .execute(Op::Update(UpdateOp {
            table: "t".into(),
            key: Item::new().with("id", 1),
            actions: vec![UpdateAction::set("id", 2)],
            condition: None,
        }))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::KeyFieldUpdate {
            table: "t".into(),
            field: "id".into()
        }
    );
}

#[test]
fn stats_count_scans_and_rows() {
    let mut store = store_with_lines();

    store
        .execute(Op::Scan(ScanOp {
            target: ReadTarget::table("transport"),
            limit: None,
        }))
        .unwrap();

    let stats = store.stats();
    assert_eq!(stats.scan_calls, 1);
    assert_eq!(stats.put_calls, 3);
    assert_eq!(stats.rows_scanned, 3);
    assert_eq!(stats.rows_returned, 3);
}
