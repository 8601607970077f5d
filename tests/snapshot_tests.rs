// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tallybook::config::AppConfig;
use tallybook::db::init_schema;
use tallybook::error::Error;
use tallybook::models::{NewTransaction, RecurringType, Transaction};
use tallybook::store::{RecordStore, SqliteStore, export_snapshot, import_snapshot};
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

fn by_id(mut v: Vec<Transaction>) -> Vec<Transaction> {
    v.sort_by(|a, b| a.id.cmp(&b.id));
    v
}

#[test]
fn export_then_import_round_trips() {
    let dir = tempdir().unwrap();
    let cfg = AppConfig::at(dir.path()).unwrap();

    let src_conn = setup();
    let src = SqliteStore::new(&src_conn);
    src.insert(NewTransaction::new("Coffee", Decimal::new(-450, 2), "2024-01-05", "Food & Drinks"))
        .unwrap();
    src.insert(
        NewTransaction::new("Rent", Decimal::new(-95000, 2), "2024-01-01", "Housing")
            .recurring(RecurringType::Monthly, None),
    )
    .unwrap();

    let path = export_snapshot(&src, &cfg.snapshot_path()).unwrap();
    assert!(path.is_absolute());
    assert!(path.ends_with("transactions-snapshot.json"));

    let dst_conn = setup();
    let dst = SqliteStore::new(&dst_conn);
    dst.insert(NewTransaction::new("Stale", Decimal::ONE, "2020-01-01", "Other"))
        .unwrap();
    assert_eq!(import_snapshot(&dst, &path).unwrap(), 2);

    assert_eq!(by_id(dst.read_all().unwrap()), by_id(src.read_all().unwrap()));
}

#[test]
fn import_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let err = import_snapshot(&store, &dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn import_garbage_is_parse_error_and_keeps_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"id": "not-a-list"}"#).unwrap();

    let conn = setup();
    let store = SqliteStore::new(&conn);
    store
        .insert(NewTransaction::new("Keep", Decimal::ONE, "2024-01-01", "Other"))
        .unwrap();
    let before = store.raw_blob().unwrap();

    assert!(matches!(import_snapshot(&store, &path), Err(Error::Parse(_))));
    assert_eq!(store.raw_blob().unwrap(), before);
}

#[test]
fn export_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let path = export_snapshot(&store, &dir.path().join("nested/deeper/out.json")).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text.trim(), "[]");
}
