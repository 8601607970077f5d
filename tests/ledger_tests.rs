// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;
use tallybook::db::init_schema;
use tallybook::error::Error;
use tallybook::ledger::{Filter, Ledger};
use tallybook::models::{Kind, NewTransaction};
use tallybook::store::{SettingsStore, SqliteStore, TRANSACTIONS_KEY};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

fn seed(ledger: &mut Ledger<SqliteStore>) {
    ledger
        .add(NewTransaction::new("Coffee", Decimal::new(-450, 2), "2024-01-05", "Food & Drinks"))
        .unwrap();
    ledger
        .add(NewTransaction::new("Paycheck", Decimal::new(2000, 0), "2024-01-01", "Salary"))
        .unwrap();
    ledger
        .add(NewTransaction::new("Coffee beans", Decimal::new(-1800, 2), "2024-01-03", "Food & Drinks"))
        .unwrap();
}

#[test]
fn mutations_publish_sorted_snapshots() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    ledger.subscribe(move |items| sink.borrow_mut().push(items.len()));

    seed(&mut ledger);
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    let titles: Vec<&str> = ledger.transactions().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Coffee", "Coffee beans", "Paycheck"]);

    let id = ledger.transactions()[0].id.clone();
    ledger.remove(&id).unwrap();
    assert_eq!(*seen.borrow(), vec![1, 2, 3, 2]);
    assert!(ledger.get(&id).is_none());
}

#[test]
fn failed_update_does_not_publish() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    seed(&mut ledger);
    let calls = Rc::new(RefCell::new(0));
    let sink = calls.clone();
    ledger.subscribe(move |_| *sink.borrow_mut() += 1);

    let ghost = NewTransaction::new("x", Decimal::ONE, "2024-01-01", "Other").with_id("ghost".into());
    assert!(matches!(ledger.update(&ghost), Err(Error::NotFound(_))));
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(ledger.transactions().len(), 3);
}

#[test]
fn failed_refresh_keeps_stale_snapshot() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    seed(&mut ledger);
    ledger.store().set_setting(TRANSACTIONS_KEY, "oops").unwrap();
    assert!(matches!(ledger.refresh(), Err(Error::Parse(_))));
    assert_eq!(ledger.transactions().len(), 3);
}

#[test]
fn update_is_visible_after_refresh() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    seed(&mut ledger);
    let mut tx = ledger.transactions()[2].clone();
    tx.amount = Decimal::new(2100, 0);
    ledger.update(&tx).unwrap();
    assert_eq!(ledger.get(&tx.id).unwrap().amount, Decimal::new(2100, 0));
}

#[test]
fn filters_by_kind_category_and_search() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    seed(&mut ledger);

    let income = ledger.filtered(&Filter {
        kind: Kind::Income,
        ..Default::default()
    });
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].title, "Paycheck");

    let food = ledger.filtered(&Filter {
        kind: Kind::Expense,
        category: Some("Food & Drinks".into()),
        search: None,
    });
    assert_eq!(food.len(), 2);

    let beans = ledger.filtered(&Filter {
        search: Some("BEANS".into()),
        ..Default::default()
    });
    assert_eq!(beans.len(), 1);
}

#[test]
fn totals_reflect_snapshot() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    seed(&mut ledger);
    let t = ledger.totals();
    assert_eq!(t.income, Decimal::new(2000, 0));
    assert_eq!(t.expenses, Decimal::new(2250, 2));
    assert_eq!(t.balance, Decimal::new(197750, 2));
}
