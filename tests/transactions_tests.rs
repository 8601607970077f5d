// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tallybook::app::App;
use tallybook::commands::{doctor, transactions};
use tallybook::models::{Kind, NewTransaction, RecurringType};
use tallybook::{cli, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn tx_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["tallybook", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => tx_m.clone(),
        _ => panic!("no tx subcommand"),
    }
}

#[test]
fn add_records_recurring_expense() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let m = tx_matches(&[
        "add", "--title", "Gym", "--amount", "-30", "--date", "2024-03-01", "--category",
        "Healthcare", "--recurring", "monthly", "--until", "2024-12-31",
    ]);
    transactions::handle(&mut app, &m).unwrap();

    let stored = &app.ledger.transactions()[0];
    assert_eq!(stored.amount, Decimal::new(-30, 0));
    assert!(stored.is_recurring);
    assert_eq!(stored.recurring_type, Some(RecurringType::Monthly));
    assert_eq!(stored.recurring_end_date.as_deref(), Some("2024-12-31"));
}

#[test]
fn add_rejects_bad_amount_and_date() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    for args in [
        ["add", "--title", "x", "--amount", "abc", "--date", "2024-01-01", "--category", "Other"],
        ["add", "--title", "x", "--amount", "0", "--date", "2024-01-01", "--category", "Other"],
        ["add", "--title", "x", "--amount", "5", "--date", "01/02/2024", "--category", "Other"],
    ] {
        let m = tx_matches(&args);
        assert!(transactions::handle(&mut app, &m).is_err());
    }
    assert!(app.ledger.transactions().is_empty());
}

#[test]
fn edit_changes_fields_and_clears_recurrence() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let id = app
        .ledger
        .add(
            NewTransaction::new("Netflix", Decimal::new(-1599, 2), "2024-01-15", "Entertainment")
                .recurring(RecurringType::Monthly, None),
        )
        .unwrap();

    let m = tx_matches(&["edit", id.as_str(), "--amount", "-17.99", "--no-recurring"]);
    transactions::handle(&mut app, &m).unwrap();

    let tx = app.ledger.get(&id).unwrap();
    assert_eq!(tx.amount, Decimal::new(-1799, 2));
    assert_eq!(tx.title, "Netflix");
    assert!(!tx.is_recurring);
    assert_eq!(tx.recurring_type, None);
}

#[test]
fn edit_until_alone_moves_end_date_of_recurring_record() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let id = app
        .ledger
        .add(
            NewTransaction::new("Rent", Decimal::new(-900, 0), "2024-01-01", "Housing")
                .recurring(RecurringType::Monthly, Some("2024-06-30")),
        )
        .unwrap();

    let m = tx_matches(&["edit", id.as_str(), "--until", "2024-12-31"]);
    transactions::handle(&mut app, &m).unwrap();
    let tx = app.ledger.get(&id).unwrap();
    assert_eq!(tx.recurring_type, Some(RecurringType::Monthly));
    assert_eq!(tx.recurring_end_date.as_deref(), Some("2024-12-31"));

    let m = tx_matches(&["edit", id.as_str(), "--recurring", "weekly"]);
    transactions::handle(&mut app, &m).unwrap();
    let tx = app.ledger.get(&id).unwrap();
    assert_eq!(tx.recurring_type, Some(RecurringType::Weekly));
    assert_eq!(tx.recurring_end_date.as_deref(), Some("2024-12-31"));
}

#[test]
fn edit_until_on_one_off_is_rejected() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let id = app
        .ledger
        .add(NewTransaction::new("Lamp", Decimal::new(-40, 0), "2024-02-02", "Shopping"))
        .unwrap();

    let m = tx_matches(&["edit", id.as_str(), "--until", "2024-12-31"]);
    assert!(transactions::handle(&mut app, &m).is_err());
    let tx = app.ledger.get(&id).unwrap();
    assert!(!tx.is_recurring);
    assert_eq!(tx.recurring_end_date, None);
}

#[test]
fn edit_unknown_id_fails() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let m = tx_matches(&["edit", "missing", "--title", "x"]);
    assert!(transactions::handle(&mut app, &m).is_err());
}

#[test]
fn rm_unknown_id_is_quiet() {
    let conn = setup();
    let mut app = App::load(&conn).unwrap();
    let m = tx_matches(&["rm", "missing"]);
    transactions::handle(&mut app, &m).unwrap();
}

#[test]
fn list_flags_build_filter() {
    let m = tx_matches(&["list", "--type", "expense", "--category", "Shopping", "--search", "shoe"]);
    let Some(("list", list_m)) = m.subcommand() else {
        panic!("no list subcommand");
    };
    let f = transactions::filter_from_args(list_m).unwrap();
    assert_eq!(f.kind, Kind::Expense);
    assert_eq!(f.category.as_deref(), Some("Shopping"));
    assert_eq!(f.search.as_deref(), Some("shoe"));
}

#[test]
fn doctor_flags_inconsistent_records() {
    let ok = NewTransaction::new("ok", Decimal::ONE, "2024-01-01", "Other").with_id("a".into());
    let mut zero = NewTransaction::new("zero", Decimal::ZERO, "2024-01-01", "Other").with_id("b".into());
    zero.recurring_type = Some(RecurringType::Weekly);
    let dup = NewTransaction::new("dup", Decimal::ONE, "2024-13-01", "Other").with_id("a".into());

    let issues: Vec<String> = doctor::check(&[ok, zero, dup])
        .into_iter()
        .map(|r| r[0].clone())
        .collect();
    assert_eq!(
        issues,
        ["zero_amount", "recurrence_on_one_off", "duplicate_id", "bad_date"]
    );
}
