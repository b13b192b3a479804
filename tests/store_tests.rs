// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::errors::StoreError;
use pocketledger::models::TransactionType;
use pocketledger::store::{RecordStore, SqliteStore};
use pocketledger::{db, utils};
use rusqlite::Connection;
use tempfile::tempdir;

fn user_version(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA user_version", [], |r| r.get(0)).unwrap()
}

#[test]
fn fresh_database_reaches_latest_schema() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    assert_eq!(user_version(&conn), db::schema_version());
    let legacy: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='expenses'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(legacy, 0);

    // running again is harmless
    db::migrate(&mut conn).unwrap();
    assert_eq!(user_version(&conn), db::schema_version());
}

#[test]
fn legacy_expenses_become_expense_transactions() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE expenses(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            reason TEXT NOT NULL,
            amount TEXT NOT NULL,
            date TEXT NOT NULL,
            category TEXT NOT NULL
        );
        INSERT INTO expenses(reason, amount, date, category) VALUES
            ('Groceries', '45.10', '2024-03-02', 'Food'),
            ('  ', '12', '2024-03-05', 'Transport');
        PRAGMA user_version = 1;
        "#,
    )
    .unwrap();

    db::migrate(&mut conn).unwrap();
    let store = SqliteStore::new(conn);
    let all = store.all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|t| t.r#type == TransactionType::Expense));
    assert_eq!(all[0].note.as_deref(), Some("Groceries"));
    assert_eq!(all[0].amount.to_string(), "45.10");
    assert_eq!(all[1].note, None);
    assert_eq!(all[1].category, "Transport");
}

#[test]
fn by_type_uses_equality_lookup() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    conn.execute_batch(
        "INSERT INTO transactions(type, amount, category, date) VALUES
            ('income', '5', 'Gifts', '2024-01-01'),
            ('expense', '3', 'Food', '2024-01-02');",
    )
    .unwrap();
    let store = SqliteStore::new(conn);
    let incomes = store.by_type(TransactionType::Income).unwrap();
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].category, "Gifts");
}

#[test]
fn corrupt_rows_are_skipped_by_reads_and_kept_by_scan() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    conn.execute_batch(
        "INSERT INTO transactions(type, amount, category, date) \
             VALUES ('expense', 'lots', 'Food', '2024-01-02');
         INSERT INTO transactions(type, amount, category, date) \
             VALUES ('income', '10', 'Salary', '2024-01-03');",
    )
    .unwrap();
    let store = SqliteStore::new(conn);

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, "Salary");
    assert_eq!(store.by_type(TransactionType::Expense).unwrap().len(), 0);

    let scan = store.scan().unwrap();
    assert_eq!(scan.records.len(), 1);
    assert_eq!(scan.corrupt.len(), 1);
    match &scan.corrupt[0] {
        StoreError::Corrupt { field, value, .. } => {
            assert_eq!(*field, "amount");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn type_column_rejects_unknown_values() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    let res = conn.execute(
        "INSERT INTO transactions(type, amount, category, date) \
         VALUES ('transfer', '1', 'Food', '2024-01-02')",
        [],
    );
    assert!(res.is_err());
}

#[test]
fn explicit_db_path_is_created_and_migrated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("ledger.sqlite");
    let conn = db::open_or_init(Some(path.as_path())).unwrap();
    assert!(path.exists());
    assert_eq!(user_version(&conn), db::schema_version());
    assert_eq!(db::db_path(Some(path.as_path())).unwrap(), path);
}

#[test]
fn currency_symbol_defaults_and_persists() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    assert_eq!(utils::get_currency_symbol(&conn).unwrap(), "$");
    utils::set_currency_symbol(&conn, "€").unwrap();
    assert_eq!(utils::get_currency_symbol(&conn).unwrap(), "€");
    assert_eq!(
        utils::fmt_money(&"-12.5".parse().unwrap(), "€"),
        "-€12.50"
    );
}
