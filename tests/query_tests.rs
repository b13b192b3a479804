// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::db;
use pocketledger::errors::StoreError;
use pocketledger::models::TransactionType::{Expense, Income};
use pocketledger::query;
use pocketledger::store::{MemoryStore, RecordStore, SqliteStore};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sqlite_store() -> SqliteStore {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    SqliteStore::new(conn)
}

fn seed_june(store: &mut impl RecordStore) {
    query::insert(
        store,
        Income,
        dec("2000"),
        date("2024-06-01"),
        "Salary",
        Some("Payroll"),
    )
    .unwrap();
    query::insert(store, Expense, dec("150.75"), date("2024-06-03"), "Food", None).unwrap();
    query::insert(store, Expense, dec("40"), date("2024-06-05"), "Gasoline", None).unwrap();
}

#[test]
fn balance_of_june_scenario() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    assert_eq!(query::current_balance(&store).unwrap(), dec("1809.25"));

    let mut mem = MemoryStore::new();
    seed_june(&mut mem);
    assert_eq!(query::current_balance(&mem).unwrap(), dec("1809.25"));
}

#[test]
fn balance_of_empty_store_is_zero() {
    let store = sqlite_store();
    assert_eq!(query::current_balance(&store).unwrap(), Decimal::ZERO);
    assert_eq!(query::current_balance(&MemoryStore::new()).unwrap(), Decimal::ZERO);
}

#[test]
fn expense_totals_for_june() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    let expenses = query::totals_for_month(&store, 5, 2024, Expense).unwrap();
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|t| t.r#type == Expense));
    assert_eq!(query::sum_amounts(&expenses), dec("190.75"));

    let incomes = query::totals_for_month(&store, 5, 2024, Income).unwrap();
    assert_eq!(query::sum_amounts(&incomes), dec("2000"));
    assert!(query::totals_for_month(&store, 6, 2024, Expense).unwrap().is_empty());
    assert!(query::totals_for_month(&store, 5, 2023, Expense).unwrap().is_empty());
}

#[test]
fn month_listing_is_scoped_and_newest_first() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    query::insert(&mut store, Expense, dec("12"), date("2024-05-31"), "Food", None).unwrap();
    query::insert(&mut store, Income, dec("80"), date("2024-07-01"), "Gifts", None).unwrap();

    let june = query::transactions_for_month(&store, 5, 2024).unwrap();
    assert_eq!(june.len(), 3);
    assert!(june.iter().all(|t| query::in_month(t.date, 5, 2024)));
    assert!(june.windows(2).all(|w| w[0].date >= w[1].date));
    assert_eq!(june[0].date, date("2024-06-05"));
}

#[test]
fn month_listing_breaks_date_ties_by_latest_insert() {
    let mut store = MemoryStore::new();
    let first =
        query::insert(&mut store, Expense, dec("1"), date("2024-06-10"), "Food", None).unwrap();
    let second =
        query::insert(&mut store, Income, dec("2"), date("2024-06-10"), "Sales", None).unwrap();
    let june = query::transactions_for_month(&store, 5, 2024).unwrap();
    assert_eq!(june[0].id, Some(second));
    assert_eq!(june[1].id, Some(first));
}

#[test]
fn recent_respects_limit_and_order() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    query::insert(&mut store, Expense, dec("9"), date("2023-12-24"), "Shopping", None).unwrap();

    let two = query::recent_transactions(&store, 2).unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].date, date("2024-06-05"));
    assert_eq!(two[1].date, date("2024-06-03"));

    let all = query::recent_transactions(&store, 50).unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0].date >= w[1].date));

    assert!(query::recent_transactions(&store, 0).unwrap().is_empty());
    assert!(query::recent_transactions(&store, -3).unwrap().is_empty());
}

fn recent_ids(store: &impl RecordStore, limit: i64) -> Vec<Option<i64>> {
    query::recent_transactions(store, limit)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect()
}

#[test]
fn recent_agrees_between_stores() {
    let mut sql = sqlite_store();
    let mut mem = MemoryStore::new();
    seed_june(&mut sql);
    seed_june(&mut mem);
    assert_eq!(recent_ids(&sql, 3), recent_ids(&mem, 3));
}

fn seed_far_future(store: &mut impl RecordStore, far: NaiveDate) {
    query::insert(store, Expense, dec("1"), far, "Food", None).unwrap();
    query::insert(store, Expense, dec("2"), date("2024-01-01"), "Food", None).unwrap();
}

#[test]
fn recent_orders_five_digit_years_as_dates_in_both_stores() {
    let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
    let mut sql = sqlite_store();
    let mut mem = MemoryStore::new();
    seed_far_future(&mut sql, far);
    seed_far_future(&mut mem, far);

    let newest = query::recent_transactions(&sql, 2).unwrap();
    assert_eq!(newest[0].date, far);
    assert_eq!(newest[1].date, date("2024-01-01"));
    assert_eq!(recent_ids(&sql, 2), recent_ids(&mem, 2));
    assert_eq!(recent_ids(&sql, 1), vec![Some(1)]);
}

#[test]
fn reads_skip_unreadable_rows() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::migrate(&mut conn).unwrap();
    conn.execute_batch(
        "INSERT INTO transactions(type, amount, category, date) \
             VALUES ('income', '100', 'Salary', '2024-06-01');
         INSERT INTO transactions(type, amount, category, date) \
             VALUES ('expense', '1', 'Food', '2024-13-40');",
    )
    .unwrap();
    let store = SqliteStore::new(conn);

    assert_eq!(query::current_balance(&store).unwrap(), dec("100"));
    let june = query::transactions_for_month(&store, 5, 2024).unwrap();
    assert_eq!(june.len(), 1);
    assert_eq!(june[0].category, "Salary");
    assert_eq!(query::recent_transactions(&store, 5).unwrap().len(), 1);
    assert!(
        query::totals_for_month(&store, 5, 2024, Expense)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn update_changes_only_target_record() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    query::update_by_id(
        &mut store,
        2,
        dec("99.5"),
        date("2024-06-04"),
        "Health",
        Some("pharmacy"),
    )
    .unwrap();

    let edited = store.get(2).unwrap().unwrap();
    assert_eq!(edited.amount, dec("99.5"));
    assert_eq!(edited.date, date("2024-06-04"));
    assert_eq!(edited.category, "Health");
    assert_eq!(edited.note.as_deref(), Some("pharmacy"));
    assert_eq!(edited.r#type, Expense);

    let untouched = store.get(3).unwrap().unwrap();
    assert_eq!(untouched.amount, dec("40"));
}

#[test]
fn update_missing_id_is_not_found() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    let err = query::update_by_id(&mut store, 42, dec("1"), date("2024-06-01"), "Food", None)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
    assert_eq!(store.all().unwrap().len(), 3);

    let mut mem = MemoryStore::new();
    let err =
        query::update_by_id(&mut mem, 1, dec("1"), date("2024-06-01"), "Food", None).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(1)));
}

#[test]
fn delete_missing_id_is_a_no_op() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    query::delete_by_id(&mut store, 1).unwrap();
    query::delete_by_id(&mut store, 1).unwrap();
    query::delete_by_id(&mut store, 77).unwrap();
    assert_eq!(store.all().unwrap().len(), 2);
    assert_eq!(query::current_balance(&store).unwrap(), dec("-190.75"));
}

#[test]
fn clear_all_wipes_everything() {
    let mut store = sqlite_store();
    seed_june(&mut store);
    query::clear_all(&mut store).unwrap();
    assert!(store.all().unwrap().is_empty());
    assert_eq!(query::current_balance(&store).unwrap(), Decimal::ZERO);

    // ids are not reused after a wipe
    let id =
        query::insert(&mut store, Income, dec("5"), date("2024-06-01"), "Gifts", None).unwrap();
    assert!(id > 3);
}

#[test]
fn insert_accepts_unchecked_values() {
    let mut store = sqlite_store();
    let id =
        query::insert(&mut store, Income, dec("-5"), date("2024-01-01"), "Food", None).unwrap();
    let t = store.get(id).unwrap().unwrap();
    assert_eq!(t.amount, dec("-5"));
    assert_eq!(t.category, "Food");
    assert_eq!(query::current_balance(&store).unwrap(), dec("-5"));
}

#[test]
fn month_totals_balance() {
    let mut store = MemoryStore::new();
    seed_june(&mut store);
    let june = query::transactions_for_month(&store, 5, 2024).unwrap();
    let totals = query::month_totals(&june);
    assert_eq!(totals.incomes, dec("2000"));
    assert_eq!(totals.expenses, dec("190.75"));
    assert_eq!(totals.balance, dec("1809.25"));
}
