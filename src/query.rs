// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregate and month-scoped questions over a record store.
//!
//! Months are 0-indexed (0 = January) throughout this module.

use crate::errors::StoreResult;
use crate::models::{MonthTotals, Transaction, TransactionType, TransactionUpdate};
use crate::store::RecordStore;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use tracing::info;

/// Newest date first; equal dates put the later insertion (higher id) first.
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
}

pub fn sort_newest_first(txs: &mut [Transaction]) {
    txs.sort_by(newest_first);
}

pub fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month0() == month && date.year() == year
}

/// Income counts up, expense counts down. Zero for an empty slice.
pub fn balance_of(txs: &[Transaction]) -> Decimal {
    txs.iter().map(Transaction::signed_amount).sum()
}

pub fn sum_amounts(txs: &[Transaction]) -> Decimal {
    txs.iter().map(|t| t.amount).sum()
}

pub fn month_totals(txs: &[Transaction]) -> MonthTotals {
    let mut incomes = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in txs {
        match t.r#type {
            TransactionType::Income => incomes += t.amount,
            TransactionType::Expense => expenses += t.amount,
        }
    }
    MonthTotals {
        incomes,
        expenses,
        balance: incomes - expenses,
    }
}

pub fn current_balance(store: &impl RecordStore) -> StoreResult<Decimal> {
    Ok(balance_of(&store.all()?))
}

/// Records of type `t` dated within the month. Callers reduce with [`sum_amounts`].
pub fn totals_for_month(
    store: &impl RecordStore,
    month: u32,
    year: i32,
    t: TransactionType,
) -> StoreResult<Vec<Transaction>> {
    Ok(store
        .by_type(t)?
        .into_iter()
        .filter(|tx| in_month(tx.date, month, year))
        .collect())
}

pub fn transactions_for_month(
    store: &impl RecordStore,
    month: u32,
    year: i32,
) -> StoreResult<Vec<Transaction>> {
    let mut txs: Vec<Transaction> = store
        .all()?
        .into_iter()
        .filter(|tx| in_month(tx.date, month, year))
        .collect();
    sort_newest_first(&mut txs);
    Ok(txs)
}

pub fn recent_transactions(store: &impl RecordStore, limit: i64) -> StoreResult<Vec<Transaction>> {
    if limit <= 0 {
        return Ok(Vec::new());
    }
    store.newest(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Stores the record as given; amount sign and category are not checked.
pub fn insert(
    store: &mut impl RecordStore,
    r#type: TransactionType,
    amount: Decimal,
    date: NaiveDate,
    category: &str,
    note: Option<&str>,
) -> StoreResult<i64> {
    let id = store.insert(&Transaction::new(r#type, amount, date, category, note))?;
    info!(id, kind = %r#type, %amount, %date, category, "recorded transaction");
    Ok(id)
}

pub fn update_by_id(
    store: &mut impl RecordStore,
    id: i64,
    amount: Decimal,
    date: NaiveDate,
    category: &str,
    note: Option<&str>,
) -> StoreResult<()> {
    store.update(
        id,
        &TransactionUpdate {
            amount,
            date,
            category: category.to_string(),
            note: note.map(|s| s.to_string()),
        },
    )?;
    info!(id, "updated transaction");
    Ok(())
}

pub fn delete_by_id(store: &mut impl RecordStore, id: i64) -> StoreResult<()> {
    store.delete(id)?;
    info!(id, "deleted transaction");
    Ok(())
}

pub fn clear_all(store: &mut impl RecordStore) -> StoreResult<()> {
    store.clear()?;
    info!("cleared all transactions");
    Ok(())
}
