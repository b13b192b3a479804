// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{MonthTotals, TransactionType};
use crate::query;
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{
    fmt_money, get_currency_symbol, maybe_print_json, parse_month, pretty_table, today,
};
use crate::view::MonthCursor;
use anyhow::Result;
use serde::Serialize;

pub fn balance(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let bal = query::current_balance(store)?;
    let data = serde_json::json!({ "balance": bal.to_string() });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = get_currency_symbol(store.conn())?;
        println!("Current balance: {}", fmt_money(&bal, &symbol));
    }
    Ok(())
}

/// Income and expense totals for the month, built from the per-type month queries.
pub fn month_summary(store: &impl RecordStore, cursor: MonthCursor) -> Result<MonthTotals> {
    let incomes = query::sum_amounts(&query::totals_for_month(
        store,
        cursor.month,
        cursor.year,
        TransactionType::Income,
    )?);
    let expenses = query::sum_amounts(&query::totals_for_month(
        store,
        cursor.month,
        cursor.year,
        TransactionType::Expense,
    )?);
    Ok(MonthTotals {
        incomes,
        expenses,
        balance: incomes - expenses,
    })
}

#[derive(Serialize)]
struct SummaryRow {
    month: String,
    incomes: String,
    expenses: String,
    balance: String,
}

pub fn summary(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let cursor = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => MonthCursor::containing(today()),
    };
    let totals = month_summary(store, cursor)?;
    let row = SummaryRow {
        month: format!("{}-{:02}", cursor.year, cursor.month + 1),
        incomes: totals.incomes.to_string(),
        expenses: totals.expenses.to_string(),
        balance: totals.balance.to_string(),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &row)? {
        let symbol = get_currency_symbol(store.conn())?;
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expenses", "Balance"],
                vec![vec![
                    cursor.label(),
                    fmt_money(&totals.incomes, &symbol),
                    fmt_money(&totals.expenses, &symbol),
                    fmt_money(&totals.balance, &symbol),
                ]],
            )
        );
    }
    Ok(())
}
