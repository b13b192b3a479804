// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::label_for;
use crate::errors::StoreError;
use crate::models::{Transaction, TransactionType};
use crate::query;
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{
    fmt_money, get_currency_symbol, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table, today,
};
use crate::view::{CategoryFilter, MonthCursor, TransactionView, TypeFilter};
use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::warn;

pub fn handle(store: &mut SqliteStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("recent", sub)) => recent(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))
}

fn add(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let r#type = required(sub, "type")?
        .parse::<TransactionType>()
        .map_err(|e| anyhow!(e))?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let category = required(sub, "category")?.trim().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let note = sub
        .get_one::<String>("note")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    if crate::categories::find(r#type, &category).is_none() {
        warn!(%category, kind = %r#type, "category is not a built-in {} category", r#type);
    }

    let id = query::insert(store, r#type, amount, date, &category, note)?;
    println!(
        "Recorded {} {} on {} in {} (id {})",
        r#type, amount, date, category, id
    );
    Ok(())
}

fn edit(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("--id is required")?;
    let current = store.get(id)?.ok_or(StoreError::NotFound(id))?;

    let amount = match sub.get_one::<String>("amount") {
        Some(a) => parse_decimal(a)?,
        None => current.amount,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => current.date,
    };
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or(current.category);
    let note = if sub.get_flag("clear-note") {
        None
    } else {
        sub.get_one::<String>("note")
            .map(|s| s.trim().to_string())
            .or(current.note)
    };

    query::update_by_id(store, id, amount, date, &category, note.as_deref())?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn remove(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("--id is required")?;
    query::delete_by_id(store, id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

/// Wipes the store. Refuses unless `--yes` was given.
pub fn clear(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        bail!("This deletes every transaction and cannot be undone; re-run with --yes");
    }
    query::clear_all(store)?;
    println!("All transactions deleted");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: Option<i64>,
    pub date: String,
    pub r#type: TransactionType,
    pub category: String,
    pub label: String,
    pub amount: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: t.date.to_string(),
            r#type: t.r#type,
            category: t.category.clone(),
            label: label_for(&t.category),
            amount: t.amount.to_string(),
            note: t.note.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPage {
    pub month: String,
    pub type_filter: &'static str,
    pub category_filter: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub items: Vec<TransactionRow>,
}

/// Loads the requested month and applies the filters and page from `sub`.
pub fn list_view(store: &impl RecordStore, sub: &clap::ArgMatches) -> Result<TransactionView> {
    let cursor = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => MonthCursor::containing(today()),
    };
    let type_filter = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TypeFilter>().map_err(|e| anyhow!(e))?,
        None => TypeFilter::All,
    };
    let category_filter = match sub.get_one::<String>("category") {
        Some(c) => c.parse::<CategoryFilter>().map_err(|e| anyhow!(e))?,
        None => CategoryFilter::All,
    };

    let mut view = TransactionView::new(cursor);
    view.set_records(query::transactions_for_month(
        store,
        cursor.month,
        cursor.year,
    )?);
    view.set_type_filter(type_filter);
    view.set_category_filter(category_filter);
    if let Some(page) = sub.get_one::<usize>("page") {
        view.set_page(*page);
    }
    Ok(view)
}

fn table_rows(txs: &[&Transaction], symbol: &str) -> Vec<Vec<String>> {
    txs.iter()
        .map(|t| {
            vec![
                t.id.map(|i| i.to_string()).unwrap_or_default(),
                t.date.to_string(),
                label_for(&t.category),
                fmt_money(&t.signed_amount(), symbol),
                t.note.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

fn list(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let view = list_view(store, sub)?;
    let filtered = view.filtered();
    let slice = view.page_slice();
    let page = ListPage {
        month: view.cursor().label(),
        type_filter: view.type_filter().as_str(),
        category_filter: match view.category_filter() {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Key(k) => k.clone(),
        },
        page: view.page(),
        total_pages: view.total_pages(),
        total_records: filtered.len(),
        items: slice.iter().map(|t| TransactionRow::from(*t)).collect(),
    };

    if sub.get_flag("jsonl") {
        return maybe_print_json(false, true, &page.items).map(|_| ());
    }
    if maybe_print_json(sub.get_flag("json"), false, &page)? {
        return Ok(());
    }

    let symbol = get_currency_symbol(store.conn())?;
    let totals = view.totals();
    println!(
        "{}: income {} · expenses {} · balance {}",
        page.month,
        fmt_money(&totals.incomes, &symbol),
        fmt_money(&totals.expenses, &symbol),
        fmt_money(&totals.balance, &symbol)
    );
    println!(
        "{} records · page {} of {}",
        page.total_records, page.page, page.total_pages
    );
    if slice.is_empty() {
        println!("No transactions for this month with the current filters.");
    } else {
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Amount", "Note"],
                table_rows(&slice, &symbol)
            )
        );
    }
    Ok(())
}

fn recent(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let limit = sub.get_one::<i64>("limit").copied().unwrap_or(5);
    let txs = query::recent_transactions(store, limit)?;
    let rows: Vec<TransactionRow> = txs.iter().map(TransactionRow::from).collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let symbol = get_currency_symbol(store.conn())?;
        let refs: Vec<&Transaction> = txs.iter().collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Amount", "Note"],
                table_rows(&refs, &symbol)
            )
        );
    }
    Ok(())
}
