// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{RecordStore, Scan};
use crate::errors::{StoreError, StoreResult};
use crate::models::{Transaction, TransactionType, TransactionUpdate};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use tracing::{debug, warn};

const SELECT_COLUMNS: &str = "SELECT id, type, amount, category, date, note FROM transactions";

/// Record store backed by the `transactions` table.
pub struct SqliteStore {
    conn: Connection,
}

/// Columns exactly as stored, before parsing.
struct RawRow {
    id: i64,
    r#type: String,
    amount: String,
    category: String,
    date: String,
    note: Option<String>,
}

impl RawRow {
    fn from_row(r: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: r.get(0)?,
            r#type: r.get(1)?,
            amount: r.get(2)?,
            category: r.get(3)?,
            date: r.get(4)?,
            note: r.get(5)?,
        })
    }

    fn parse(self) -> StoreResult<Transaction> {
        let corrupt = |field: &'static str, value: &str| StoreError::Corrupt {
            id: self.id,
            field,
            value: value.to_string(),
        };
        let r#type = self
            .r#type
            .parse::<TransactionType>()
            .map_err(|_| corrupt("type", &self.r#type))?;
        let amount = self
            .amount
            .parse::<Decimal>()
            .map_err(|_| corrupt("amount", &self.amount))?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| corrupt("date", &self.date))?;
        Ok(Transaction {
            id: Some(self.id),
            r#type,
            amount,
            category: self.category,
            date,
            note: self.note,
        })
    }
}

impl SqliteStore {
    /// Wraps a connection whose schema is already migrated (see `db::migrate`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn into_inner(self) -> Connection {
        self.conn
    }

    fn query_scan(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> StoreResult<Scan> {
        let mut stmt = self.conn.prepare(sql)?;
        let raw = stmt
            .query_map(args, RawRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let mut scan = Scan::default();
        for row in raw {
            match row.parse() {
                Ok(t) => scan.records.push(t),
                Err(e) => scan.corrupt.push(e),
            }
        }
        Ok(scan)
    }

    /// Readable rows only; each unreadable one is logged and skipped.
    fn query(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> StoreResult<Vec<Transaction>> {
        let scan = self.query_scan(sql, args)?;
        for e in &scan.corrupt {
            warn!(error = %e, "skipping unreadable transaction");
        }
        Ok(scan.records)
    }
}

impl RecordStore for SqliteStore {
    fn insert(&mut self, tx: &Transaction) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO transactions(type, amount, category, date, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                tx.r#type.as_str(),
                tx.amount.to_string(),
                tx.category,
                tx.date.to_string(),
                tx.note
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, kind = %tx.r#type, "inserted transaction");
        Ok(id)
    }

    fn update(&mut self, id: i64, update: &TransactionUpdate) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE transactions SET amount=?1, date=?2, category=?3, note=?4 WHERE id=?5",
            params![
                update.amount.to_string(),
                update.date.to_string(),
                update.category,
                update.note,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "updated transaction");
        Ok(())
    }

    fn delete(&mut self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        debug!(id, changed, "deleted transaction");
        Ok(())
    }

    fn get(&self, id: i64) -> StoreResult<Option<Transaction>> {
        let raw = self
            .conn
            .query_row(
                &format!("{} WHERE id=?1", SELECT_COLUMNS),
                params![id],
                RawRow::from_row,
            )
            .optional()?;
        raw.map(RawRow::parse).transpose()
    }

    fn all(&self) -> StoreResult<Vec<Transaction>> {
        self.query(&format!("{} ORDER BY id", SELECT_COLUMNS), &[])
    }

    fn scan(&self) -> StoreResult<Scan> {
        self.query_scan(&format!("{} ORDER BY id", SELECT_COLUMNS), &[])
    }

    fn by_type(&self, t: TransactionType) -> StoreResult<Vec<Transaction>> {
        self.query(
            &format!("{} WHERE type=?1 ORDER BY id", SELECT_COLUMNS),
            &[&t.as_str()],
        )
    }

    fn clear(&mut self) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM transactions", [])?;
        tx.commit()?;
        debug!(removed, "cleared transactions");
        Ok(())
    }
}
