// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{StoreError, StoreResult};
use crate::models::{Transaction, TransactionType, TransactionUpdate};
use crate::query::sort_newest_first;

/// Every row of a store: the readable records and the rows that failed to parse.
#[derive(Debug, Default)]
pub struct Scan {
    pub records: Vec<Transaction>,
    pub corrupt: Vec<StoreError>,
}

/// Persistent collection of transactions keyed by a store-assigned id.
pub trait RecordStore {
    /// Persists a new record and returns its id. Any `id` already set on `tx` is ignored.
    fn insert(&mut self, tx: &Transaction) -> StoreResult<i64>;

    /// Fails with `StoreError::NotFound` when `id` does not exist.
    fn update(&mut self, id: i64, update: &TransactionUpdate) -> StoreResult<()>;

    /// Removing a missing id is a no-op.
    fn delete(&mut self, id: i64) -> StoreResult<()>;

    fn get(&self, id: i64) -> StoreResult<Option<Transaction>>;

    /// Readable records. Rows that cannot be parsed are left out.
    fn all(&self) -> StoreResult<Vec<Transaction>>;

    /// Like [`RecordStore::all`], but also hands back the rows that were left out.
    fn scan(&self) -> StoreResult<Scan> {
        Ok(Scan {
            records: self.all()?,
            corrupt: Vec::new(),
        })
    }

    fn by_type(&self, t: TransactionType) -> StoreResult<Vec<Transaction>>;

    /// Removes every record in one step.
    fn clear(&mut self) -> StoreResult<()>;

    /// Up to `limit` records, newest date first. Dates are compared as dates,
    /// so every store orders years outside 0000-9999 the same way.
    fn newest(&self, limit: usize) -> StoreResult<Vec<Transaction>> {
        let mut all = self.all()?;
        sort_newest_first(&mut all);
        all.truncate(limit);
        Ok(all)
    }
}
