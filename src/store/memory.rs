// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::RecordStore;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Transaction, TransactionType, TransactionUpdate};
use std::collections::BTreeMap;

/// Volatile store, handy for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<i64, Transaction>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, tx: &Transaction) -> StoreResult<i64> {
        // ids keep increasing after deletes, like AUTOINCREMENT
        self.next_id += 1;
        let id = self.next_id;
        let mut rec = tx.clone();
        rec.id = Some(id);
        self.records.insert(id, rec);
        Ok(id)
    }

    fn update(&mut self, id: i64, update: &TransactionUpdate) -> StoreResult<()> {
        let rec = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        rec.amount = update.amount;
        rec.date = update.date;
        rec.category = update.category.clone();
        rec.note = update.note.clone();
        Ok(())
    }

    fn delete(&mut self, id: i64) -> StoreResult<()> {
        self.records.remove(&id);
        Ok(())
    }

    fn get(&self, id: i64) -> StoreResult<Option<Transaction>> {
        Ok(self.records.get(&id).cloned())
    }

    fn all(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.records.values().cloned().collect())
    }

    fn by_type(&self, t: TransactionType) -> StoreResult<Vec<Transaction>> {
        Ok(self
            .records
            .values()
            .filter(|r| r.r#type == t)
            .cloned()
            .collect())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        Ok(())
    }
}
