// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transaction {0} not found")]
    NotFound(i64),
    #[error("Corrupt {field} '{value}' in transaction {id}")]
    Corrupt {
        id: i64,
        field: &'static str,
        value: String,
    },
    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
