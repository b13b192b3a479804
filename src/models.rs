// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Applies the sign implied by the type to an unsigned amount.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Income => amount,
            TransactionType::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!(
                "Invalid transaction type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<i64>,
    pub r#type: TransactionType,
    pub amount: Decimal, // magnitude, sign comes from type
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(
        r#type: TransactionType,
        amount: Decimal,
        date: NaiveDate,
        category: &str,
        note: Option<&str>,
    ) -> Self {
        Self {
            id: None,
            r#type,
            amount,
            category: category.to_string(),
            date,
            note: note.map(|s| s.to_string()),
        }
    }

    pub fn signed_amount(&self) -> Decimal {
        self.r#type.signed(self.amount)
    }
}

/// Fields an edit may change. `id` and `type` are fixed for a record's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionUpdate {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub incomes: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}
