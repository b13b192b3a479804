// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in category tables, one per transaction type.

use crate::models::TransactionType;
use crate::view::TypeFilter;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn cat(key: &'static str, label: &'static str, icon: &'static str) -> Category {
    Category { key, label, icon }
}

pub static INCOME_CATEGORIES: [Category; 6] = [
    cat("Salary", "Salary", "dollar-sign"),
    cat("Sales", "Sales", "receipt-text"),
    cat("Freelance", "Freelance", "briefcase-business"),
    cat("Investments", "Investments", "trending-up"),
    cat("Gifts", "Gifts", "gift"),
    cat("Other", "Other", "more-horizontal"),
];

pub static EXPENSE_CATEGORIES: [Category; 10] = [
    cat("Food", "Food", "utensils"),
    cat("Transport", "Transport", "bus"),
    cat("Gasoline", "Gasoline", "fuel"),
    cat("Housing", "Housing", "home"),
    cat("Health", "Health", "heart-pulse"),
    cat("Entertainment", "Entertainment", "popcorn"),
    cat("Education", "Education", "book-open"),
    cat("Bills", "Bills", "receipt"),
    cat("Shopping", "Shopping", "shopping-bag"),
    cat("Other", "Other", "more-horizontal"),
];

pub fn categories_for(t: TransactionType) -> &'static [Category] {
    match t {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Looks a key up in the list for `t` only.
pub fn find(t: TransactionType, key: &str) -> Option<&'static Category> {
    categories_for(t).iter().find(|c| c.key == key)
}

pub fn icon_for(t: TransactionType, key: &str) -> Option<&'static str> {
    find(t, key).map(|c| c.icon)
}

/// Display label for a key from either list; unknown keys are shown as-is.
pub fn label_for(key: &str) -> String {
    INCOME_CATEGORIES
        .iter()
        .chain(EXPENSE_CATEGORIES.iter())
        .find(|c| c.key == key)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Categories a listing may be narrowed to under the given type filter.
/// With `All` both lists are merged and the first entry for a key wins.
pub fn filter_candidates(filter: TypeFilter) -> Vec<&'static Category> {
    match filter {
        TypeFilter::Income => INCOME_CATEGORIES.iter().collect(),
        TypeFilter::Expense => EXPENSE_CATEGORIES.iter().collect(),
        TypeFilter::All => {
            let mut out: Vec<&'static Category> = Vec::new();
            for c in INCOME_CATEGORIES.iter().chain(EXPENSE_CATEGORIES.iter()) {
                if !out.iter().any(|seen| seen.key == c.key) {
                    out.push(c);
                }
            }
            out
        }
    }
}
