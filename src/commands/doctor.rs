// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::models::Transaction;
use crate::store::{RecordStore, Scan};
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

/// Records that break the bookkeeping conventions writes do not enforce.
pub fn find_issues(txs: &[Transaction]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for t in txs {
        let id = t.id.map(|i| i.to_string()).unwrap_or_else(|| "-".into());
        if t.amount < Decimal::ZERO {
            issues.push(Issue {
                kind: "negative_amount",
                detail: format!("#{} {} {}", id, t.date, t.amount),
            });
        }
        if categories::find(t.r#type, &t.category).is_none() {
            issues.push(Issue {
                kind: "category_type_mismatch",
                detail: format!("#{} '{}' is not an {} category", id, t.category, t.r#type),
            });
        }
    }
    issues
}

/// Unreadable rows first, then convention breaks among the readable ones.
pub fn diagnose(scan: &Scan) -> Vec<Issue> {
    let mut issues: Vec<Issue> = scan
        .corrupt
        .iter()
        .map(|e| Issue {
            kind: "corrupt_row",
            detail: e.to_string(),
        })
        .collect();
    issues.extend(find_issues(&scan.records));
    issues
}

pub fn handle(store: &impl RecordStore) -> Result<()> {
    let scan = store.scan()?;
    let total = scan.records.len() + scan.corrupt.len();
    if total == 0 {
        println!("doctor: no transactions recorded yet");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = diagnose(&scan)
        .into_iter()
        .map(|i| vec![i.kind.to_string(), i.detail])
        .collect();
    if rows.is_empty() {
        println!("doctor: no issues found in {} transactions", total);
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
