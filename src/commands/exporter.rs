// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::RecordStore;
use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::info;

pub fn handle(store: &impl RecordStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?
        .trim();

    // oldest first, insertion order within a day
    let mut txs = store.all()?;
    txs.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["id", "type", "date", "amount", "category", "note"])?;
            for t in &txs {
                wtr.write_record([
                    t.id.map(|i| i.to_string()).unwrap_or_default(),
                    t.r#type.to_string(),
                    t.date.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "type": t.r#type, "date": t.date.to_string(),
                        "amount": t.amount.to_string(), "category": t.category, "note": t.note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    info!(count = txs.len(), path = out, "exported transactions");
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
