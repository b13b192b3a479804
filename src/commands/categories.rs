// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{self, INCOME_CATEGORIES};
use crate::utils::pretty_table;
use crate::view::TypeFilter;
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let filter = match sub.get_one::<String>("type") {
            Some(t) => t.parse::<TypeFilter>().map_err(|e| anyhow!(e))?,
            None => TypeFilter::All,
        };
        let data = categories::filter_candidates(filter)
            .into_iter()
            .map(|c| {
                let kind = match filter {
                    TypeFilter::Income => "income",
                    TypeFilter::Expense => "expense",
                    TypeFilter::All if INCOME_CATEGORIES.iter().any(|i| i.key == c.key) => {
                        "income"
                    }
                    TypeFilter::All => "expense",
                };
                vec![
                    c.key.to_string(),
                    c.label.to_string(),
                    c.icon.to_string(),
                    kind.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Key", "Label", "Icon", "Listed under"], data)
        );
    }
    Ok(())
}
