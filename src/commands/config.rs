// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_currency_symbol, pretty_table, set_currency_symbol};
use anyhow::{Result, bail};
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(sym) = sub.get_one::<String>("currency-symbol") {
        let sym = sym.trim();
        if sym.is_empty() {
            bail!("Currency symbol cannot be empty");
        }
        set_currency_symbol(conn, sym)?;
        info!(symbol = sym, "currency symbol changed");
        println!("Currency symbol set to {}", sym);
        return Ok(());
    }
    let rows = vec![vec!["currency_symbol".to_string(), get_currency_symbol(conn)?]];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
