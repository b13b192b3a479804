// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use pocketledger::{cli, commands, db, logging, store::SqliteStore};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_override = matches.get_one::<String>("db").map(PathBuf::from);
    let conn = db::open_or_init(db_override.as_deref())?;
    let mut store = SqliteStore::new(conn);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database ready at {} (schema v{})",
                db::db_path(db_override.as_deref())?.display(),
                db::schema_version()
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("balance", sub)) => commands::reports::balance(&store, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("clear", sub)) => commands::transactions::clear(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        Some(("config", sub)) => commands::config::handle(store.conn(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
