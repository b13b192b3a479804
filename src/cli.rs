// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

fn type_filter_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("all|income|expense")
        .default_value("all")
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .version(crate_version!())
        .about("Track income and expenses on this device")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create or migrate the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, edit and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_name("income|expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change amount, date, category or note of a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("note").long("note").conflicts_with("clear-note"))
                        .arg(
                            Arg::new("clear-note")
                                .long("clear-note")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List a month's transactions, five per page")
                        .arg(month_arg())
                        .arg(type_filter_arg())
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("KEY|all")
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(value_parser!(usize))
                                .default_value("1"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("recent")
                        .about("Most recent transactions across all months")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(i64))
                                .allow_negative_numbers(true)
                                .default_value("5"),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("balance").about("Current balance over all transactions"),
        ))
        .subcommand(json_flags(
            Command::new("summary")
                .about("Income, expenses and balance for one month")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("category")
                .about("Built-in categories")
                .subcommand(
                    Command::new("list")
                        .about("Categories offered for a type filter")
                        .arg(type_filter_arg()),
                ),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every transaction on this device")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm; this cannot be undone"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("csv|json")
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Report records that break bookkeeping rules"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .arg(Arg::new("currency-symbol").long("currency-symbol")),
        )
}
