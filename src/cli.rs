// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn tx_fields(cmd: Command, required: bool) -> Command {
    let until = Arg::new("until")
        .long("until")
        .help("Last date of the recurrence (YYYY-MM-DD)");
    // On edit the stored record may already be recurring.
    let until = if required { until.requires("recurring") } else { until };
    cmd.arg(Arg::new("title").long("title").required(required))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(required)
                .allow_hyphen_values(true)
                .help("Signed amount; negative for expenses"),
        )
        .arg(Arg::new("date").long("date").required(required).help("YYYY-MM-DD"))
        .arg(Arg::new("category").long("category").required(required))
        .arg(
            Arg::new("recurring")
                .long("recurring")
                .help("daily|weekly|monthly|yearly"),
        )
        .arg(until)
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .about("Personal transaction ledger with currency rescale and remote sync")
        .version(clap::crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the data directory and database"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(tx_fields(Command::new("add").about("Record a transaction"), true))
                .subcommand(
                    tx_fields(Command::new("edit").about("Change fields of a transaction"), false)
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("no-recurring")
                                .long("no-recurring")
                                .action(ArgAction::SetTrue)
                                .conflicts_with_all(["recurring", "until"])
                                .help("Clear the recurrence"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .help("all|income|expense")
                                .default_value("all"),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("search").long("search").help("Match title text"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency")
                .subcommand(Command::new("show").about("Show the active currency and rate"))
                .subcommand(Command::new("list").about("List supported currencies"))
                .subcommand(
                    Command::new("set")
                        .about("Switch currency and rescale every stored amount")
                        .arg(Arg::new("code").required(true))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .required(true)
                                .help("Multiplier applied to every stored amount"),
                        ),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Light/dark preference")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("toggle")),
        )
        .subcommand(
            Command::new("category").about("Category catalog").subcommand(
                Command::new("list").arg(
                    Arg::new("type")
                        .long("type")
                        .help("all|income|expense")
                        .default_value("all"),
                ),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expenses and balance"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write the ledger to a file")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Defaults to the snapshot path (json) or transactions.csv (csv)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the ledger with a JSON snapshot")
                .arg(Arg::new("path").long("path").help("Defaults to the snapshot path")),
        )
        .subcommand(
            Command::new("sync")
                .about("Push to and pull from a remote ledger service")
                .arg(Arg::new("endpoint").long("endpoint").help("Base URL"))
                .arg(
                    Arg::new("save")
                        .long("save")
                        .action(ArgAction::SetTrue)
                        .requires("endpoint")
                        .help("Remember the endpoint"),
                )
                .arg(
                    Arg::new("pull-only")
                        .long("pull-only")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("push-only"),
                )
                .arg(Arg::new("push-only").long("push-only").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
}
