// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("summary", sub)) = m.subcommand() {
        let totals = app.ledger.totals();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
            let ccy = app.currency.currency();
            let rows = vec![
                vec!["Income".to_string(), fmt_money(&totals.income, ccy)],
                vec!["Expenses".to_string(), fmt_money(&totals.expenses, ccy)],
                vec!["Balance".to_string(), fmt_money(&totals.balance, ccy)],
            ];
            println!("{}", pretty_table(&["", ccy.code.as_str()], rows));
        }
    }
    Ok(())
}
