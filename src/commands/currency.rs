// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::catalog::{CURRENCIES, find_currency};
use crate::currency::ConversionRate;
use crate::utils::pretty_table;
use anyhow::{Context, Result};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let c = app.currency.currency();
            println!("{} ({}) at rate {}", c.code, c.symbol, app.currency.rate());
        }
        Some(("list", _)) => {
            let active = app.currency.currency().code.clone();
            let rows = CURRENCIES
                .iter()
                .map(|(sym, code)| {
                    let mark = if *code == active { "*" } else { "" };
                    vec![code.to_string(), sym.to_string(), mark.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Code", "Symbol", "Active"], rows));
        }
        Some(("set", sub)) => set(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let code = sub.get_one::<String>("code").unwrap();
    let target =
        find_currency(code).with_context(|| format!("Unsupported currency '{}'", code))?;
    let rate: ConversionRate = sub.get_one::<String>("rate").unwrap().parse()?;
    let from = app.currency.currency().code.clone();
    if app.change_currency(target.clone(), rate)? {
        println!(
            "Currency changed {} -> {}; {} amounts multiplied by {}",
            from,
            target.code,
            app.ledger.transactions().len(),
            rate
        );
    } else {
        println!("{} is already the active currency", target.code);
    }
    Ok(())
}
