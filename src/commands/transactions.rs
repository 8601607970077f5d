// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::catalog::is_known_category;
use crate::ledger::Filter;
use crate::models::{Kind, NewTransaction, RecurringType, Transaction};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Context, Result, anyhow, bail};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => remove(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_recurring(sub: &clap::ArgMatches) -> Result<Option<(RecurringType, Option<String>)>> {
    let Some(kind) = sub.get_one::<String>("recurring") else {
        return Ok(None);
    };
    let kind: RecurringType = kind.parse().map_err(|e: String| anyhow!(e))?;
    let until = match sub.get_one::<String>("until") {
        Some(d) => Some(parse_date(d)?.to_string()),
        None => None,
    };
    Ok(Some((kind, until)))
}

pub fn new_from_args(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();

    let mut new = NewTransaction::new(title, amount, &date.to_string(), category);
    if let Some((kind, until)) = parse_recurring(sub)? {
        new = new.recurring(kind, until.as_deref());
    }
    Ok(new)
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let new = new_from_args(sub)?;
    if !is_known_category(&new.category) {
        tracing::warn!(category = %new.category, "category is not in the catalog");
    }
    let title = new.title.clone();
    let amount = new.amount;
    let id = app.ledger.add(new)?;
    println!(
        "Recorded '{}' {} ({})",
        title,
        fmt_money(&amount, app.currency.currency()),
        id
    );
    Ok(())
}

/// Apply the given flags on top of an existing record. Recurrence fields
/// that are not mentioned keep their stored values.
pub fn apply_edits(mut tx: Transaction, sub: &clap::ArgMatches) -> Result<Transaction> {
    if let Some(t) = sub.get_one::<String>("title") {
        tx.title = t.clone();
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        tx.amount = parse_amount(a)?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = parse_date(d)?.to_string();
    }
    if let Some(c) = sub.get_one::<String>("category") {
        tx.category = c.clone();
    }
    if sub.get_flag("no-recurring") {
        tx.is_recurring = false;
        tx.recurring_type = None;
        tx.recurring_end_date = None;
        return Ok(tx);
    }
    if let Some(kind) = sub.get_one::<String>("recurring") {
        tx.is_recurring = true;
        tx.recurring_type = Some(kind.parse().map_err(|e: String| anyhow!(e))?);
    }
    if let Some(d) = sub.get_one::<String>("until") {
        if !tx.is_recurring {
            bail!("--until needs a recurring transaction; pass --recurring as well");
        }
        tx.recurring_end_date = Some(parse_date(d)?.to_string());
    }
    Ok(tx)
}

fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let current = app
        .ledger
        .get(id)
        .cloned()
        .with_context(|| format!("Transaction '{}' not found", id))?;
    let updated = apply_edits(current, sub)?;
    app.ledger.update(&updated)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn remove(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    app.ledger.remove(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<Filter> {
    let kind: Kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<Kind>())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();
    Ok(Filter {
        kind,
        category: sub.get_one::<String>("category").cloned(),
        search: sub.get_one::<String>("search").cloned(),
    })
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_args(sub)?;
    let mut data = app.ledger.filtered(&filter);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = app.currency.currency();
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.clone(),
                    t.title.clone(),
                    fmt_money(&t.amount, ccy),
                    t.category.clone(),
                    t.recurring_type.map(|r| r.to_string()).unwrap_or_default(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Amount", "Category", "Repeats", "Id"], rows)
        );
    }
    Ok(())
}
