// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::config::AppConfig;
use crate::models::Transaction;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle(app: &App, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").map(PathBuf::from);

    let written = match fmt.as_str() {
        "json" => app
            .ledger
            .export_snapshot(&out.unwrap_or_else(|| cfg.snapshot_path()))?,
        "csv" => write_csv(
            app.ledger.transactions(),
            &out.unwrap_or_else(|| cfg.csv_path()),
        )?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };
    println!("Exported transactions to {}", written.display());
    Ok(())
}

/// Flat CSV for spreadsheets. Not readable by `import`. Returns the absolute
/// path written.
pub fn write_csv(items: &[Transaction], out: &Path) -> Result<PathBuf> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id",
        "date",
        "title",
        "amount",
        "category",
        "recurring",
        "recurring_end_date",
    ])?;
    for t in items {
        wtr.write_record([
            t.id.clone(),
            t.date.clone(),
            t.title.clone(),
            t.amount.to_string(),
            t.category.clone(),
            t.recurring_type.map(|r| r.to_string()).unwrap_or_default(),
            t.recurring_end_date.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    let abs = fs::canonicalize(out)?;
    tracing::info!(path = %abs.display(), count = items.len(), "exported csv");
    Ok(abs)
}
