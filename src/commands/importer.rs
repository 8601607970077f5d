// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handle(app: &mut App, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let path = m
        .get_one::<String>("path")
        .map(|p| PathBuf::from(p.trim()))
        .unwrap_or_else(|| cfg.snapshot_path());
    let n = app
        .ledger
        .import_snapshot(&path)
        .with_context(|| format!("Import from {}", path.display()))?;
    println!("Imported {} transactions from {}", n, path.display());
    Ok(())
}
