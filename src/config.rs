// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tallybook", "tallybook"));

pub const DATA_DIR_ENV: &str = "TALLYBOOK_DATA_DIR";
pub const SYNC_URL_ENV: &str = "TALLYBOOK_SYNC_URL";

const DB_FILE: &str = "tallybook.sqlite";
const SNAPSHOT_FILE: &str = "transactions-snapshot.json";
const CSV_FILE: &str = "transactions.csv";

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the application keeps its files.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the data directory: `TALLYBOOK_DATA_DIR` if set, otherwise the
    /// platform data dir. The directory is created if missing.
    pub fn discover() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
                    .context("Could not determine platform-specific data dir")?;
                proj.data_dir().to_path_buf()
            }
        };
        Self::at(&data_dir)
    }

    pub fn at(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
        Ok(AppConfig {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    /// Default CSV export target. Never the snapshot path.
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(CSV_FILE)
    }
}

/// Pick the sync endpoint: explicit flag, then environment, then the stored setting.
pub fn resolve_endpoint(flag: Option<&str>, stored: Option<String>) -> Option<String> {
    if let Some(f) = flag.filter(|f| !f.trim().is_empty()) {
        return Some(f.trim().to_string());
    }
    if let Ok(env) = std::env::var(SYNC_URL_ENV) {
        if !env.trim().is_empty() {
            return Some(env.trim().to_string());
        }
    }
    stored.filter(|s| !s.trim().is_empty())
}
