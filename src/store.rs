// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction persistence.
//!
//! The whole collection is read, modified and written back on every
//! mutation. That is O(n) per write, which is fine for a personal ledger of
//! a few thousand entries.

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const TRANSACTIONS_KEY: &str = "transactions";

/// Storage for the transaction collection. Backends only provide whole
/// collection reads and writes; the record-level operations are built on top.
pub trait RecordStore {
    /// Returns an empty collection if nothing has been written yet.
    fn read_all(&self) -> Result<Vec<Transaction>>;

    /// Replaces the stored collection in a single write.
    fn write_all(&self, items: &[Transaction]) -> Result<()>;

    fn insert(&self, new: NewTransaction) -> Result<String> {
        let mut items = self.read_all()?;
        let id = Uuid::new_v4().to_string();
        items.push(new.with_id(id.clone()));
        self.write_all(&items)?;
        tracing::debug!(%id, "inserted transaction");
        Ok(id)
    }

    fn update(&self, tx: &Transaction) -> Result<()> {
        let mut items = self.read_all()?;
        let slot = items
            .iter_mut()
            .find(|t| t.id == tx.id)
            .ok_or_else(|| Error::NotFound(format!("transaction '{}'", tx.id)))?;
        *slot = tx.clone();
        self.write_all(&items)
    }

    /// Missing ids are ignored.
    fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut items = self.read_all()?;
        let before = items.len();
        items.retain(|t| t.id != id);
        if items.len() == before {
            tracing::debug!(%id, "delete of unknown transaction ignored");
            return Ok(());
        }
        self.write_all(&items)
    }

    /// Newest date first; entries on the same date keep their stored order.
    fn list_sorted(&self) -> Result<Vec<Transaction>> {
        let mut items = self.read_all()?;
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }
}

pub trait SettingsStore {
    fn get_setting(&self, key: &str) -> Result<Option<String>>;
    fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// Key/value backend on the `settings` table.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteStore { conn }
    }

    /// The stored blob exactly as written, if any.
    pub fn raw_blob(&self) -> Result<Option<String>> {
        self.get_setting(TRANSACTIONS_KEY)
    }
}

impl SettingsStore for SqliteStore<'_> {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl RecordStore for SqliteStore<'_> {
    fn read_all(&self) -> Result<Vec<Transaction>> {
        match self.get_setting(TRANSACTIONS_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(|e| {
                tracing::error!(error = %e, "stored transactions are not valid JSON");
                Error::Parse(format!("stored transactions: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, items: &[Transaction]) -> Result<()> {
        let blob = serde_json::to_string(items)?;
        self.set_setting(TRANSACTIONS_KEY, &blob).inspect_err(|e| {
            tracing::error!(error = %e, "failed to write transactions");
        })
    }
}

/// Write the current collection to `path` as pretty JSON and return the
/// absolute path written.
pub fn export_snapshot<S: RecordStore + ?Sized>(store: &S, path: &Path) -> Result<PathBuf> {
    let items = store.read_all()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&items)?)?;
    let abs = fs::canonicalize(path)?;
    tracing::info!(path = %abs.display(), count = items.len(), "exported snapshot");
    Ok(abs)
}

/// Replace the stored collection with the contents of a snapshot file.
pub fn import_snapshot<S: RecordStore + ?Sized>(store: &S, path: &Path) -> Result<usize> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound(format!("snapshot {}", path.display())),
        _ => Error::from(e),
    })?;
    let items: Vec<Transaction> = serde_json::from_str(&text)
        .map_err(|e| Error::Parse(format!("snapshot {}: {}", path.display(), e)))?;
    store.write_all(&items)?;
    tracing::info!(path = %path.display(), count = items.len(), "imported snapshot");
    Ok(items.len())
}
