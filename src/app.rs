// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::{ConversionRate, CurrencyManager};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::{Currency, Theme};
use crate::store::{SettingsStore, SqliteStore};
use rusqlite::Connection;

pub const THEME_KEY: &str = "theme_preference";
pub const SYNC_ENDPOINT_KEY: &str = "sync_endpoint";

/// Application state loaded from one database connection.
pub struct App<'c> {
    pub ledger: Ledger<SqliteStore<'c>>,
    pub currency: CurrencyManager,
    theme: Theme,
}

impl<'c> App<'c> {
    pub fn load(conn: &'c Connection) -> Result<Self> {
        let store = SqliteStore::new(conn);
        let currency = CurrencyManager::load(&store)?;
        let theme = store
            .get_setting(THEME_KEY)?
            .map(|s| Theme::from_setting(&s))
            .unwrap_or_default();
        let mut ledger = Ledger::new(store);
        // A corrupt ledger must not block `import` or `doctor`.
        if let Err(e) = ledger.refresh() {
            tracing::error!(error = %e, "could not load transactions");
        }
        Ok(App {
            ledger,
            currency,
            theme,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.ledger.store().set_setting(THEME_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    /// Switch the display currency, rescaling stored amounts by `rate`.
    /// Returns false if `target` is already active.
    pub fn change_currency(&mut self, target: Currency, rate: ConversionRate) -> Result<bool> {
        if !self.currency.request_change(target) {
            return Ok(false);
        }
        self.currency.confirm(&mut self.ledger, rate)?;
        Ok(true)
    }

    pub fn sync_endpoint(&self) -> Result<Option<String>> {
        self.ledger.store().get_setting(SYNC_ENDPOINT_KEY)
    }

    pub fn set_sync_endpoint(&self, url: &str) -> Result<()> {
        self.ledger.store().set_setting(SYNC_ENDPOINT_KEY, url)
    }
}
