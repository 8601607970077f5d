// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The read/write surface callers use. Every mutation is followed by a full
//! re-read so subscribers always see the post-mutation collection.

use crate::error::Result;
use crate::models::{Kind, NewTransaction, Totals, Transaction};
use crate::store::{self, RecordStore};
use crate::sync::{self, SyncReport, Transport};
use std::path::{Path, PathBuf};

type Subscriber = Box<dyn FnMut(&[Transaction])>;

#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub kind: Kind,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Filter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self.kind {
            Kind::Income if tx.is_expense() => return false,
            Kind::Expense if tx.is_income() => return false,
            _ => {}
        }
        if let Some(cat) = &self.category {
            if &tx.category != cat {
                return false;
            }
        }
        if let Some(q) = &self.search {
            if !tx.title.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

pub struct Ledger<S: RecordStore> {
    store: S,
    snapshot: Vec<Transaction>,
    subscribers: Vec<Subscriber>,
}

impl<S: RecordStore> Ledger<S> {
    /// Builds the facade with an empty snapshot; call `refresh` to load.
    pub fn new(store: S) -> Self {
        Ledger {
            store,
            snapshot: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot
    }

    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&[Transaction]) + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    pub fn refresh(&mut self) -> Result<()> {
        let items = self.store.list_sorted().inspect_err(|e| {
            tracing::error!(error = %e, "refresh failed; keeping previous snapshot");
        })?;
        self.snapshot = items;
        for sub in self.subscribers.iter_mut() {
            sub(&self.snapshot);
        }
        Ok(())
    }

    pub fn add(&mut self, new: NewTransaction) -> Result<String> {
        let id = self.store.insert(new)?;
        self.refresh()?;
        Ok(id)
    }

    pub fn update(&mut self, tx: &Transaction) -> Result<()> {
        self.store.update(tx)?;
        self.refresh()
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.store.delete_by_id(id)?;
        self.refresh()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.snapshot.iter().find(|t| t.id == id)
    }

    pub fn filtered(&self, filter: &Filter) -> Vec<&Transaction> {
        self.snapshot.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn totals(&self) -> Totals {
        Totals::from_transactions(&self.snapshot)
    }

    pub fn export_snapshot(&self, path: &Path) -> Result<PathBuf> {
        store::export_snapshot(&self.store, path)
    }

    pub fn import_snapshot(&mut self, path: &Path) -> Result<usize> {
        let n = store::import_snapshot(&self.store, path)?;
        self.refresh()?;
        Ok(n)
    }

    pub fn sync<T: Transport + ?Sized>(&mut self, transport: &T, base: &str) -> Result<SyncReport> {
        let report = sync::sync(&self.store, transport, base)?;
        self.refresh()?;
        Ok(report)
    }

    pub fn pull<T: Transport + ?Sized>(&mut self, transport: &T, base: &str) -> Result<usize> {
        let n = sync::pull_and_replace(&self.store, transport, base)?.len();
        self.refresh()?;
        Ok(n)
    }

    pub fn push<T: Transport + ?Sized>(&self, transport: &T, base: &str) -> Result<()> {
        sync::push(&self.store, transport, base)
    }
}
