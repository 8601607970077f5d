// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Best-effort reconciliation with a remote ledger service.
//!
//! A sync pushes the local collection and then replaces it with whatever
//! the remote returns. The remote always wins; local edits made since the
//! last successful push are lost if the push fails.

use crate::config::HTTP_TIMEOUT;
use crate::error::{Error, Result};
use crate::models::Transaction;
use crate::store::RecordStore;
use serde::Serialize;

const UA: &str = concat!(
    "tallybook/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/tallybook)"
);

/// The HTTP verbs the adapter needs. Non-2xx responses are errors.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<()>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(UA)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<()> {
        self.client.post(url).json(body).send()?.error_for_status()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub pulled: usize,
    pub pushed: bool,
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Fetch the remote collection and make it the local one. The local store
/// is not touched unless the payload parses as a list of transactions.
pub fn pull_and_replace<S, T>(store: &S, transport: &T, base: &str) -> Result<Vec<Transaction>>
where
    S: RecordStore + ?Sized,
    T: Transport + ?Sized,
{
    let url = endpoint(base, "transactions");
    let body = transport.get(&url).inspect_err(|e| {
        tracing::error!(%url, error = %e, "pull failed");
    })?;
    let items: Vec<Transaction> = serde_json::from_str(&body).map_err(|e| {
        tracing::error!(%url, error = %e, "malformed remote payload");
        Error::Remote(format!("malformed payload from {}: {}", url, e))
    })?;
    store.write_all(&items)?;
    tracing::info!(%url, count = items.len(), "pulled transactions");
    Ok(items)
}

pub fn push<S, T>(store: &S, transport: &T, base: &str) -> Result<()>
where
    S: RecordStore + ?Sized,
    T: Transport + ?Sized,
{
    let url = endpoint(base, "transactions/bulk");
    let items = store.read_all()?;
    let body = serde_json::to_value(&items)?;
    transport.post_json(&url, &body).inspect_err(|e| {
        tracing::error!(%url, error = %e, "push failed");
    })?;
    tracing::info!(%url, count = items.len(), "pushed transactions");
    Ok(())
}

/// Push (failures are logged and ignored), then pull and replace.
pub fn sync<S, T>(store: &S, transport: &T, base: &str) -> Result<SyncReport>
where
    S: RecordStore + ?Sized,
    T: Transport + ?Sized,
{
    let pushed = match push(store, transport, base) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "push failed during sync; remote state will replace local edits");
            false
        }
    };
    let pulled = pull_and_replace(store, transport, base)?.len();
    Ok(SyncReport { pulled, pushed })
}
