// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::Transaction;
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Problems the store accepts but the rest of the app does not expect.
pub fn check(items: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for t in items {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        if t.amount.is_zero() {
            rows.push(vec!["zero_amount".into(), t.id.clone()]);
        }
        if NaiveDate::parse_from_str(&t.date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_date".into(), format!("{} {}", t.id, t.date)]);
        }
        if t.is_recurring && t.recurring_type.is_none() {
            rows.push(vec!["recurring_without_type".into(), t.id.clone()]);
        }
        if !t.is_recurring && (t.recurring_type.is_some() || t.recurring_end_date.is_some()) {
            rows.push(vec!["recurrence_on_one_off".into(), t.id.clone()]);
        }
        if let Some(end) = &t.recurring_end_date {
            if end.as_str() < t.date.as_str() {
                rows.push(vec!["recurrence_ends_before_start".into(), t.id.clone()]);
            }
        }
    }
    rows
}

pub fn handle(app: &App) -> Result<()> {
    let rows = check(app.ledger.transactions());
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
