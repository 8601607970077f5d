// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::config::resolve_endpoint;
use crate::sync::{HttpTransport, Transport};
use anyhow::{Context, Result};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    let transport = HttpTransport::new()?;
    run(app, &transport, m)
}

/// Runs the sync flags against any transport.
pub fn run<T: Transport + ?Sized>(app: &mut App, transport: &T, m: &clap::ArgMatches) -> Result<()> {
    let flag = m.get_one::<String>("endpoint").map(|s| s.as_str());
    let base = resolve_endpoint(flag, app.sync_endpoint()?).context(
        "No sync endpoint configured; pass --endpoint or set TALLYBOOK_SYNC_URL",
    )?;
    if m.get_flag("save") {
        app.set_sync_endpoint(&base)?;
    }

    if m.get_flag("push-only") {
        app.ledger.push(transport, &base)?;
        println!("Pushed {} transactions to {}", app.ledger.transactions().len(), base);
    } else if m.get_flag("pull-only") {
        let n = app.ledger.pull(transport, &base)?;
        println!("Pulled {} transactions from {}", n, base);
    } else {
        let report = app.ledger.sync(transport, &base)?;
        if !report.pushed {
            println!("Push failed; local changes were replaced by the remote copy");
        }
        println!("Pulled {} transactions from {}", report.pulled, base);
    }
    Ok(())
}
