// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("toggle", _)) => {
            let t = app.toggle_theme()?;
            println!("Theme set to {}", t.as_str());
        }
        _ => println!("{}", app.theme().as_str()),
    }
    Ok(())
}
