// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::categories_for;
use crate::models::Kind;
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kind: Kind = sub
            .get_one::<String>("type")
            .unwrap()
            .parse()
            .map_err(|e: String| anyhow!(e))?;
        let rows = categories_for(kind)
            .into_iter()
            .map(|c| vec![c.to_string()])
            .collect();
        println!("{}", pretty_table(&["Category"], rows));
    }
    Ok(())
}
