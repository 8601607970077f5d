// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tallybook::{app::App, cli, commands, config::AppConfig, db};

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    init_logging(matches.get_flag("verbose"));

    let cfg = AppConfig::discover()?;
    let conn = db::open_or_init(&cfg)?;
    let mut app = App::load(&conn)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", cfg.db_path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("currency", sub)) => commands::currency::handle(&mut app, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut app, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, &cfg, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut app, &cfg, sub)?,
        Some(("sync", sub)) => commands::sync::handle(&mut app, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&app)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
