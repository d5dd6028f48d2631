// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive command - runs the tariff menu on the terminal

use crate::config::Config;
use crate::console::{ConsoleNotifier, SharedWriter};
use crate::registry::TariffRegistry;
use crate::shell::{Shell, ShellOptions};
use anyhow::Result;
use std::io;
use tracing::info;

/// Run the menu on stdin/stdout until the user exits
pub fn run(config: &Config, json: bool) -> Result<()> {
    info!("Starting tariff desk for {}", config.station_name);

    let out = SharedWriter::new(io::stdout());
    let notifier = ConsoleNotifier::new(out.clone(), io::stderr(), config.color);
    let registry = TariffRegistry::with_notifier(notifier);
    let options = ShellOptions {
        station_name: config.station_name.clone(),
        json,
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), out, registry, options);
    shell.run()?;

    info!("Session ended with {} tariff(s)", shell.registry().count());
    Ok(())
}
