// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - prints the effective configuration

use crate::config::Config;
use anyhow::Result;
use tracing::debug;

/// Print one key, or the whole configuration as TOML
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    match key {
        Some(k) => {
            debug!("Getting {}", k);
            println!("{}", config.get(k)?);
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
