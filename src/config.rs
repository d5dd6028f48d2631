// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `STATION_TARIFFS_STATION_NAME`
pub const ENV_PREFIX: &str = "STATION_TARIFFS";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shown in the session banner
    pub station_name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Colored console output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            station_name: "Railway station".to_string(),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Value of a single key, rendered as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "station_name" => Ok(self.station_name.clone()),
            "log_level" => Ok(self.log_level.clone()),
            "color" => Ok(self.color.to_string()),
            other => anyhow::bail!(
                "Unknown config key: {}. Valid: station_name, log_level, color",
                other
            ),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Default config file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "station-tariffs")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration: defaults, then the config file, then environment
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = ::config::Config::try_from(&Config::default())
        .context("Failed to build default configuration")?;

    let mut builder = ::config::Config::builder().add_source(defaults);

    match path {
        Some(p) => {
            builder = builder.add_source(::config::File::from(p).required(true));
        }
        None => {
            if let Some(p) = default_path() {
                builder = builder.add_source(::config::File::from(p).required(false));
            }
        }
    }

    let loaded = builder
        .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .context("Failed to load configuration")?;

    loaded
        .try_deserialize()
        .context("Invalid configuration")
}
