// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Station tariffs CLI - ticket tariff desk for a single railway station

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use station_tariffs::{commands, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "station-tariffs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "STATION_TARIFFS_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output (any non-empty NO_COLOR other than a false value)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Print listings and search results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive tariff menu (default)
    Interactive,

    /// Show the effective configuration
    Config {
        /// Configuration key (omit to show all)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(cli.config.as_deref())?;
    if cli.no_color {
        cfg.color = false;
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => cfg.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(cfg.color)
        .with_target(false)
        .init();

    // Execute command
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::interactive::run(&cfg, cli.json),
        Commands::Config { key } => commands::config::run(&cfg, key.as_deref()),
        Commands::Completions { shell } => commands::completions::run(shell, Cli::command()),
    }
}
