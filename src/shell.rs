// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive menu over a tariff registry

use crate::error::InputError;
use crate::input::{self, Prompter};
use crate::registry::{Listing, TariffRegistry};
use crate::tariff::Tariff;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "\
=== Station tariff desk ===
1. Add tariff without discount
2. Add tariff with discount
3. Show all tariffs
4. Find cheapest destination
5. Search tariffs by destination
6. Number of tariffs
7. Exit
Choose an action: ";

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add a tariff without discount
    AddFlat,
    /// Add a discounted tariff
    AddDiscounted,
    /// Show every tariff
    ListAll,
    /// Show the cheapest destination
    Cheapest,
    /// Search by exact destination
    Search,
    /// Show the tariff count
    Count,
    /// Leave the menu
    Exit,
}

impl Action {
    /// Map a menu number to an action
    #[must_use]
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::AddFlat),
            2 => Some(Self::AddDiscounted),
            3 => Some(Self::ListAll),
            4 => Some(Self::Cheapest),
            5 => Some(Self::Search),
            6 => Some(Self::Count),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Shell presentation options
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Banner title
    pub station_name: String,
    /// Print listings and search results as JSON
    pub json: bool,
}

/// Menu loop reading from `R` and writing to `W`
pub struct Shell<R, W> {
    prompter: Prompter<R, W>,
    registry: TariffRegistry,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around an existing registry
    pub fn new(reader: R, writer: W, registry: TariffRegistry, options: ShellOptions) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            registry,
            options,
        }
    }

    /// The registry being managed
    pub fn registry(&self) -> &TariffRegistry {
        &self.registry
    }

    /// Consume the shell, keeping the registry
    pub fn into_registry(self) -> TariffRegistry {
        self.registry
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        let banner = format!("=== {} ===", self.options.station_name);
        writeln!(self.out(), "{banner}")?;

        loop {
            writeln!(self.out())?;
            let choice = match self.prompter.ask(MENU, input::parse_menu_choice) {
                Ok(choice) => choice,
                Err(InputError::Closed) => {
                    info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err).context("Failed to read menu choice"),
            };

            let Some(action) = Action::from_choice(choice) else {
                writeln!(self.out(), "Invalid choice! Please choose an action from 1 to 7.")?;
                continue;
            };
            debug!(?action, "menu action");

            match self.dispatch(action) {
                Ok(true) => {}
                Ok(false) => {
                    writeln!(self.out(), "Goodbye!")?;
                    return Ok(());
                }
                Err(err)
                    if matches!(err.downcast_ref::<InputError>(), Some(InputError::Closed)) =>
                {
                    info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompter.writer()
    }

    /// Execute one action; `Ok(false)` means exit
    fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::AddFlat => {
                writeln!(self.out(), "\n--- Add tariff without discount ---")?;
                let destination = self.prompter.ask("Destination: ", input::validate_destination)?;
                let price = self.prompter.ask("Price (rub.): ", input::parse_price)?;
                if let Err(err) = self.registry.add_flat(&destination, price) {
                    writeln!(self.out(), "Error: {err}")?;
                }
            }
            Action::AddDiscounted => {
                writeln!(self.out(), "\n--- Add tariff with discount ---")?;
                let destination = self.prompter.ask("Destination: ", input::validate_destination)?;
                let price = self.prompter.ask("Base price (rub.): ", input::parse_price)?;
                let percent = self.prompter.ask("Discount (%): ", input::parse_percent)?;
                let added = self.registry.add_discounted(&destination, price, i64::from(percent));
                if let Err(err) = added {
                    writeln!(self.out(), "Error: {err}")?;
                }
            }
            Action::ListAll => {
                writeln!(self.out(), "\n--- All tariffs ---")?;
                let listing = self.registry.list_all();
                match listing {
                    Listing::Entries(_) if self.options.json => {
                        let json = to_json(self.registry.tariffs().iter())?;
                        writeln!(self.out(), "{json}")?;
                    }
                    Listing::Entries(_) => writeln!(self.out(), "\n{listing}")?,
                    Listing::Empty => writeln!(self.out(), "{listing}")?,
                }
            }
            Action::Cheapest => match self.registry.cheapest_destination() {
                Ok(cheapest) => {
                    writeln!(self.out(), "\n--- Cheapest destination ---")?;
                    writeln!(self.out(), "✓ {cheapest}")?;
                }
                Err(err) => writeln!(self.out(), "Error: {err}")?,
            },
            Action::Search => {
                writeln!(self.out(), "\n--- Search tariffs by destination ---")?;
                let destination =
                    self.prompter.ask("Destination to search: ", input::validate_destination)?;
                let found = self.registry.find_by_destination(&destination);
                if self.options.json {
                    let json = to_json(found.into_iter())?;
                    writeln!(self.out(), "{json}")?;
                } else {
                    let mut text = format!("\nSearch results for '{destination}':\n");
                    if found.is_empty() {
                        text.push_str(&format!("No tariffs found for '{destination}'.\n"));
                    }
                    for tariff in found {
                        text.push_str(&format!("✓ {}\n", tariff.describe()));
                    }
                    write!(self.out(), "{text}")?;
                }
            }
            Action::Count => {
                writeln!(self.out(), "\n--- Statistics ---")?;
                let count = self.registry.count();
                writeln!(self.out(), "Tariffs in the system: {count}")?;
            }
            Action::Exit => return Ok(false),
        }
        Ok(true)
    }
}

fn to_json<'a>(tariffs: impl Iterator<Item = &'a Tariff>) -> Result<String> {
    let items: Vec<&Tariff> = tariffs.collect();
    serde_json::to_string_pretty(&items).context("Failed to render tariffs as JSON")
}
