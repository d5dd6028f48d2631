// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Station tariffs library - ticket tariff desk for a single railway station
//!
//! Tariffs are either flat or discounted by a whole percentage. The
//! [`registry::TariffRegistry`] owns them in insertion order and answers
//! cheapest-destination, listing, counting and search queries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod registry;
pub mod shell;
pub mod tariff;

/// Prelude for common imports
pub mod prelude {
    pub use crate::console::{ConsoleNotifier, SharedWriter};
    pub use crate::error::{InputError, TariffError};
    pub use crate::registry::{Cheapest, Listing, Notifier, TariffRegistry};
    pub use crate::tariff::{Tariff, TariffKind};
    pub use anyhow::{Context, Result};
}
