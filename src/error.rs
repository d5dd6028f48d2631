// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for tariffs and console input

use thiserror::Error;

/// Failures raised by tariff construction and registry queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TariffError {
    /// A tariff field violates its construction constraints
    #[error("{0}")]
    InvalidArgument(String),

    /// Discount percentage outside `0..=100`
    #[error("Discount must be between 0 and 100 percent, got {0}")]
    OutOfRange(i64),

    /// An aggregate query ran against a registry with no tariffs
    #[error("No tariffs available")]
    EmptyCollection,
}

impl TariffError {
    /// Shorthand for [`TariffError::InvalidArgument`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Rejections produced while reading a primitive value from the console
#[derive(Debug, Error)]
pub enum InputError {
    /// Blank line
    #[error("Input cannot be empty")]
    Empty,

    /// Destination uses a reserved symbol
    #[error(
        "Name contains forbidden character '{0}'. \
         Only letters, digits, spaces, hyphens and underscores are allowed"
    )]
    ForbiddenCharacter(char),

    /// Price with stray characters or several separators
    #[error("Enter a number like 12345 without letters or extra symbols")]
    NotANumber,

    /// Integer field with non-digit characters
    #[error("Enter a whole number without letters, symbols or a fractional part")]
    NotAnInteger,

    /// Zero where a positive value is required
    #[error("Number must be positive")]
    NotPositive,

    /// Discount above 100
    #[error("Percentage must be between 0 and 100")]
    PercentOutOfRange,

    /// Menu number does not fit
    #[error("Number is too large")]
    Overflow,

    /// The input stream reached end of file
    #[error("Input closed")]
    Closed,

    /// Console read or write failure
    #[error("Console I/O failed")]
    Io(#[from] std::io::Error),
}
