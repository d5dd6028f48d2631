// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Tariff records and their pricing rules
//!
//! A tariff is either flat (final price equals base price) or discounted by a
//! whole percentage. Fields are validated once at construction and never change.

use crate::error::TariffError;
use serde::Serialize;

/// Upper bound on a base price, inclusive
pub const MAX_BASE_PRICE: f64 = 1_000_000.0;

/// Pricing rule of a tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TariffKind {
    /// No discount
    Flat,
    /// Base price reduced by `percent`
    Discounted {
        /// Discount in `0..=100`
        percent: u8,
    },
}

/// A priced destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tariff {
    destination: String,
    base_price: f64,
    #[serde(flatten)]
    kind: TariffKind,
}

impl Tariff {
    /// Build a tariff without discount
    ///
    /// # Errors
    ///
    /// [`TariffError::InvalidArgument`] for an empty destination or a base
    /// price outside `(0, 1_000_000]`.
    pub fn flat(destination: impl Into<String>, base_price: f64) -> Result<Self, TariffError> {
        Self::build(destination.into(), base_price, TariffKind::Flat)
    }

    /// Build a tariff discounted by `percent`
    ///
    /// # Errors
    ///
    /// Same as [`Tariff::flat`], plus [`TariffError::OutOfRange`] when
    /// `percent` is outside `0..=100`.
    pub fn discounted(
        destination: impl Into<String>,
        base_price: f64,
        percent: i64,
    ) -> Result<Self, TariffError> {
        let mut tariff = Self::build(destination.into(), base_price, TariffKind::Flat)?;
        let percent = u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(TariffError::OutOfRange(percent))?;
        tariff.kind = TariffKind::Discounted { percent };
        Ok(tariff)
    }

    fn build(destination: String, base_price: f64, kind: TariffKind) -> Result<Self, TariffError> {
        if destination.is_empty() {
            return Err(TariffError::invalid("Destination cannot be empty"));
        }
        if base_price.is_nan() || base_price <= 0.0 {
            return Err(TariffError::invalid("Price must be positive"));
        }
        if base_price > MAX_BASE_PRICE {
            return Err(TariffError::invalid("Price cannot exceed 1 000 000 rub."));
        }
        Ok(Self { destination, base_price, kind })
    }

    /// Destination name
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Pre-discount price
    #[must_use]
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Pricing rule
    #[must_use]
    pub fn kind(&self) -> TariffKind {
        self.kind
    }

    /// Discount percentage, `None` for flat tariffs
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        match self.kind {
            TariffKind::Flat => None,
            TariffKind::Discounted { percent } => Some(percent),
        }
    }

    /// Final price after discount
    #[must_use]
    pub fn price(&self) -> f64 {
        match self.kind {
            TariffKind::Flat | TariffKind::Discounted { percent: 0 } => self.base_price,
            // exact for whole amounts: 1000 at 90% is 100, not 99.99..
            TariffKind::Discounted { percent } => {
                self.base_price * f64::from(100 - percent) / 100.0
            }
        }
    }

    /// One-line summary with amounts truncated toward zero
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TariffKind::Flat => format!(
                "Destination: {}, Price: {} rub. (no discount)",
                self.destination,
                truncate(self.base_price)
            ),
            TariffKind::Discounted { percent } => format!(
                "Destination: {}, Base price: {} rub., Discount: {}%, Final price: {} rub.",
                self.destination,
                truncate(self.base_price),
                percent,
                truncate(self.price())
            ),
        }
    }
}

/// Whole currency units, truncated toward zero (never rounded)
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(amount: f64) -> i64 {
    amount.trunc() as i64
}
