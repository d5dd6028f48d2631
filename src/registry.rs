// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Station tariff registry - owns every tariff and answers queries over them

use crate::error::TariffError;
use crate::tariff::{truncate, Tariff};
use std::fmt;
use tracing::{debug, info, warn};

/// Receives the outcome of every add operation
pub trait Notifier {
    /// A tariff was stored
    fn added(&mut self, tariff: &Tariff);

    /// Adding a tariff failed; the error is still returned to the caller
    fn rejected(&mut self, destination: &str, error: &TariffError);
}

/// Reports add outcomes through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn added(&mut self, tariff: &Tariff) {
        info!(
            destination = tariff.destination(),
            base_price = tariff.base_price(),
            discount = tariff.discount_percent(),
            "tariff added"
        );
    }

    fn rejected(&mut self, destination: &str, error: &TariffError) {
        warn!(destination, %error, "tariff rejected");
    }
}

/// Result of a cheapest-destination query
#[derive(Debug, Clone, PartialEq)]
pub struct Cheapest {
    /// Destination of the winning tariff
    pub destination: String,
    /// Its final price
    pub price: f64,
}

impl fmt::Display for Cheapest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (price: {} rub.)", self.destination, truncate(self.price))
    }
}

/// Descriptions of all tariffs, or the empty marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Registry holds no tariffs
    Empty,
    /// `describe()` of each tariff in insertion order
    Entries(Vec<String>),
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No tariffs available."),
            Self::Entries(lines) => {
                writeln!(f, "=== All tariffs ===")?;
                for (i, line) in lines.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, line)?;
                }
                write!(f, "===================")
            }
        }
    }
}

/// Insertion-ordered collection of tariffs
pub struct TariffRegistry {
    tariffs: Vec<Tariff>,
    notifier: Box<dyn Notifier>,
}

impl Default for TariffRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TariffRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TariffRegistry")
            .field("tariffs", &self.tariffs)
            .finish_non_exhaustive()
    }
}

impl TariffRegistry {
    /// Create an empty registry reporting through `tracing`
    #[must_use]
    pub fn new() -> Self {
        Self::with_notifier(TracingNotifier)
    }

    /// Create an empty registry with a custom notifier
    #[must_use]
    pub fn with_notifier(notifier: impl Notifier + 'static) -> Self {
        Self {
            tariffs: Vec::new(),
            notifier: Box::new(notifier),
        }
    }

    /// Add a tariff without discount
    ///
    /// # Errors
    ///
    /// Construction errors from [`Tariff::flat`]; nothing is stored.
    pub fn add_flat(&mut self, destination: &str, base_price: f64) -> Result<(), TariffError> {
        let built = Tariff::flat(destination, base_price);
        self.store(destination, built)
    }

    /// Add a tariff discounted by `percent`
    ///
    /// # Errors
    ///
    /// Construction errors from [`Tariff::discounted`]; nothing is stored.
    pub fn add_discounted(
        &mut self,
        destination: &str,
        base_price: f64,
        percent: i64,
    ) -> Result<(), TariffError> {
        let built = Tariff::discounted(destination, base_price, percent);
        self.store(destination, built)
    }

    fn store(
        &mut self,
        destination: &str,
        built: Result<Tariff, TariffError>,
    ) -> Result<(), TariffError> {
        match built {
            Ok(tariff) => {
                self.notifier.added(&tariff);
                self.tariffs.push(tariff);
                Ok(())
            }
            Err(err) => {
                self.notifier.rejected(destination, &err);
                Err(err)
            }
        }
    }

    /// Tariff with the lowest final price; the earliest one wins ties
    ///
    /// # Errors
    ///
    /// [`TariffError::EmptyCollection`] when no tariffs exist.
    pub fn cheapest_destination(&self) -> Result<Cheapest, TariffError> {
        let mut iter = self.tariffs.iter();
        let first = iter.next().ok_or(TariffError::EmptyCollection)?;
        let best = iter.fold(first, |best, t| if t.price() < best.price() { t } else { best });
        debug!(destination = best.destination(), price = best.price(), "cheapest destination");
        Ok(Cheapest {
            destination: best.destination().to_string(),
            price: best.price(),
        })
    }

    /// Descriptions of every tariff in insertion order
    #[must_use]
    pub fn list_all(&self) -> Listing {
        if self.tariffs.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(self.tariffs.iter().map(Tariff::describe).collect())
    }

    /// Number of stored tariffs
    #[must_use]
    pub fn count(&self) -> usize {
        self.tariffs.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }

    /// All tariffs in insertion order
    #[must_use]
    pub fn tariffs(&self) -> &[Tariff] {
        &self.tariffs
    }

    /// Tariffs whose destination equals `destination` exactly
    #[must_use]
    pub fn find_by_destination(&self, destination: &str) -> Vec<&Tariff> {
        let found: Vec<_> = self
            .tariffs
            .iter()
            .filter(|t| t.destination() == destination)
            .collect();
        debug!(destination, matches = found.len(), "search by destination");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notifier for Recorder {
        fn added(&mut self, tariff: &Tariff) {
            self.0.borrow_mut().push(format!("added {}", tariff.destination()));
        }

        fn rejected(&mut self, destination: &str, error: &TariffError) {
            self.0.borrow_mut().push(format!("rejected {destination}: {error}"));
        }
    }

    #[test]
    fn test_add_and_count() {
        let mut registry = TariffRegistry::new();
        registry.add_flat("Moscow", 500.0).unwrap();
        registry.add_discounted("Kazan", 1000.0, 20).unwrap();

        assert_eq!(registry.count(), 2);
        assert_eq!(
            registry.cheapest_destination().unwrap(),
            Cheapest { destination: "Moscow".into(), price: 500.0 }
        );
    }

    #[test]
    fn test_failed_add_is_reported_and_not_stored() {
        let recorder = Recorder::default();
        let mut registry = TariffRegistry::with_notifier(recorder.clone());

        registry.add_flat("Perm", 10.0).unwrap();
        let err = registry.add_discounted("Perm", 10.0, 120).unwrap_err();

        assert_eq!(err, TariffError::OutOfRange(120));
        assert_eq!(registry.count(), 1);
        assert_eq!(
            *recorder.0.borrow(),
            vec![
                "added Perm".to_string(),
                "rejected Perm: Discount must be between 0 and 100 percent, got 120".to_string(),
            ]
        );
    }

    #[test]
    fn test_cheapest_on_empty() {
        let registry = TariffRegistry::new();
        assert_eq!(registry.cheapest_destination(), Err(TariffError::EmptyCollection));
    }

    #[test]
    fn test_cheapest_keeps_first_of_ties() {
        let mut registry = TariffRegistry::new();
        registry.add_flat("A", 200.0).unwrap();
        registry.add_flat("B", 100.0).unwrap();
        registry.add_discounted("C", 200.0, 50).unwrap();

        assert_eq!(registry.cheapest_destination().unwrap().destination, "B");
    }

    #[test]
    fn test_list_all() {
        let mut registry = TariffRegistry::new();
        assert_eq!(registry.list_all(), Listing::Empty);
        assert_eq!(registry.list_all().to_string(), "No tariffs available.");

        registry.add_flat("Moscow", 500.0).unwrap();
        registry.add_discounted("Sochi", 1000.0, 90).unwrap();

        let listing = registry.list_all();
        assert_eq!(
            listing,
            Listing::Entries(vec![
                "Destination: Moscow, Price: 500 rub. (no discount)".into(),
                "Destination: Sochi, Base price: 1000 rub., Discount: 90%, Final price: 100 rub."
                    .into(),
            ])
        );
        assert!(listing.to_string().contains("2. Destination: Sochi"));
    }

    #[test]
    fn test_find_is_exact_and_ordered() {
        let mut registry = TariffRegistry::new();
        registry.add_flat("Kazan", 700.0).unwrap();
        registry.add_flat("kazan", 100.0).unwrap();
        registry.add_flat("Kazan", 300.0).unwrap();

        let found: Vec<f64> = registry
            .find_by_destination("Kazan")
            .iter()
            .map(|t| t.base_price())
            .collect();
        assert_eq!(found, vec![700.0, 300.0]);
        assert!(registry.find_by_destination("Kaz").is_empty());
    }

    #[test]
    fn test_cheapest_display_truncates() {
        let cheapest = Cheapest { destination: "Tula".into(), price: 99.9 };
        assert_eq!(cheapest.to_string(), "Tula (price: 99 rub.)");
    }
}
