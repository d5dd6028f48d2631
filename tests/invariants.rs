// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for tariffs and the station registry
//!
//! These tests verify:
//! 1. Pricing - final price formulas and bounds
//! 2. Validation - construction rejects bad fields with the right error kind
//! 3. Queries - ordering, tie-breaks and idempotence of registry reads

use proptest::prelude::*;
use station_tariffs::error::TariffError;
use station_tariffs::registry::{Cheapest, Listing, TariffRegistry};
use station_tariffs::tariff::{Tariff, MAX_BASE_PRICE};

// =============================================================================
// Test Helpers
// =============================================================================

fn valid_price() -> impl Strategy<Value = f64> {
    (0.01f64..=MAX_BASE_PRICE).prop_filter("positive", |p| *p > 0.0)
}

fn destination() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z _-]{0,15}"
}

fn sample_registry() -> TariffRegistry {
    let mut registry = TariffRegistry::new();
    registry.add_flat("Moscow", 500.0).unwrap();
    registry.add_discounted("Kazan", 1000.0, 20).unwrap();
    registry.add_discounted("Kazan", 900.0, 0).unwrap();
    registry
}

// =============================================================================
// Pricing Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_flat_price_equals_base(dest in destination(), base in valid_price()) {
        let tariff = Tariff::flat(dest, base).unwrap();
        prop_assert_eq!(tariff.price(), base);
    }

    #[test]
    fn prop_discounted_price_formula(
        dest in destination(),
        base in valid_price(),
        percent in 0i64..=100,
    ) {
        let tariff = Tariff::discounted(dest, base, percent).unwrap();
        let expected = base * (1.0 - percent as f64 / 100.0);
        let price = tariff.price();

        prop_assert!((price - expected).abs() <= 1e-9 * base.max(1.0));
        prop_assert!(price >= 0.0);
        prop_assert!(price <= base);
        if percent == 0 {
            prop_assert_eq!(price, base);
        }
    }

    #[test]
    fn prop_non_positive_price_rejected(dest in destination(), base in -1.0e7f64..=0.0) {
        let flat = Tariff::flat(dest.clone(), base);
        let discounted = Tariff::discounted(dest, base, 10);
        prop_assert!(matches!(flat, Err(TariffError::InvalidArgument(_))));
        prop_assert!(matches!(discounted, Err(TariffError::InvalidArgument(_))));
    }

    #[test]
    fn prop_excessive_price_rejected(dest in destination(), base in 1_000_000.001f64..1.0e12) {
        prop_assert!(matches!(Tariff::flat(dest, base), Err(TariffError::InvalidArgument(_))));
    }

    #[test]
    fn prop_percent_out_of_range(
        base in valid_price(),
        percent in prop_oneof![i64::MIN..0, 101i64..i64::MAX],
    ) {
        prop_assert_eq!(
            Tariff::discounted("Omsk", base, percent),
            Err(TariffError::OutOfRange(percent))
        );
    }
}

#[test]
fn test_empty_destination_rejected() {
    assert!(matches!(Tariff::flat("", 100.0), Err(TariffError::InvalidArgument(_))));
    assert!(matches!(Tariff::discounted("", 100.0, 5), Err(TariffError::InvalidArgument(_))));
}

// =============================================================================
// Registry Queries
// =============================================================================

#[test]
fn test_cheapest_on_empty_registry() {
    let registry = TariffRegistry::new();
    assert_eq!(registry.cheapest_destination(), Err(TariffError::EmptyCollection));
    assert_eq!(registry.list_all(), Listing::Empty);
    assert_eq!(registry.count(), 0);
}

#[test]
fn test_reads_are_idempotent() {
    let registry = sample_registry();

    assert_eq!(registry.list_all(), registry.list_all());
    assert_eq!(registry.count(), registry.count());
    assert_eq!(registry.cheapest_destination(), registry.cheapest_destination());
}

#[test]
fn test_tie_break_prefers_first_inserted() {
    let mut registry = TariffRegistry::new();
    registry.add_flat("A", 100.0).unwrap();
    registry.add_flat("B", 100.0).unwrap();

    assert_eq!(registry.cheapest_destination().unwrap().destination, "A");
}

#[test]
fn test_moscow_kazan_scenario() {
    let mut registry = TariffRegistry::new();
    registry.add_flat("Moscow", 500.0).unwrap();
    registry.add_discounted("Kazan", 1000.0, 20).unwrap();

    assert_eq!(registry.count(), 2);
    assert_eq!(registry.find_by_destination("Kazan")[0].price(), 800.0);
    assert_eq!(
        registry.cheapest_destination().unwrap(),
        Cheapest { destination: "Moscow".into(), price: 500.0 }
    );
}

#[test]
fn test_sochi_describe() {
    let sochi = Tariff::discounted("Sochi", 1000.0, 90).unwrap();
    assert_eq!(sochi.price(), 100.0);

    let text = sochi.describe();
    assert!(text.contains("1000"));
    assert!(text.contains("90%"));
    assert!(text.contains("Final price: 100 rub."));
}

#[test]
fn test_search_returns_duplicates_in_order() {
    let registry = sample_registry();

    let found = registry.find_by_destination("Kazan");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].base_price(), 1000.0);
    assert_eq!(found[1].base_price(), 900.0);

    assert!(registry.find_by_destination("Nowhere").is_empty());
}

#[test]
fn test_rejected_add_leaves_registry_untouched() {
    let mut registry = sample_registry();
    let before = registry.list_all();

    assert!(registry.add_flat("Tula", 0.0).is_err());
    assert!(registry.add_discounted("Tula", 10.0, 101).is_err());

    assert_eq!(registry.count(), 3);
    assert_eq!(registry.list_all(), before);
}
