//! Integration tests for the distributional drift check.

use dqgate_checks::checks::drift::{
    borough_distribution, check_borough_drift, check_distribution_drift,
};
use dqgate_core::errors::ValidationError;
use dqgate_core::types::{CategoricalDistribution, Listing, ListingTable};

fn make_listing(id: u64, borough: &str) -> Listing {
    Listing {
        id,
        name: format!("listing {id}"),
        host_id: id,
        host_name: "Host".to_string(),
        neighbourhood_group: borough.to_string(),
        neighbourhood: "Somewhere".to_string(),
        latitude: 40.7,
        longitude: -73.9,
        room_type: "Private room".to_string(),
        price: 100.0,
        minimum_nights: 1,
        number_of_reviews: 0,
        last_review: None,
        reviews_per_month: None,
        calculated_host_listings_count: 1,
        availability_365: 100,
    }
}

/// A table with the given number of listings per borough.
fn table_with_mix(mix: &[(&str, usize)]) -> ListingTable {
    let mut rows = Vec::new();
    for &(borough, count) in mix {
        for _ in 0..count {
            rows.push(make_listing(rows.len() as u64, borough));
        }
    }
    ListingTable::with_expected_columns(rows)
}

fn dist(pairs: &[(&str, f64)]) -> CategoricalDistribution {
    CategoricalDistribution::new(
        pairs.iter().map(|(l, _)| l.to_string()).collect(),
        pairs.iter().map(|(_, p)| *p).collect(),
    )
}

#[test]
fn test_identical_distributions_pass_any_positive_threshold() {
    let mix = [("Bronx", 10), ("Brooklyn", 40), ("Manhattan", 50)];
    let table = table_with_mix(&mix);
    let reference = table_with_mix(&mix);
    // KL(P‖P) = 0 exactly, so even a tiny threshold passes.
    assert!(check_borough_drift(&table, &reference, 1e-9).is_ok());
}

#[test]
fn test_proportional_tables_pass() {
    // Same mix at different row counts: identical distributions.
    let table = table_with_mix(&[("Brooklyn", 4), ("Manhattan", 6)]);
    let reference = table_with_mix(&[("Brooklyn", 40), ("Manhattan", 60)]);
    assert!(check_borough_drift(&table, &reference, 1e-9).is_ok());
}

#[test]
fn test_skewed_mix_fails_drift_threshold() {
    let table = table_with_mix(&[("Brooklyn", 90), ("Manhattan", 10)]);
    let reference = table_with_mix(&[("Brooklyn", 50), ("Manhattan", 50)]);
    let err = check_borough_drift(&table, &reference, 0.2).unwrap_err();
    match err {
        ValidationError::DriftExceeded { divergence, threshold } => {
            assert!(divergence > 0.0);
            assert!(divergence >= threshold);
            assert_eq!(threshold, 0.2);
        }
        other => panic!("expected DriftExceeded, got {:?}", other),
    }
}

#[test]
fn test_mild_shift_passes_loose_threshold() {
    let table = table_with_mix(&[("Brooklyn", 55), ("Manhattan", 45)]);
    let reference = table_with_mix(&[("Brooklyn", 50), ("Manhattan", 50)]);
    assert!(check_borough_drift(&table, &reference, 0.2).is_ok());
}

#[test]
fn test_label_set_mismatch_is_shape_error() {
    // Reference covers a borough the current table lacks: strict failure,
    // no zero-padding.
    let table = table_with_mix(&[("Brooklyn", 50), ("Manhattan", 50)]);
    let reference =
        table_with_mix(&[("Bronx", 10), ("Brooklyn", 45), ("Manhattan", 45)]);
    let err = check_borough_drift(&table, &reference, 10.0).unwrap_err();
    match err {
        ValidationError::DistributionShapeMismatch { message } => {
            assert!(message.contains("Bronx"), "message: {}", message);
        }
        other => panic!("expected DistributionShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_reference_mass_is_degenerate() {
    // Identical label sets, but the reference assigns zero probability to
    // a category the current distribution occupies.
    let current = dist(&[("Brooklyn", 0.5), ("Manhattan", 0.5)]);
    let reference = dist(&[("Brooklyn", 1.0), ("Manhattan", 0.0)]);
    let err = check_distribution_drift(&current, &reference, 10.0).unwrap_err();
    match err {
        ValidationError::DegenerateDistribution { label } => {
            assert_eq!(label, "Manhattan");
        }
        other => panic!("expected DegenerateDistribution, got {:?}", other),
    }
}

#[test]
fn test_distribution_must_sum_to_one() {
    let current = dist(&[("Brooklyn", 0.5), ("Manhattan", 0.4)]);
    let reference = dist(&[("Brooklyn", 0.5), ("Manhattan", 0.5)]);
    let err = check_distribution_drift(&current, &reference, 10.0).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::DistributionShapeMismatch { .. }
    ));
}

#[test]
fn test_empty_table_is_shape_error() {
    let table = ListingTable::with_expected_columns(Vec::new());
    let reference = table_with_mix(&[("Brooklyn", 10)]);
    let err = check_borough_drift(&table, &reference, 0.2).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::DistributionShapeMismatch { .. }
    ));
}

#[test]
fn test_borough_distribution_sorted_labels() {
    let table = table_with_mix(&[("Queens", 1), ("Bronx", 1), ("Manhattan", 2)]);
    let dist = borough_distribution(&table);
    assert_eq!(dist.labels(), &["Bronx", "Manhattan", "Queens"]);
    assert_eq!(dist.probs(), &[0.25, 0.5, 0.25]);
}
