//! Tests for the dqgate error handling system.

use std::collections::HashSet;

use dqgate_core::errors::error_code::CheckErrorCode;
use dqgate_core::errors::*;

fn all_validation_variants() -> Vec<ValidationError> {
    vec![
        ValidationError::SchemaMismatch {
            expected: vec!["id".into(), "name".into()],
            actual: vec!["name".into(), "id".into()],
        },
        ValidationError::DomainViolation {
            unexpected: vec!["Jersey City".into()],
            missing: vec!["Queens".into()],
        },
        ValidationError::BoundaryViolation {
            out_of_bounds: 3,
            lon_min: -74.25,
            lon_max: -73.50,
            lat_min: 40.5,
            lat_max: 41.2,
        },
        ValidationError::DistributionShapeMismatch {
            message: "current distribution sums to 0.9, expected 1".into(),
        },
        ValidationError::DegenerateDistribution {
            label: "Staten Island".into(),
        },
        ValidationError::DriftExceeded {
            divergence: 0.31,
            threshold: 0.2,
        },
        ValidationError::RowCountOutOfRange {
            actual: 14_999,
            min: 15_000,
            max: 1_000_000,
        },
        ValidationError::PriceOutOfRange {
            min: 50.0,
            max: 200.0,
            invalid: vec![49.99, 2500.0],
        },
    ]
}

#[test]
fn test_every_variant_has_a_distinct_error_code() {
    let errors = all_validation_variants();
    let codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len(), "Duplicate error codes found");
    for code in codes {
        assert!(!code.is_empty());
    }
}

#[test]
fn test_report_string_format() {
    let err = ValidationError::DriftExceeded {
        divergence: 0.31,
        threshold: 0.2,
    };
    let report = err.report_string();
    assert!(report.starts_with("[DRIFT_EXCEEDED] "));
    assert!(report.contains("0.31"));
    assert!(report.contains("0.2"));
}

#[test]
fn test_display_human_readable() {
    for error in &all_validation_variants() {
        let msg = error.to_string();
        assert!(!msg.is_empty());
        // Should not contain struct Debug formatting artifacts
        assert!(!msg.contains("{ "), "Debug leak in: {}", msg);
    }
}

#[test]
fn test_messages_are_self_describing() {
    // A failure must be actionable without re-running the check.
    let err = ValidationError::PriceOutOfRange {
        min: 50.0,
        max: 200.0,
        invalid: vec![49.99],
    };
    let msg = err.to_string();
    assert!(msg.contains("49.99"), "offending price missing from: {}", msg);
    assert!(msg.contains("50"), "lower bound missing from: {}", msg);
    assert!(msg.contains("200"), "upper bound missing from: {}", msg);

    let err = ValidationError::DomainViolation {
        unexpected: vec!["Jersey City".into()],
        missing: vec!["Queens".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("Jersey City"));
    assert!(msg.contains("Queens"));

    let err = ValidationError::RowCountOutOfRange {
        actual: 14_999,
        min: 15_000,
        max: 1_000_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("14999"));
    assert!(msg.contains("15000"));
}

#[test]
fn test_config_error_code() {
    let err = ConfigError::ValidationFailed {
        field: "kl_threshold".into(),
        message: "must be a finite value greater than 0".into(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("kl_threshold"));
}
