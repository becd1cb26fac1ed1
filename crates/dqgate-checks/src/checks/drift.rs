//! Distributional drift check for the borough mix.
//!
//! Guards against silent population shift: a data-source change that
//! skews the borough distribution would invalidate models and aggregates
//! trained on the reference snapshot, without any single row looking
//! wrong on its own.

use dqgate_core::constants::PROB_SUM_EPSILON;
use dqgate_core::errors::ValidationError;
use dqgate_core::types::{CategoricalDistribution, ListingTable};

use crate::stats::kl_divergence;

/// Verify the borough distribution of `table` has not drifted from the
/// `reference` snapshot by `kl_threshold` bits or more.
pub fn check_borough_drift(
    table: &ListingTable,
    reference: &ListingTable,
    kl_threshold: f64,
) -> Result<(), ValidationError> {
    let current = borough_distribution(table);
    let reference = borough_distribution(reference);
    check_distribution_drift(&current, &reference, kl_threshold)
}

/// Empirical borough distribution of a table, labels sorted ascending.
pub fn borough_distribution(table: &ListingTable) -> CategoricalDistribution {
    CategoricalDistribution::from_observations(
        table.rows().iter().map(|r| r.neighbourhood_group.as_str()),
    )
}

/// Distribution-level drift check.
///
/// Preconditions (each fails `DistributionShapeMismatch`): both
/// distributions sum to 1 within tolerance and share an identical sorted
/// label set. A reference set that is a strict superset or subset of the
/// current one hard-fails here; no silent zero-padding is attempted.
///
/// Then D_KL(current‖reference) in bits must be finite
/// (`DegenerateDistribution` otherwise) and strictly below the threshold
/// (`DriftExceeded` otherwise).
pub fn check_distribution_drift(
    current: &CategoricalDistribution,
    reference: &CategoricalDistribution,
    kl_threshold: f64,
) -> Result<(), ValidationError> {
    check_shape(current, "current")?;
    check_shape(reference, "reference")?;

    if current.labels() != reference.labels() {
        return Err(ValidationError::DistributionShapeMismatch {
            message: format!(
                "category labels differ: current {:?}, reference {:?}",
                current.labels(),
                reference.labels()
            ),
        });
    }

    let divergence = kl_divergence(current.probs(), reference.probs());
    if !divergence.is_finite() {
        let label = current
            .labels()
            .iter()
            .zip(current.probs().iter().zip(reference.probs()))
            .find(|(_, (&p, &q))| p > 0.0 && q <= 0.0)
            .map(|(label, _)| label.clone())
            .unwrap_or_default();
        return Err(ValidationError::DegenerateDistribution { label });
    }

    tracing::debug!(divergence, kl_threshold, "borough drift computed");
    if divergence >= kl_threshold {
        return Err(ValidationError::DriftExceeded {
            divergence,
            threshold: kl_threshold,
        });
    }
    Ok(())
}

fn check_shape(
    dist: &CategoricalDistribution,
    which: &str,
) -> Result<(), ValidationError> {
    let sum = dist.sum();
    if (sum - 1.0).abs() > PROB_SUM_EPSILON {
        return Err(ValidationError::DistributionShapeMismatch {
            message: format!("{which} distribution sums to {sum}, expected 1"),
        });
    }
    Ok(())
}
