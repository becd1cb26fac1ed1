//! Validation errors.
//!
//! One variant per check, all reject-and-report: nothing here is fatal to
//! the process, and no variant is ever retried or suppressed by another
//! check. Messages carry actual vs. expected values so a failure can be
//! acted on without re-running the check.

use super::error_code::{self, CheckErrorCode};

/// Errors raised by the validation rule set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Column mismatch: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Borough domain mismatch: unexpected {unexpected:?}, missing {missing:?}")]
    DomainViolation {
        unexpected: Vec<String>,
        missing: Vec<String>,
    },

    #[error("{out_of_bounds} row(s) outside longitude [{lon_min}, {lon_max}] / latitude [{lat_min}, {lat_max}]")]
    BoundaryViolation {
        out_of_bounds: usize,
        lon_min: f64,
        lon_max: f64,
        lat_min: f64,
        lat_max: f64,
    },

    #[error("Distribution shape mismatch: {message}")]
    DistributionShapeMismatch { message: String },

    #[error("Degenerate distribution: category {label:?} has zero reference probability")]
    DegenerateDistribution { label: String },

    #[error("Drift exceeded: KL divergence {divergence:.6} >= threshold {threshold}")]
    DriftExceeded { divergence: f64, threshold: f64 },

    #[error("Row count {actual} outside [{min}, {max}]")]
    RowCountOutOfRange {
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("Found prices outside range [{min}, {max}]. Invalid prices: {invalid:?}")]
    PriceOutOfRange {
        min: f64,
        max: f64,
        invalid: Vec<f64>,
    },
}

impl CheckErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::DomainViolation { .. } => error_code::DOMAIN_VIOLATION,
            Self::BoundaryViolation { .. } => error_code::BOUNDARY_VIOLATION,
            Self::DistributionShapeMismatch { .. } => {
                error_code::DISTRIBUTION_SHAPE_MISMATCH
            }
            Self::DegenerateDistribution { .. } => error_code::DEGENERATE_DISTRIBUTION,
            Self::DriftExceeded { .. } => error_code::DRIFT_EXCEEDED,
            Self::RowCountOutOfRange { .. } => error_code::ROW_COUNT_OUT_OF_RANGE,
            Self::PriceOutOfRange { .. } => error_code::PRICE_OUT_OF_RANGE,
        }
    }
}
