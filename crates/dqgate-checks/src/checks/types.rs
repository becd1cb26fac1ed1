//! Core types for the validation checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use dqgate_core::config::CheckConfig;
use dqgate_core::constants::{DEFAULT_KL_THRESHOLD, DEFAULT_MAX_ROWS, DEFAULT_MIN_ROWS};
use dqgate_core::errors::{ConfigError, ValidationError};

/// The 6 validation check identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    Schema,
    BoroughDomain,
    Boundaries,
    BoroughDrift,
    RowCount,
    PriceRange,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::BoroughDomain => "borough-domain",
            Self::Boundaries => "boundaries",
            Self::BoroughDrift => "borough-drift",
            Self::RowCount => "row-count",
            Self::PriceRange => "price-range",
        }
    }

    pub fn all() -> &'static [CheckId] {
        &[
            Self::Schema,
            Self::BoroughDomain,
            Self::Boundaries,
            Self::BoroughDrift,
            Self::RowCount,
            Self::PriceRange,
        ]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result produced by each check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check_id: CheckId,
    pub status: CheckStatus,
    pub error: Option<ValidationError>,
}

impl CheckOutcome {
    /// Create a passing check outcome.
    pub fn pass(check_id: CheckId) -> Self {
        Self {
            check_id,
            status: CheckStatus::Passed,
            error: None,
        }
    }

    /// Create a failing check outcome.
    pub fn fail(check_id: CheckId, error: ValidationError) -> Self {
        Self {
            check_id,
            status: CheckStatus::Failed,
            error: Some(error),
        }
    }

    /// Create a skipped check outcome.
    pub fn skipped(check_id: CheckId) -> Self {
        Self {
            check_id,
            status: CheckStatus::Skipped,
            error: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.status != CheckStatus::Failed
    }
}

/// Scalar parameters supplied per invocation by the external runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckParams {
    /// Maximum allowed KL divergence (bits), exclusive.
    pub kl_threshold: f64,
    /// Minimum row count, inclusive.
    pub min_rows: usize,
    /// Maximum row count, inclusive.
    pub max_rows: usize,
    /// Minimum allowed price, inclusive.
    pub min_price: f64,
    /// Maximum allowed price, inclusive.
    pub max_price: f64,
}

impl CheckParams {
    /// Build parameters from explicit price bounds, with compiled
    /// defaults for the row bounds and KL threshold. The price bounds
    /// have no defaults anywhere.
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            kl_threshold: DEFAULT_KL_THRESHOLD,
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: DEFAULT_MAX_ROWS,
            min_price,
            max_price,
        }
    }

    /// Build parameters from a configuration, validating it first.
    pub fn from_config(config: &CheckConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let min_price = config.min_price.ok_or_else(|| ConfigError::ValidationFailed {
            field: "min_price".to_string(),
            message: "required, no default".to_string(),
        })?;
        let max_price = config.max_price.ok_or_else(|| ConfigError::ValidationFailed {
            field: "max_price".to_string(),
            message: "required, no default".to_string(),
        })?;
        Ok(Self {
            kl_threshold: config.effective_kl_threshold(),
            min_rows: config.effective_min_rows(),
            max_rows: config.effective_max_rows(),
            min_price,
            max_price,
        })
    }
}
