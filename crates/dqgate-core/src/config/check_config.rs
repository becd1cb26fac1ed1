//! Check parameter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KL_THRESHOLD, DEFAULT_MAX_ROWS, DEFAULT_MIN_ROWS};
use crate::errors::ConfigError;

/// Configuration for the validation checks.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DQGATE_*`)
/// 2. Project config (`dqgate.toml` in the project root)
/// 3. Compiled defaults
///
/// Price bounds have no compiled default: the external runner must supply
/// them through one of the layers before `validate` passes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Maximum allowed KL divergence (bits). Default: 0.2.
    pub kl_threshold: Option<f64>,
    /// Minimum row count. Default: 15000.
    pub min_rows: Option<usize>,
    /// Maximum row count. Default: 1000000.
    pub max_rows: Option<usize>,
    /// Minimum allowed price. Required, no default.
    pub min_price: Option<f64>,
    /// Maximum allowed price. Required, no default.
    pub max_price: Option<f64>,
    /// Checks to run, by id string. Default: all checks.
    #[serde(default)]
    pub enabled_checks: Vec<String>,
}

impl CheckConfig {
    /// Load configuration with 3-layer resolution and validate the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("dqgate.toml");
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            let file_config: CheckConfig =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            Self::merge(&mut config, &file_config);
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the effective KL threshold, defaulting to 0.2.
    pub fn effective_kl_threshold(&self) -> f64 {
        self.kl_threshold.unwrap_or(DEFAULT_KL_THRESHOLD)
    }

    /// Returns the effective minimum row count, defaulting to 15000.
    pub fn effective_min_rows(&self) -> usize {
        self.min_rows.unwrap_or(DEFAULT_MIN_ROWS)
    }

    /// Returns the effective maximum row count, defaulting to 1000000.
    pub fn effective_max_rows(&self) -> usize {
        self.max_rows.unwrap_or(DEFAULT_MAX_ROWS)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.kl_threshold {
            if threshold <= 0.0 || !threshold.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "kl_threshold".to_string(),
                    message: "must be a finite value greater than 0".to_string(),
                });
            }
        }
        if self.effective_min_rows() > self.effective_max_rows() {
            return Err(ConfigError::ValidationFailed {
                field: "min_rows".to_string(),
                message: "must not exceed max_rows".to_string(),
            });
        }
        let (min_price, max_price) = match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => (min, max),
            (None, _) => {
                return Err(ConfigError::ValidationFailed {
                    field: "min_price".to_string(),
                    message: "required, no default".to_string(),
                });
            }
            (_, None) => {
                return Err(ConfigError::ValidationFailed {
                    field: "max_price".to_string(),
                    message: "required, no default".to_string(),
                });
            }
        };
        if min_price > max_price {
            return Err(ConfigError::ValidationFailed {
                field: "min_price".to_string(),
                message: "must not exceed max_price".to_string(),
            });
        }
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut CheckConfig, other: &CheckConfig) {
        if other.kl_threshold.is_some() {
            base.kl_threshold = other.kl_threshold;
        }
        if other.min_rows.is_some() {
            base.min_rows = other.min_rows;
        }
        if other.max_rows.is_some() {
            base.max_rows = other.max_rows;
        }
        if other.min_price.is_some() {
            base.min_price = other.min_price;
        }
        if other.max_price.is_some() {
            base.max_price = other.max_price;
        }
        if !other.enabled_checks.is_empty() {
            base.enabled_checks = other.enabled_checks.clone();
        }
    }

    /// Apply `DQGATE_*` environment variable overrides.
    fn apply_env_overrides(config: &mut CheckConfig) {
        if let Ok(val) = std::env::var("DQGATE_KL_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.kl_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DQGATE_MIN_ROWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.min_rows = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DQGATE_MAX_ROWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.max_rows = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DQGATE_MIN_PRICE") {
            if let Ok(v) = val.parse::<f64>() {
                config.min_price = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DQGATE_MAX_PRICE") {
            if let Ok(v) = val.parse::<f64>() {
                config.max_price = Some(v);
            }
        }
    }
}
