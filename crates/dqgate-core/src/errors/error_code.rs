//! CheckErrorCode trait for stable report codes.

/// Trait for converting dqgate errors to stable code strings.
/// Every error enum implements this so an external runner can key
/// its report entries without parsing messages.
pub trait CheckErrorCode {
    /// Returns the code string (e.g., "SCHEMA_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Code constants for report entries.
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const DOMAIN_VIOLATION: &str = "DOMAIN_VIOLATION";
pub const BOUNDARY_VIOLATION: &str = "BOUNDARY_VIOLATION";
pub const DISTRIBUTION_SHAPE_MISMATCH: &str = "DISTRIBUTION_SHAPE_MISMATCH";
pub const DEGENERATE_DISTRIBUTION: &str = "DEGENERATE_DISTRIBUTION";
pub const DRIFT_EXCEEDED: &str = "DRIFT_EXCEEDED";
pub const ROW_COUNT_OUT_OF_RANGE: &str = "ROW_COUNT_OUT_OF_RANGE";
pub const PRICE_OUT_OF_RANGE: &str = "PRICE_OUT_OF_RANGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
