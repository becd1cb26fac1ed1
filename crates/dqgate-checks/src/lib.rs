//! Validation rule set for listing tables.
//!
//! A data-quality gate, not a processing engine: every check reads one or
//! two in-memory tables, decides accept/reject, and explains why. Table
//! loading, reference selection, result aggregation, and scheduling all
//! belong to the external runner.

pub mod checks;
pub mod stats;

pub use checks::{
    check_borough_domain, check_borough_drift, check_boundaries,
    check_distribution_drift, check_price_range, check_row_count, check_schema,
    evaluate_all, CheckId, CheckOutcome, CheckParams, CheckStatus,
};
