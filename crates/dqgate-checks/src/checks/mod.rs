//! The validation rule set.
//!
//! Six independent, stateless checks. Each takes an immutable listing
//! table (plus scalar parameters where applicable) and returns `Ok(())`
//! on pass or a descriptive `ValidationError` on violation. No check
//! mutates its input or depends on another check having run, so a runner
//! may invoke them in any order, or concurrently.

pub mod boundaries;
pub mod domain;
pub mod drift;
pub mod price;
pub mod row_count;
pub mod schema;
pub mod types;

pub use boundaries::check_boundaries;
pub use domain::check_borough_domain;
pub use drift::{check_borough_drift, check_distribution_drift};
pub use price::check_price_range;
pub use row_count::check_row_count;
pub use schema::check_schema;
pub use types::{CheckId, CheckOutcome, CheckParams, CheckStatus};

use dqgate_core::constants::BOUND_EPSILON;
use dqgate_core::types::ListingTable;

/// Inclusive interval membership with float tolerance at the bounds.
pub(crate) fn within_inclusive(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo - BOUND_EPSILON && value <= hi + BOUND_EPSILON
}

/// Run every check independently and collect the outcomes in
/// [`CheckId::all`] order.
///
/// The drift check is skipped when no reference table is supplied (first
/// run). Failures do not stop later checks; how to aggregate or halt on
/// the outcomes is the caller's policy.
pub fn evaluate_all(
    table: &ListingTable,
    reference: Option<&ListingTable>,
    params: &CheckParams,
) -> Vec<CheckOutcome> {
    CheckId::all()
        .iter()
        .map(|&id| {
            let result = match id {
                CheckId::Schema => check_schema(table),
                CheckId::BoroughDomain => check_borough_domain(table),
                CheckId::Boundaries => check_boundaries(table),
                CheckId::BoroughDrift => match reference {
                    Some(reference) => {
                        check_borough_drift(table, reference, params.kl_threshold)
                    }
                    None => return CheckOutcome::skipped(id),
                },
                CheckId::RowCount => {
                    check_row_count(table, params.min_rows, params.max_rows)
                }
                CheckId::PriceRange => {
                    check_price_range(table, params.min_price, params.max_price)
                }
            };
            match result {
                Ok(()) => CheckOutcome::pass(id),
                Err(error) => CheckOutcome::fail(id, error),
            }
        })
        .collect()
}
