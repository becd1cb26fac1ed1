//! Borough domain check.

use rustc_hash::FxHashSet;

use dqgate_core::constants::KNOWN_BOROUGHS;
use dqgate_core::errors::ValidationError;
use dqgate_core::types::ListingTable;

/// Verify the set of distinct borough values equals the 5-name domain.
///
/// Set equality, order-independent: every known borough must be present
/// in the data, and no other value may appear.
pub fn check_borough_domain(table: &ListingTable) -> Result<(), ValidationError> {
    let seen: FxHashSet<&str> = table
        .rows()
        .iter()
        .map(|r| r.neighbourhood_group.as_str())
        .collect();
    let known: FxHashSet<&str> = KNOWN_BOROUGHS.iter().copied().collect();

    let mut unexpected: Vec<String> =
        seen.difference(&known).map(|s| s.to_string()).collect();
    let mut missing: Vec<String> =
        known.difference(&seen).map(|s| s.to_string()).collect();

    if unexpected.is_empty() && missing.is_empty() {
        return Ok(());
    }

    unexpected.sort_unstable();
    missing.sort_unstable();
    Err(ValidationError::DomainViolation {
        unexpected,
        missing,
    })
}
