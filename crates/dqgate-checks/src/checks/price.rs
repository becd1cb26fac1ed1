//! Price range check.

use dqgate_core::errors::ValidationError;
use dqgate_core::types::ListingTable;

use super::within_inclusive;

/// Verify every row's price lies in [`min_price`, `max_price`] inclusive.
///
/// The failure carries every offending value, not just a count, so a bad
/// batch can be diagnosed without re-running the check.
pub fn check_price_range(
    table: &ListingTable,
    min_price: f64,
    max_price: f64,
) -> Result<(), ValidationError> {
    let invalid: Vec<f64> = table
        .rows()
        .iter()
        .map(|r| r.price)
        .filter(|&price| !within_inclusive(price, min_price, max_price))
        .collect();

    if !invalid.is_empty() {
        return Err(ValidationError::PriceOutOfRange {
            min: min_price,
            max: max_price,
            invalid,
        });
    }
    Ok(())
}
