//! Row count check.

use dqgate_core::errors::ValidationError;
use dqgate_core::types::ListingTable;

/// Verify the table holds between `min_rows` and `max_rows` rows,
/// inclusive on both ends.
pub fn check_row_count(
    table: &ListingTable,
    min_rows: usize,
    max_rows: usize,
) -> Result<(), ValidationError> {
    let actual = table.len();
    if actual < min_rows || actual > max_rows {
        return Err(ValidationError::RowCountOutOfRange {
            actual,
            min: min_rows,
            max: max_rows,
        });
    }
    Ok(())
}
