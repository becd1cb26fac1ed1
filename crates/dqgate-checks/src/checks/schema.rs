//! Schema conformance check.

use dqgate_core::constants::EXPECTED_COLUMNS;
use dqgate_core::errors::ValidationError;
use dqgate_core::types::ListingTable;

/// Verify the table's column names equal the expected 16-name sequence
/// exactly: same names, same order, same count.
///
/// Any drift in the source schema must stop the pipeline here rather than
/// let later checks act on the wrong columns.
pub fn check_schema(table: &ListingTable) -> Result<(), ValidationError> {
    let actual = table.columns();
    let matches = actual.len() == EXPECTED_COLUMNS.len()
        && actual
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(a, e)| a.as_str() == *e);

    if !matches {
        return Err(ValidationError::SchemaMismatch {
            expected: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}
