//! Geographic bounding box check.

use dqgate_core::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use dqgate_core::errors::ValidationError;
use dqgate_core::types::ListingTable;

use super::within_inclusive;

/// Verify every row lies inside the service region: longitude in
/// [-74.25, -73.50] and latitude in [40.5, 41.2], inclusive.
pub fn check_boundaries(table: &ListingTable) -> Result<(), ValidationError> {
    let out_of_bounds = table
        .rows()
        .iter()
        .filter(|r| {
            !(within_inclusive(r.longitude, LONGITUDE_MIN, LONGITUDE_MAX)
                && within_inclusive(r.latitude, LATITUDE_MIN, LATITUDE_MAX))
        })
        .count();

    if out_of_bounds > 0 {
        tracing::debug!(out_of_bounds, "rows outside the service bounding box");
        return Err(ValidationError::BoundaryViolation {
            out_of_bounds,
            lon_min: LONGITUDE_MIN,
            lon_max: LONGITUDE_MAX,
            lat_min: LATITUDE_MIN,
            lat_max: LATITUDE_MAX,
        });
    }
    Ok(())
}
