//! Shared constants for the dqgate validation library.

/// dqgate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Expected listing-table columns, in order. Both identity and order are
/// part of the schema contract.
pub const EXPECTED_COLUMNS: [&str; 16] = [
    "id",
    "name",
    "host_id",
    "host_name",
    "neighbourhood_group",
    "neighbourhood",
    "latitude",
    "longitude",
    "room_type",
    "price",
    "minimum_nights",
    "number_of_reviews",
    "last_review",
    "reviews_per_month",
    "calculated_host_listings_count",
    "availability_365",
];

/// The five permissible borough (neighbourhood-group) values.
pub const KNOWN_BOROUGHS: [&str; 5] =
    ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

/// Western longitude bound of the service region.
pub const LONGITUDE_MIN: f64 = -74.25;

/// Eastern longitude bound of the service region.
pub const LONGITUDE_MAX: f64 = -73.50;

/// Southern latitude bound of the service region.
pub const LATITUDE_MIN: f64 = 40.5;

/// Northern latitude bound of the service region.
pub const LATITUDE_MAX: f64 = 41.2;

/// Default minimum row count.
pub const DEFAULT_MIN_ROWS: usize = 15_000;

/// Default maximum row count.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Default KL-divergence threshold (bits).
pub const DEFAULT_KL_THRESHOLD: f64 = 0.2;

/// Tolerance when requiring a probability distribution to sum to 1.
pub const PROB_SUM_EPSILON: f64 = 1e-6;

/// Tolerance applied to inclusive numeric bounds.
pub const BOUND_EPSILON: f64 = 1e-9;
