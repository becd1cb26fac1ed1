//! Listing rows and the in-memory listing table.

use serde::{Deserialize, Serialize};

use crate::constants::EXPECTED_COLUMNS;

/// One short-term rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub name: String,
    pub host_id: u64,
    pub host_name: String,
    /// Top-level borough, e.g. "Manhattan".
    pub neighbourhood_group: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: String,
    pub price: f64,
    pub minimum_nights: u32,
    pub number_of_reviews: u32,
    /// Date of the most recent review, if any.
    pub last_review: Option<String>,
    pub reviews_per_month: Option<f64>,
    pub calculated_host_listings_count: u32,
    pub availability_365: u32,
}

/// An ordered table of listings plus the column header as loaded.
///
/// The header travels separately from the typed rows so schema conformance
/// can detect columns that were renamed, dropped, or reordered at the
/// source before the rows were parsed. Checks never mutate the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingTable {
    columns: Vec<String>,
    rows: Vec<Listing>,
}

impl ListingTable {
    /// Build a table from a loaded header and parsed rows.
    pub fn new(columns: Vec<String>, rows: Vec<Listing>) -> Self {
        Self { columns, rows }
    }

    /// Build a table whose header is the expected column list.
    pub fn with_expected_columns(rows: Vec<Listing>) -> Self {
        Self {
            columns: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Column names in load order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The listing rows, in table order.
    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
