//! Data model: listing rows, tables, and categorical distributions.

pub mod distribution;
pub mod listing;

pub use distribution::CategoricalDistribution;
pub use listing::{Listing, ListingTable};
