//! Tracing setup for dqgate.

pub mod setup;

pub use setup::init_tracing;
