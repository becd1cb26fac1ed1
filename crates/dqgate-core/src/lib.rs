//! Core types, errors, config, tracing, and constants for the dqgate
//! validation library.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
