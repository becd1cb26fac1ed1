//! Configuration system for dqgate.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod check_config;

pub use check_config::CheckConfig;
