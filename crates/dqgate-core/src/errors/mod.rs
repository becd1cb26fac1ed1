//! Error handling for dqgate.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::CheckErrorCode;
pub use validation_error::ValidationError;
