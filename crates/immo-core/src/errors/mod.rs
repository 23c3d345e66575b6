//! Error handling for immo.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod geo_error;
pub mod prediction_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use geo_error::GeoError;
pub use prediction_error::PredictionError;
pub use validation_error::ValidationError;
