//! Configuration system for immo.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod geo_config;
pub mod immo_config;
pub mod logging_config;
pub mod model_config;
pub mod server_config;

pub use geo_config::GeoConfig;
pub use immo_config::{CliOverrides, ImmoConfig};
pub use logging_config::LoggingConfig;
pub use model_config::ModelConfig;
pub use server_config::ServerConfig;
