//! # immo-core
//!
//! Foundation crate for the immo price estimation service.
//! Defines the attribute and feature-vector types, the geo and predictor
//! traits, errors, configuration, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ImmoConfig;
pub use errors::{ErrorCode, ValidationError};
pub use types::{
    AttributeField, Field, FeatureVector, GeoRecord, PostalCode, RawAttributes, Region, Warning,
};
