//! Data model shared by the pipeline and the HTTP boundary.

pub mod attributes;
pub mod feature_vector;
pub mod geo;
pub mod warning;

pub use attributes::{AttributeField, Field, RawAttributes};
pub use feature_vector::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use geo::{GeoRecord, PostalCode, Region};
pub use warning::Warning;
