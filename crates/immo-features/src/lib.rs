//! # immo-features
//!
//! Turns loosely typed property attributes into the fixed 15-slot feature
//! vector the price model was trained on.
//!
//! ## Pipeline
//!
//! | Step | Module | Failure mode |
//! |------|--------|--------------|
//! | Required fields and ranges | `validator` | fail-fast `ValidationError` |
//! | Categorical and boolean fields | `encoders` | domain error, or default + warning |
//! | Postal code → location | `geo` | never fails; approximates + warning |
//! | Merge into canonical order | `pipeline` | none |

pub mod encoders;
pub mod geo;
pub mod pipeline;
pub mod validator;

pub use encoders::{BuildingState, EpcScore, PropertyType};
pub use geo::{GeoResolution, GeoResolver, RangeClassifier, TableGeoLookup};
pub use pipeline::{Assembled, FeaturePipeline};
pub use validator::{validate, RequiredAttributes};
