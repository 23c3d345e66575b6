//! Postal code → (latitude, longitude, region).
//!
//! [`GeoResolver`] composes an exact table lookup with the range classifier.
//! Geography is best effort: every failure becomes a warning plus an
//! approximate location.

pub mod range;
pub mod resolver;
pub mod table;

pub use range::RangeClassifier;
pub use resolver::{GeoResolution, GeoResolver};
pub use table::{GeoTable, TableGeoLookup};
