//! Capability seams between the pipeline and its collaborators.

pub mod geo_lookup;
pub mod predictor;

pub use geo_lookup::GeoLookup;
pub use predictor::PricePredictor;
