use crate::errors::PredictionError;
use crate::types::FeatureVector;

/// Opaque price model: one feature vector in, one price out.
pub trait PricePredictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}
