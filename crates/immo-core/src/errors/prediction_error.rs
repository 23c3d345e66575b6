//! Predictor errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading or invoking the price model.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Model file not found: {path}")]
    ModelNotFound { path: String },

    #[error("Model parse error in {path}: {message}")]
    ModelParse { path: String, message: String },

    #[error("Model references unknown feature: {name}")]
    UnknownFeature { name: String },

    #[error("Model produced a non-finite prediction: {value}")]
    NonFiniteOutput { value: f64 },
}

impl ErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ModelNotFound { .. } | Self::ModelParse { .. } | Self::UnknownFeature { .. } => {
                error_code::MODEL_ERROR
            }
            Self::NonFiniteOutput { .. } => error_code::PREDICTION_ERROR,
        }
    }
}
