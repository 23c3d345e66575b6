//! Caller-input errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while validating or encoding caller-supplied attributes.
///
/// These are the only hard failures of the feature pipeline. `value` carries
/// the offending input rendered as JSON so messages stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Area must be an integer between 1 and 4294967295, got {value}")]
    InvalidArea { value: String },

    #[error("Invalid property type: {value}. Must be one of HOUSE, APARTMENT, OTHERS")]
    InvalidPropertyType { value: String },

    #[error("Number of bedrooms must be a non-negative integer, got {value}")]
    InvalidRoomCount { value: String },

    #[error("Invalid Belgian postal code: {value} (must be 4 digits between 1000 and 9999)")]
    InvalidPostalCode { value: String },

    #[error(
        "Invalid building state: {value}. Must be one of NEW, TO RENOVATE, GOOD, \
         TO BE DONE UP, JUST RENOVATED, TO REBUILD"
    )]
    InvalidBuildingState { value: String },

    #[error("Invalid EPC score: {value}. Must be one of A++, A+, A, B, C, D, E, F, G")]
    InvalidEpcScore { value: String },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::MISSING_FIELD,
            Self::InvalidArea { .. } => error_code::INVALID_AREA,
            Self::InvalidPropertyType { .. } => error_code::INVALID_PROPERTY_TYPE,
            Self::InvalidRoomCount { .. } => error_code::INVALID_ROOM_COUNT,
            Self::InvalidPostalCode { .. } => error_code::INVALID_POSTAL_CODE,
            Self::InvalidBuildingState { .. } => error_code::INVALID_BUILDING_STATE,
            Self::InvalidEpcScore { .. } => error_code::INVALID_EPC_SCORE,
        }
    }
}
