//! ErrorCode trait for the HTTP boundary.

/// Every error enum implements this to provide a stable, machine-readable
/// code alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_AREA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Caller-input errors.
pub const MISSING_FIELD: &str = "MISSING_FIELD";
pub const INVALID_AREA: &str = "INVALID_AREA";
pub const INVALID_PROPERTY_TYPE: &str = "INVALID_PROPERTY_TYPE";
pub const INVALID_ROOM_COUNT: &str = "INVALID_ROOM_COUNT";
pub const INVALID_POSTAL_CODE: &str = "INVALID_POSTAL_CODE";
pub const INVALID_BUILDING_STATE: &str = "INVALID_BUILDING_STATE";
pub const INVALID_EPC_SCORE: &str = "INVALID_EPC_SCORE";

// Internal errors.
pub const GEO_ERROR: &str = "GEO_ERROR";
pub const PREDICTION_ERROR: &str = "PREDICTION_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
