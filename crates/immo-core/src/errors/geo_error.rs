//! Geo lookup errors.

use super::error_code::{self, ErrorCode};

/// Errors from the postal-code table.
///
/// These never fail a request: the resolver converts each one into a
/// `Warning` and falls back to the range classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("geo table not found: {path}")]
    TableMissing { path: String },

    #[error("geo table {path} unreadable: {message}")]
    TableUnreadable { path: String, message: String },

    #[error("geo table {path} has no '{column}' column")]
    MissingColumn { path: String, column: &'static str },

    #[error("malformed geo point for postal code {postal_code}: '{raw}'")]
    MalformedGeoPoint { postal_code: u16, raw: String },

    #[error("unknown region: {name}")]
    UnknownRegion { name: String },
}

impl ErrorCode for GeoError {
    fn error_code(&self) -> &'static str {
        error_code::GEO_ERROR
    }
}
