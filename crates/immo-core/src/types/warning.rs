//! Non-fatal advisories attached to a successful result.

use std::fmt;

use serde::Serialize;

use crate::constants::WARNING_SEPARATOR;
use crate::errors::GeoError;

/// A default was substituted or the location was approximated.
///
/// Warnings annotate success; they never turn a result into a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    BuildingStateDefaulted,
    EpcScoreDefaulted,
    /// No table configured (`path: None`) or the configured file is missing.
    GeoTableUnavailable { path: Option<String> },
    PostalCodeNotInTable { postal_code: u16 },
    UnknownRegion { name: String },
    GeoTableError { message: String },
}

impl Warning {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BuildingStateDefaulted => "BUILDING_STATE_DEFAULTED",
            Self::EpcScoreDefaulted => "EPC_SCORE_DEFAULTED",
            Self::GeoTableUnavailable { .. } => "GEO_TABLE_UNAVAILABLE",
            Self::PostalCodeNotInTable { .. } => "POSTAL_CODE_NOT_IN_TABLE",
            Self::UnknownRegion { .. } => "UNKNOWN_REGION",
            Self::GeoTableError { .. } => "GEO_TABLE_ERROR",
        }
    }

    /// True for warnings raised because the location was approximated.
    pub fn is_geo(&self) -> bool {
        !matches!(self, Self::BuildingStateDefaulted | Self::EpcScoreDefaulted)
    }

    /// Join warnings into a single advisory string; `None` when empty.
    pub fn join(warnings: &[Warning]) -> Option<String> {
        if warnings.is_empty() {
            return None;
        }
        Some(
            warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(WARNING_SEPARATOR),
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildingStateDefaulted => f.write_str(
                "Building state is not provided. Using 'GOOD' as default. \
                 This may affect price accuracy.",
            ),
            Self::EpcScoreDefaulted => f.write_str(
                "EPC score is not provided. Using 'C' as default. \
                 This may affect price accuracy.",
            ),
            Self::GeoTableUnavailable { path: Some(path) } => {
                write!(f, "Geo file not found: {path}. Using approximate location.")
            }
            Self::GeoTableUnavailable { path: None } => {
                f.write_str("Geo table not configured. Using approximate location.")
            }
            Self::PostalCodeNotInTable { postal_code } => write!(
                f,
                "Post code {postal_code} not found in geo file. Using approximate location."
            ),
            Self::UnknownRegion { name } => {
                write!(f, "Unknown region: {name}. Using approximate location.")
            }
            Self::GeoTableError { message } => {
                write!(f, "Error reading geo file: {message}. Using approximate location.")
            }
        }
    }
}

impl From<GeoError> for Warning {
    fn from(err: GeoError) -> Self {
        match err {
            GeoError::TableMissing { path } => Self::GeoTableUnavailable { path: Some(path) },
            GeoError::UnknownRegion { name } => Self::UnknownRegion { name },
            other => Self::GeoTableError {
                message: other.to_string(),
            },
        }
    }
}
