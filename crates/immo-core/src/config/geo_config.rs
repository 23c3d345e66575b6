//! Geo resolver configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GEO_ENABLED, DEFAULT_GEO_TABLE_PATH};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeoConfig {
    /// Consult the postal-code table before the range classifier. Default: true.
    pub enabled: Option<bool>,
    /// Path to the semicolon-delimited postal-code table.
    pub table_path: Option<String>,
}

impl GeoConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_GEO_ENABLED)
    }

    /// The table to consult, or `None` when the table is disabled.
    pub fn effective_table_path(&self) -> Option<PathBuf> {
        if !self.effective_enabled() {
            return None;
        }
        Some(PathBuf::from(
            self.table_path.as_deref().unwrap_or(DEFAULT_GEO_TABLE_PATH),
        ))
    }
}
