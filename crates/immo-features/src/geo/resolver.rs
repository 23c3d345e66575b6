use std::sync::Arc;

use immo_core::config::GeoConfig;
use immo_core::traits::GeoLookup;
use immo_core::{GeoRecord, PostalCode, Warning};

use super::range::RangeClassifier;
use super::table::TableGeoLookup;

/// Outcome of resolving one postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResolution {
    pub record: GeoRecord,
    /// True when the primary source answered with an exact row.
    pub exact: bool,
    /// Why the range classifier was used instead; `None` when `exact`.
    pub warning: Option<Warning>,
}

/// Try the primary lookup, else the range classifier. Never fails.
#[derive(Clone)]
pub struct GeoResolver {
    primary: Option<Arc<dyn GeoLookup>>,
    fallback: RangeClassifier,
}

impl GeoResolver {
    pub fn new(primary: Option<Arc<dyn GeoLookup>>) -> Self {
        Self {
            primary,
            fallback: RangeClassifier,
        }
    }

    /// Resolver backed by the postal-code table at `path`.
    pub fn with_table(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Some(Arc::new(TableGeoLookup::new(path))))
    }

    /// Resolver that always approximates.
    pub fn range_only() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &GeoConfig) -> Self {
        match config.effective_table_path() {
            Some(path) => Self::with_table(path),
            None => Self::range_only(),
        }
    }

    pub fn primary_source(&self) -> Option<&'static str> {
        self.primary.as_ref().map(|p| p.source_name())
    }

    pub fn resolve(&self, code: PostalCode) -> GeoResolution {
        let warning = match &self.primary {
            None => Warning::GeoTableUnavailable { path: None },
            Some(primary) => match primary.lookup(code) {
                Ok(Some(record)) => {
                    return GeoResolution {
                        record,
                        exact: true,
                        warning: None,
                    }
                }
                Ok(None) => Warning::PostalCodeNotInTable {
                    postal_code: code.get(),
                },
                Err(err) => {
                    tracing::warn!(
                        source = primary.source_name(),
                        postal_code = code.get(),
                        error = %err,
                        "geo lookup failed, approximating location"
                    );
                    Warning::from(err)
                }
            },
        };
        GeoResolution {
            record: self.fallback.classify(code),
            exact: false,
            warning: Some(warning),
        }
    }
}

impl Default for GeoResolver {
    fn default() -> Self {
        Self::range_only()
    }
}

impl std::fmt::Debug for GeoResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoResolver")
            .field("primary", &self.primary_source())
            .finish()
    }
}
