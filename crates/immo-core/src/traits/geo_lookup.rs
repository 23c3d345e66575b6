use crate::errors::GeoError;
use crate::types::{GeoRecord, PostalCode};

/// A source of postal-code locations.
///
/// `Ok(None)` means the source answered but has no row for the code;
/// `Err` means the source itself could not be consulted.
pub trait GeoLookup: Send + Sync {
    /// Short identifier used in logs.
    fn source_name(&self) -> &'static str;

    fn lookup(&self, code: PostalCode) -> Result<Option<GeoRecord>, GeoError>;
}
