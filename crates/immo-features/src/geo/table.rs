//! Postal-code table backed by the semicolon-delimited georef export.
//!
//! Tables are loaded lazily on first lookup and kept in a process-wide moka
//! cache keyed by path. `try_get_with` coalesces concurrent first loads, and
//! failed loads are not cached so a table that appears later is picked up.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use moka::sync::Cache;

use immo_core::constants::{
    GEO_COLUMN_GEO_POINT, GEO_COLUMN_POST_CODE, GEO_COLUMN_REGION_FR, GEO_TABLE_DELIMITER,
};
use immo_core::errors::GeoError;
use immo_core::traits::GeoLookup;
use immo_core::{GeoRecord, PostalCode, Region};

static TABLE_CACHE: LazyLock<Cache<PathBuf, Arc<GeoTable>>> =
    LazyLock::new(|| Cache::builder().max_capacity(8).build());

/// Raw row as stored in the file; parsed on lookup.
#[derive(Debug, Clone)]
struct Row {
    geo_point: String,
    region_fr: String,
}

/// In-memory postal-code table. Read-only once loaded.
#[derive(Debug)]
pub struct GeoTable {
    source: String,
    rows: HashMap<u16, Row>,
}

impl GeoTable {
    /// Load a table from disk.
    pub fn load(path: &Path) -> Result<Self, GeoError> {
        let source = path.display().to_string();
        if !path.exists() {
            return Err(GeoError::TableMissing { path: source });
        }
        let file = std::fs::File::open(path).map_err(|e| GeoError::TableUnreadable {
            path: source.clone(),
            message: e.to_string(),
        })?;
        Self::from_reader(source, file)
    }

    /// Parse a table from any reader. `source` names it in errors.
    pub fn from_reader<R: io::Read>(source: impl Into<String>, reader: R) -> Result<Self, GeoError> {
        let source = source.into();
        let unreadable = |e: csv::Error| GeoError::TableUnreadable {
            path: source.clone(),
            message: e.to_string(),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(GEO_TABLE_DELIMITER)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(unreadable)?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or_else(|| GeoError::MissingColumn {
                    path: source.clone(),
                    column: name,
                })
        };
        let code_idx = column(GEO_COLUMN_POST_CODE)?;
        let point_idx = column(GEO_COLUMN_GEO_POINT)?;
        let region_idx = column(GEO_COLUMN_REGION_FR)?;

        let mut rows = HashMap::new();
        for record in rdr.records() {
            let record = record.map_err(unreadable)?;
            let Some(code) = record
                .get(code_idx)
                .and_then(|c| c.trim().parse::<u16>().ok())
            else {
                tracing::debug!(source = %source, row = ?record.position().map(|p| p.line()), "skipping row without a numeric post code");
                continue;
            };
            // First row for a code wins; the export repeats codes per municipality.
            rows.entry(code).or_insert_with(|| Row {
                geo_point: record.get(point_idx).unwrap_or_default().to_string(),
                region_fr: record.get(region_idx).unwrap_or_default().to_string(),
            });
        }

        Ok(Self { source, rows })
    }

    /// Where the table was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, code: PostalCode) -> bool {
        self.rows.contains_key(&code.get())
    }

    /// Exact row for `code`. `Ok(None)` when the table has no such row.
    pub fn record(&self, code: PostalCode) -> Result<Option<GeoRecord>, GeoError> {
        let Some(row) = self.rows.get(&code.get()) else {
            return Ok(None);
        };
        let (latitude, longitude) =
            parse_geo_point(&row.geo_point).ok_or_else(|| GeoError::MalformedGeoPoint {
                postal_code: code.get(),
                raw: row.geo_point.clone(),
            })?;
        let region =
            Region::from_french_name(&row.region_fr).ok_or_else(|| GeoError::UnknownRegion {
                name: row.region_fr.clone(),
            })?;
        Ok(Some(GeoRecord {
            postal_code: code,
            latitude,
            longitude,
            region,
        }))
    }
}

/// Parse `"lat,lon"`. Both halves must be finite.
fn parse_geo_point(raw: &str) -> Option<(f64, f64)> {
    let (lat, lon) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
}

/// Table-backed lookup through the shared cache.
#[derive(Debug, Clone)]
pub struct TableGeoLookup {
    path: PathBuf,
}

impl TableGeoLookup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached table, loading it at most once per path.
    pub fn table(&self) -> Result<Arc<GeoTable>, GeoError> {
        TABLE_CACHE
            .try_get_with(self.path.clone(), || {
                let table = GeoTable::load(&self.path)?;
                tracing::info!(
                    source = table.source(),
                    rows = table.len(),
                    "loaded postal-code table"
                );
                Ok::<_, GeoError>(Arc::new(table))
            })
            .map_err(|e: Arc<GeoError>| (*e).clone())
    }
}

impl GeoLookup for TableGeoLookup {
    fn source_name(&self) -> &'static str {
        "table"
    }

    fn lookup(&self, code: PostalCode) -> Result<Option<GeoRecord>, GeoError> {
        self.table()?.record(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_parsing() {
        assert_eq!(parse_geo_point("50.84, 4.36"), Some((50.84, 4.36)));
        assert_eq!(parse_geo_point("50.84"), None);
        assert_eq!(parse_geo_point("north,east"), None);
        assert_eq!(parse_geo_point("NaN,4.0"), None);
    }

    #[test]
    fn bom_prefixed_header_is_recognized() {
        let csv = "\u{feff}Post code;Geo Point;Région name (French)\n1000;50.84,4.36;Région de Bruxelles-Capitale\n";
        let table = GeoTable::from_reader("inline", csv.as_bytes()).unwrap();
        assert_eq!(table.source(), "inline");
        assert_eq!(table.len(), 1);
        assert!(table.contains(PostalCode::new(1000).unwrap()));
    }
}
