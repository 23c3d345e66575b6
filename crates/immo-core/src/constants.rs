// Single source of truth for default values and fixed domain constants.

// --- Server ---
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

// --- Geo ---
pub const DEFAULT_GEO_ENABLED: bool = true;
pub const DEFAULT_GEO_TABLE_PATH: &str = "data/georef-belgium-postal-codes.csv";
pub const GEO_TABLE_DELIMITER: u8 = b';';
pub const GEO_COLUMN_POST_CODE: &str = "Post code";
pub const GEO_COLUMN_GEO_POINT: &str = "Geo Point";
pub const GEO_COLUMN_REGION_FR: &str = "Région name (French)";

// --- Model ---
pub const DEFAULT_MODEL_PATH: &str = "model/price_model.json";

// --- Logging ---
pub const LOG_ENV_VAR: &str = "IMMO_LOG";
pub const DEFAULT_LOG_FILTER: &str = "immo_core=info,immo_features=info,immo_server=info";

// --- Postal codes ---
pub const POSTAL_CODE_MIN: i64 = 1000;
pub const POSTAL_CODE_MAX: i64 = 9999;

// --- Approximate region centroids used by the range classifier ---
pub const BRUSSELS_CENTROID: (f64, f64) = (50.8503, 4.3517);
pub const FLANDERS_CENTROID: (f64, f64) = (51.0, 4.5);
pub const WALLONIA_CENTROID: (f64, f64) = (50.5, 5.0);

/// Separator used when joining warnings into a single advisory string.
pub const WARNING_SEPARATOR: &str = "|";
