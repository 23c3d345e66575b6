//! Test fixture loader for the sample geo table, model file, and request cases.
//!
//! Shared by the integration tests of every crate in the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the repository `test-fixtures` folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // `crates/test-fixtures` is this crate, not the data directory; look for a
    // folder that actually holds fixture data.
    while !path.join("test-fixtures").join("geo").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Sample postal-code table in the georef export format.
pub fn geo_table_path() -> PathBuf {
    fixture_path("geo/postal_codes.csv")
}

/// Sample linear price model.
pub fn linear_model_path() -> PathBuf {
    fixture_path("models/linear.json")
}

/// One request scenario: the `data` payload and what the pipeline should do with it.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestCase {
    pub name: String,
    pub data: serde_json::Value,
    pub expect: Expectation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Expectation {
    /// Success. Listed slots must match exactly; `warnings` is the warning count.
    Success {
        #[serde(default)]
        slots: serde_json::Map<String, serde_json::Value>,
        warnings: usize,
    },
    /// Failure with the given error code; `mentions` must appear in the message.
    Failure { error_code: String, mentions: String },
}

/// Load every request case, sorted by file name.
pub fn request_cases() -> Vec<RequestCase> {
    let dir = fixtures_root().join("cases");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let rel = format!("cases/{}", p.file_name().unwrap_or_default().to_string_lossy());
            load_fixture(&rel)
        })
        .collect()
}
