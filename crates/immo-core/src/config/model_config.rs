use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MODEL_PATH;

/// Price model configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the JSON model file.
    pub path: Option<String>,
}

impl ModelConfig {
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_MODEL_PATH))
    }
}
