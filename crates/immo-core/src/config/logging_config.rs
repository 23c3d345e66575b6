use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Logging configuration. `IMMO_LOG` still wins at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
