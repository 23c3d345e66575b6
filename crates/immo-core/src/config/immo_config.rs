//! Top-level immo configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GeoConfig, LoggingConfig, ModelConfig, ServerConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "immo.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags
/// 2. Environment variables (`IMMO_*`)
/// 3. Project config (`--config` path, else `immo.toml` in the root)
/// 4. User config (`~/.immo/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImmoConfig {
    pub server: ServerConfig,
    pub geo: GeoConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit project config file. Must exist when given.
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub geo_table_path: Option<String>,
    pub geo_enabled: Option<bool>,
    pub model_path: Option<String>,
    pub log_filter: Option<String>,
}

impl ImmoConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let explicit = cli_overrides.and_then(|cli| cli.config_path.as_deref());
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ImmoConfig) -> Result<(), ConfigError> {
        if config.server.socket_addr().is_err() {
            return Err(ConfigError::ValidationFailed {
                key: "server.bind",
                message: format!("'{}' is not a socket address", config.server.effective_bind()),
            });
        }
        if let Some(ref path) = config.geo.table_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    key: "geo.table_path",
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.model.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    key: "model.path",
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.immo/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".immo").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ImmoConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let file_config: ImmoConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut ImmoConfig, other: ImmoConfig) {
        if other.server.bind.is_some() {
            base.server.bind = other.server.bind;
        }
        if other.geo.enabled.is_some() {
            base.geo.enabled = other.geo.enabled;
        }
        if other.geo.table_path.is_some() {
            base.geo.table_path = other.geo.table_path;
        }
        if other.model.path.is_some() {
            base.model.path = other.model.path;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `IMMO_SERVER_BIND`, `IMMO_GEO_TABLE_PATH`, etc.
    fn apply_env_overrides(config: &mut ImmoConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("IMMO_SERVER_BIND") {
            config.server.bind = Some(val);
        }
        if let Ok(val) = std::env::var("IMMO_GEO_ENABLED") {
            let enabled = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                source_name: "IMMO_GEO_ENABLED",
                value: val.clone(),
                expected: "true or false",
            })?;
            config.geo.enabled = Some(enabled);
        }
        if let Ok(val) = std::env::var("IMMO_GEO_TABLE_PATH") {
            config.geo.table_path = Some(val);
        }
        if let Ok(val) = std::env::var("IMMO_MODEL_PATH") {
            config.model.path = Some(val);
        }
        if let Ok(val) = std::env::var("IMMO_LOG_FILTER") {
            config.logging.filter = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ImmoConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.bind {
            config.server.bind = Some(v.clone());
        }
        if let Some(v) = cli.geo_enabled {
            config.geo.enabled = Some(v);
        }
        if let Some(ref v) = cli.geo_table_path {
            config.geo.table_path = Some(v.clone());
        }
        if let Some(ref v) = cli.model_path {
            config.model.path = Some(v.clone());
        }
        if let Some(ref v) = cli.log_filter {
            config.logging.filter = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
