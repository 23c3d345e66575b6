//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BIND;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. Default: 127.0.0.1:8000.
    pub bind: Option<String>,
}

impl ServerConfig {
    pub fn effective_bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    /// Parse the effective bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let bind = self.effective_bind();
        bind.parse().map_err(|_| ConfigError::InvalidValue {
            source_name: "server.bind",
            value: bind.to_string(),
            expected: "a socket address such as 127.0.0.1:8000",
        })
    }
}
