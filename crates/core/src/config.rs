// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime wiring configuration
//!
//! Describes which store and listener backends a process makes available.
//! Tenant policies are supplied separately by the host application.
//!
//! ```toml
//! host_name = "auth-1"
//!
//! [store]
//! kind = "jsonl"
//! path = "/var/lib/audit/events.jsonl"
//!
//! [[listeners]]
//! kind = "log"
//! id = "log"
//!
//! [[listeners]]
//! kind = "http"
//! id = "webhook"
//! endpoint = "https://hooks.example.com/audit"
//! timeout = "2s"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Sinks available to this process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Overrides host name resolution when set
    pub host_name: Option<String>,
    pub store: StoreConfig,
    pub listeners: Vec<ListenerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    #[default]
    None,
    Memory,
    Jsonl {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListenerConfig {
    Log {
        id: String,
        #[serde(default = "LogLevel::success_default")]
        success_level: LogLevel,
        #[serde(default = "LogLevel::error_default")]
        error_level: LogLevel,
    },
    Http {
        id: String,
        endpoint: String,
        /// Upper bound on one delivery, e.g. `"2s"` or `"500ms"`
        #[serde(with = "humantime_serde", default = "default_http_timeout")]
        timeout: Duration,
    },
}

impl ListenerConfig {
    pub fn id(&self) -> &str {
        match self {
            ListenerConfig::Log { id, .. } | ListenerConfig::Http { id, .. } => id,
        }
    }
}

/// Level used by the logging listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(5)
}

impl LogLevel {
    fn success_default() -> Self {
        LogLevel::Debug
    }

    fn error_default() -> Self {
        LogLevel::Warn
    }
}

impl AuditConfig {
    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for listener in &self.listeners {
            let id = listener.id();
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid("listener id is empty".to_string()));
            }
            if !ids.insert(id) {
                return Err(ConfigError::Invalid(format!("duplicate listener id: {id}")));
            }
            if let ListenerConfig::Http { timeout, .. } = listener {
                if timeout.is_zero() {
                    return Err(ConfigError::Invalid(format!("listener {id} timeout is zero")));
                }
            }
            if let ListenerConfig::Http { endpoint, .. } = listener {
                if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                    return Err(ConfigError::Invalid(format!(
                        "listener {} endpoint must be an http(s) url: {}",
                        id, endpoint
                    )));
                }
            }
        }
        if let StoreConfig::Jsonl { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("jsonl store path is empty".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
