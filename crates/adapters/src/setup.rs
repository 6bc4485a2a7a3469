// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build a sink registry and runtime from configuration

use crate::listener::{HttpListener, LoggingListener};
use crate::store::{InMemoryEventStore, JsonlEventStore};
use crate::traced::{TracedEventStore, TracedListener};
use audit_core::{
    AuditConfig, ConfigError, EventListener, EventRuntime, EventStore, FixedHost, ListenerConfig,
    SinkRegistry, StoreConfig,
};
use audit_storage::LogError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("store error: {0}")]
    Store(#[from] LogError),
}

/// Instantiate every sink the config names
pub fn registry_from_config(config: &AuditConfig) -> Result<SinkRegistry, SetupError> {
    config.validate()?;

    let mut registry = SinkRegistry::new();

    let store: Option<Arc<dyn EventStore>> = match &config.store {
        StoreConfig::None => None,
        StoreConfig::Memory => Some(Arc::new(TracedEventStore::new(InMemoryEventStore::new()))),
        StoreConfig::Jsonl { path } => Some(Arc::new(TracedEventStore::new(
            JsonlEventStore::open(path)?,
        ))),
    };
    if let Some(store) = store {
        registry = registry.with_store(store);
    }

    for listener in &config.listeners {
        let sink: Arc<dyn EventListener> = match listener {
            ListenerConfig::Log {
                id,
                success_level,
                error_level,
            } => Arc::new(TracedListener::new(
                LoggingListener::new(id.as_str()).with_levels(*success_level, *error_level),
            )),
            ListenerConfig::Http {
                id,
                endpoint,
                timeout,
            } => {
                let http = HttpListener::with_timeout(id.as_str(), endpoint.as_str(), *timeout);
                Arc::new(TracedListener::new(http))
            }
        };
        registry.register_listener(sink);
    }

    tracing::info!(
        store = ?config.store,
        listeners = ?registry.listener_ids(),
        "sink registry ready"
    );

    Ok(registry)
}

/// Runtime wired from config, with the system clock and UUID ids
pub fn runtime_from_config(config: &AuditConfig) -> Result<EventRuntime, SetupError> {
    let registry = registry_from_config(config)?;
    let mut runtime = EventRuntime::new(registry);
    if let Some(name) = &config.host_name {
        runtime = runtime.with_host(Arc::new(FixedHost::new(name.as_str())));
    }
    Ok(runtime)
}

/// Load a TOML config file and wire a runtime from it
pub fn load_runtime(path: &Path) -> Result<EventRuntime, SetupError> {
    let config = AuditConfig::load(path)?;
    runtime_from_config(&config)
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
