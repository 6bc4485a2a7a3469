// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sink registry populated at startup
//!
//! Builders resolve their store and listeners here once, at construction.
//! Resolution problems are configuration faults: they are logged and the
//! builder carries on with whatever sinks did resolve.

use crate::sink::{EventListener, EventStore};
use crate::tenant::TenantPolicy;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Process-wide set of available sinks
#[derive(Clone, Default)]
pub struct SinkRegistry {
    store: Option<Arc<dyn EventStore>>,
    listeners: BTreeMap<String, Arc<dyn EventListener>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the event store, replacing any previous one
    pub fn with_store(mut self, store: Arc<dyn EventStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register a listener under its own id
    pub fn with_listener(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.register_listener(listener);
        self
    }

    /// Register a listener under its own id, replacing an existing one
    pub fn register_listener(&mut self, listener: Arc<dyn EventListener>) {
        let id = listener.id().to_string();
        if self.listeners.insert(id.clone(), listener).is_some() {
            tracing::warn!(listener = %id, "listener registered twice, keeping the latest");
        }
    }

    pub fn store(&self) -> Option<Arc<dyn EventStore>> {
        self.store.clone()
    }

    pub fn listener(&self, id: &str) -> Option<Arc<dyn EventListener>> {
        self.listeners.get(id).cloned()
    }

    /// Registered listener ids, sorted
    pub fn listener_ids(&self) -> Vec<&str> {
        self.listeners.keys().map(String::as_str).collect()
    }

    /// Store for a tenant, or `None` when auditing is off or no store exists
    pub fn resolve_store(&self, tenant: &dyn TenantPolicy) -> Option<Arc<dyn EventStore>> {
        if !tenant.events_enabled() {
            return None;
        }
        let store = self.store();
        if store.is_none() {
            tracing::warn!(
                tenant = tenant.id(),
                "events enabled, but no event store configured"
            );
        }
        store
    }

    /// Listeners named by the tenant, in policy order
    ///
    /// Unknown ids are logged and skipped; repeated ids resolve once.
    pub fn resolve_listeners(&self, tenant: &dyn TenantPolicy) -> Vec<Arc<dyn EventListener>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for id in tenant.events_listeners() {
            if !seen.insert(id.as_str()) {
                continue;
            }
            match self.listener(id) {
                Some(listener) => resolved.push(listener),
                None => tracing::warn!(
                    tenant = tenant.id(),
                    listener = %id,
                    "event listener registered, but provider not found"
                ),
            }
        }
        resolved
    }
}

impl fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("store", &self.store.is_some())
            .field("listeners", &self.listener_ids())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
