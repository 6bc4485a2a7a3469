// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tenant event policy
//!
//! The policy is read-only input to dispatch. Callers that already have a
//! tenant model implement [`TenantPolicy`] for it; [`TenantConfig`] is the
//! plain-data implementation.

use crate::event::EventType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only view of a tenant's auditing settings
pub trait TenantPolicy: Send + Sync {
    /// Tenant identifier stamped on every event
    fn id(&self) -> &str;

    /// Whether events are persisted to the store at all
    fn events_enabled(&self) -> bool;

    /// Listener ids to notify, in notification order
    fn events_listeners(&self) -> &[String];

    /// Explicit allow-list of type names to persist; empty means "use defaults"
    fn enabled_event_types(&self) -> &BTreeSet<String>;

    /// Decide whether the store should receive an event of this type
    fn should_persist(&self, kind: EventType) -> bool {
        let enabled = self.enabled_event_types();
        if enabled.is_empty() {
            kind.save_by_default()
        } else {
            enabled.contains(kind.name())
        }
    }
}

/// Plain-data tenant policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantConfig {
    pub id: String,
    pub events_enabled: bool,
    pub events_listeners: Vec<String>,
    pub enabled_event_types: BTreeSet<String>,
}

impl TenantConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_events_enabled(mut self, enabled: bool) -> Self {
        self.events_enabled = enabled;
        self
    }

    /// Append a listener id; ids already present are ignored
    pub fn with_listener(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.events_listeners.contains(&id) {
            self.events_listeners.push(id);
        }
        self
    }

    pub fn with_enabled_type(mut self, kind: EventType) -> Self {
        self.enabled_event_types.insert(kind.name().to_string());
        self
    }
}

impl TenantPolicy for TenantConfig {
    fn id(&self) -> &str {
        &self.id
    }

    fn events_enabled(&self) -> bool {
        self.events_enabled
    }

    fn events_listeners(&self) -> &[String] {
        &self.events_listeners
    }

    fn enabled_event_types(&self) -> &BTreeSet<String> {
        &self.enabled_event_types
    }
}

#[cfg(test)]
#[path = "tenant_tests.rs"]
mod tests;
