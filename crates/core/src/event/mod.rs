// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audit event record
//!
//! An [`Event`] describes one occurrence inside a tenant: who did what,
//! from where, and whether it failed. Records are assembled by
//! [`EventBuilder`](crate::EventBuilder) and handed to sinks by reference.

mod kind;

pub use kind::{EventType, UnknownEventType, ERROR_SUFFIX};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded occurrence
///
/// Every context field may be absent. `timestamp` and `id` stay empty
/// until the event is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Allocated on the first non-empty detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a single detail value
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.as_ref()?.get(key).map(String::as_str)
    }

    /// Type name, if a type has been set
    pub fn type_name(&self) -> Option<&'static str> {
        self.event_type.map(EventType::name)
    }

    /// True when the event carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
