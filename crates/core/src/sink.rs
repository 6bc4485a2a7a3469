// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sink contracts for finished events
//!
//! Sinks receive the event by shared reference. All sinks of one send see
//! the same instance, so none of them can alter what the others observe.

use crate::event::Event;
use std::fmt;
use thiserror::Error;

/// Errors from the durable event store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("event rejected: {0}")]
    Rejected(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from a listener backend
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener failed: {0}")]
    Failed(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Durable store for events
pub trait EventStore: Send + Sync {
    /// Persist one event
    fn record(&self, event: &Event) -> Result<(), StoreError>;
}

/// A listener backend notified of every event
pub trait EventListener: Send + Sync {
    /// Identifier tenants use to enable this listener
    fn id(&self) -> &str;

    /// Accept one event
    fn notify(&self, event: &Event) -> Result<(), ListenerError>;
}

/// Identity of a sink in dispatch reports and logs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SinkId {
    Store,
    Listener(String),
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkId::Store => write!(f, "store"),
            SinkId::Listener(id) => write!(f, "listener:{}", id),
        }
    }
}

/// A sink failure absorbed during dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkFault {
    pub sink: SinkId,
    pub reason: String,
}

/// Outcome of one send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// The store accepted the event
    pub stored: bool,
    /// Number of listeners that accepted the event
    pub notified: usize,
    pub faults: Vec<SinkFault>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    /// Fault reported by a given sink, if any
    pub fn fault(&self, sink: &SinkId) -> Option<&SinkFault> {
        self.faults.iter().find(|f| &f.sink == sink)
    }
}
