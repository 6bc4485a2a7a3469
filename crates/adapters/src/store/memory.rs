// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory event store
//!
//! Keeps events for the life of the process. Useful for single-node
//! deployments that only need recent history and for local development.

use audit_core::{Event, EventStore, StoreError};
use std::sync::{Arc, Mutex, MutexGuard};

/// Event store holding events in memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryEventStore {
    events: Arc<Mutex<Vec<Event>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored events, oldest first
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventStore for InMemoryEventStore {
    fn record(&self, event: &Event) -> Result<(), StoreError> {
        self.lock().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
