// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrappers for consistent observability

use audit_core::{Event, EventListener, EventStore, ListenerError, StoreError};
use std::time::Instant;

/// Wrapper that adds tracing to any EventStore
#[derive(Clone, Debug)]
pub struct TracedEventStore<S> {
    inner: S,
}

impl<S> TracedEventStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: EventStore> EventStore for TracedEventStore<S> {
    fn record(&self, event: &Event) -> Result<(), StoreError> {
        let span = tracing::info_span!(
            "store.record",
            event_id = event.id.as_deref(),
            event_type = event.type_name(),
        );
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.record(event);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms, "event saved"),
            Err(e) => tracing::warn!(elapsed_ms, error = %e, "save failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any EventListener
#[derive(Clone, Debug)]
pub struct TracedListener<L> {
    inner: L,
}

impl<L> TracedListener<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: EventListener> EventListener for TracedListener<L> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn notify(&self, event: &Event) -> Result<(), ListenerError> {
        let span = tracing::info_span!(
            "listener.notify",
            listener = self.inner.id(),
            event_id = event.id.as_deref(),
            event_type = event.type_name(),
        );
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.notify(event);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms, "delivered"),
            Err(e) => tracing::warn!(elapsed_ms, error = %e, "delivery failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
