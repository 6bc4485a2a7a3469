// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use audit_core::{Event, EventStore, StoreError};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct FakeState {
    calls: Vec<Event>,
    fail_with: Option<String>,
}

/// Fake store recording every call, optionally failing
#[derive(Clone, Default)]
pub struct FakeEventStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events the store was asked to record, including failed attempts
    pub fn calls(&self) -> Vec<Event> {
        self.state().calls.clone()
    }

    /// Make subsequent calls fail with the given reason
    pub fn set_fails(&self, reason: impl Into<String>) {
        self.state().fail_with = Some(reason.into());
    }

    pub fn set_succeeds(&self) {
        self.state().fail_with = None;
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventStore for FakeEventStore {
    fn record(&self, event: &Event) -> Result<(), StoreError> {
        let mut state = self.state();
        state.calls.push(event.clone());
        match &state.fail_with {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
