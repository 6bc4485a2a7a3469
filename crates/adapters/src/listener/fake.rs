// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake listener for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use audit_core::{Event, EventListener, ListenerError};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct FakeState {
    calls: Vec<Event>,
    fail_with: Option<String>,
}

/// Fake listener recording every event, optionally failing
#[derive(Clone)]
pub struct FakeListener {
    id: String,
    state: Arc<Mutex<FakeState>>,
}

impl FakeListener {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Arc::default(),
        }
    }

    /// Listener that fails every call with the given reason
    pub fn failing(id: impl Into<String>, reason: impl Into<String>) -> Self {
        let listener = Self::new(id);
        listener.set_fails(reason);
        listener
    }

    /// Events delivered to this listener, including failed deliveries
    pub fn calls(&self) -> Vec<Event> {
        self.state().calls.clone()
    }

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

impl EventListener for FakeListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &Event) -> Result<(), ListenerError> {
        let mut state = self.state();
        state.calls.push(event.clone());
        match &state.fail_with {
            Some(reason) => Err(ListenerError::Failed(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
