// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Store and listener backends for audit events

pub mod listener;
pub mod setup;
pub mod store;
pub mod traced;

#[cfg(test)]
mod test_logs;

pub use listener::{format_event, HttpListener, LoggingListener};
pub use setup::{load_runtime, registry_from_config, runtime_from_config, SetupError};
pub use store::{InMemoryEventStore, JsonlEventStore};
pub use traced::{TracedEventStore, TracedListener};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use listener::FakeListener;
#[cfg(any(test, feature = "test-support"))]
pub use store::FakeEventStore;
