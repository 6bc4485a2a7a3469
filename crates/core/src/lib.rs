// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! audit-core: audit event recording and dispatch
//!
//! This crate provides:
//! - The event record and its type taxonomy
//! - The tenant policy contract consulted at dispatch
//! - Sink traits for stores and listeners, and a registry to resolve them
//! - The fluent `EventBuilder` that assembles and fans out events
//! - Clock, id and host identity abstractions for testable stamping

pub mod clock;
pub mod config;
pub mod connection;
pub mod error;
pub mod event;
pub mod host;
pub mod id;
pub mod registry;
pub mod runtime;
pub mod sink;
pub mod tenant;

mod builder;

#[cfg(test)]
mod test_sinks;

// Re-exports
pub use builder::EventBuilder;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{AuditConfig, ConfigError, ListenerConfig, LogLevel, StoreConfig};
pub use connection::{ClientConnection, Unaddressed};
pub use error::BuilderError;
pub use event::{Event, EventType, UnknownEventType};
pub use host::{FailingHost, FixedHost, HostError, HostIdentity, SystemHost};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use registry::SinkRegistry;
pub use runtime::EventRuntime;
pub use sink::{
    DispatchReport, EventListener, EventStore, ListenerError, SinkFault, SinkId, StoreError,
};
pub use tenant::{TenantConfig, TenantPolicy};
