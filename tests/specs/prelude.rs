// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the behavioral specs

#![allow(dead_code)]

pub use audit_adapters::{FakeEventStore, FakeListener};
pub use audit_core::{
    EventBuilder, EventRuntime, EventType, FakeClock, FixedHost, SequentialIdGen, SinkId,
    SinkRegistry, TenantConfig,
};
pub use std::sync::Arc;

pub type TestRuntime = EventRuntime<FakeClock, SequentialIdGen>;

/// Runtime, its clock, the store, and listeners in registration order
pub struct World {
    pub runtime: TestRuntime,
    pub clock: FakeClock,
    pub store: FakeEventStore,
    pub listeners: Vec<FakeListener>,
}

impl World {
    pub fn new(listener_ids: &[&str]) -> Self {
        let clock = FakeClock::new();
        let store = FakeEventStore::new();
        let listeners: Vec<_> = listener_ids
            .iter()
            .map(|id| FakeListener::new(*id))
            .collect();

        let mut registry = SinkRegistry::new().with_store(Arc::new(store.clone()));
        for listener in &listeners {
            registry.register_listener(Arc::new(listener.clone()));
        }

        let runtime = EventRuntime::new(registry)
            .with_host(Arc::new(FixedHost::new("spec-host")))
            .with_clock(clock.clone())
            .with_ids(SequentialIdGen::new("spec"));

        Self {
            runtime,
            clock,
            store,
            listeners,
        }
    }

    pub fn listener(&self, id: &str) -> &FakeListener {
        self.listeners
            .iter()
            .find(|l| audit_core::EventListener::id(*l) == id)
            .unwrap()
    }

    pub fn builder(&self, tenant: TenantConfig) -> EventBuilder<FakeClock, SequentialIdGen> {
        EventBuilder::new(&self.runtime, Arc::new(tenant), "203.0.113.5")
    }
}

/// Tenant with auditing on and the given listeners enabled
pub fn audited_tenant(listeners: &[&str]) -> TenantConfig {
    listeners.iter().fold(
        TenantConfig::new("acme").with_events_enabled(true),
        |tenant, id| tenant.with_listener(*id),
    )
}
