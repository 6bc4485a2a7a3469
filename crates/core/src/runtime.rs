// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Everything a builder needs from its surroundings

use crate::clock::{Clock, SystemClock};
use crate::host::{HostIdentity, SystemHost};
use crate::id::{IdGen, UuidIdGen};
use crate::registry::SinkRegistry;
use std::fmt;
use std::sync::Arc;

/// Sinks, host identity, clock and id source shared by all builders
#[derive(Clone)]
pub struct EventRuntime<C: Clock = SystemClock, G: IdGen = UuidIdGen> {
    registry: SinkRegistry,
    host: Arc<dyn HostIdentity>,
    clock: C,
    ids: G,
}

impl EventRuntime {
    /// Runtime with the system clock, system host and UUID ids
    pub fn new(registry: SinkRegistry) -> Self {
        Self {
            registry,
            host: Arc::new(SystemHost::new()),
            clock: SystemClock,
            ids: UuidIdGen,
        }
    }
}

impl<C: Clock, G: IdGen> EventRuntime<C, G> {
    pub fn with_host(mut self, host: Arc<dyn HostIdentity>) -> Self {
        self.host = host;
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> EventRuntime<C2, G> {
        EventRuntime {
            registry: self.registry,
            host: self.host,
            clock,
            ids: self.ids,
        }
    }

    pub fn with_ids<G2: IdGen>(self, ids: G2) -> EventRuntime<C, G2> {
        EventRuntime {
            registry: self.registry,
            host: self.host,
            clock: self.clock,
            ids,
        }
    }

    pub fn registry(&self) -> &SinkRegistry {
        &self.registry
    }

    pub fn host(&self) -> &dyn HostIdentity {
        self.host.as_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ids(&self) -> &G {
        &self.ids
    }
}

impl<C: Clock, G: IdGen> fmt::Debug for EventRuntime<C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRuntime")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
