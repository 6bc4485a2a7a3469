// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent event builder
//!
//! A builder is bound to one tenant and one in-progress [`Event`]. Setters
//! mutate the event in place; [`EventBuilder::success`] and
//! [`EventBuilder::error`] stamp it and fan it out to the store and to
//! every listener the tenant enabled. Sink failures are logged and
//! reported, never returned as errors.

use crate::clock::{Clock, SystemClock};
use crate::connection::ClientConnection;
use crate::error::BuilderError;
use crate::event::{Event, EventType};
use crate::id::{IdGen, UuidIdGen};
use crate::runtime::EventRuntime;
use crate::sink::{DispatchReport, EventListener, EventStore, SinkFault, SinkId};
use crate::tenant::TenantPolicy;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Assembles one event and dispatches it to the tenant's sinks
///
/// `clone()` forks the builder: both copies share the resolved sinks and
/// tenant, but each owns its own copy of the event.
#[derive(Clone)]
pub struct EventBuilder<C: Clock = SystemClock, G: IdGen = UuidIdGen> {
    store: Option<Arc<dyn EventStore>>,
    listeners: Arc<[Arc<dyn EventListener>]>,
    tenant: Arc<dyn TenantPolicy>,
    event: Event,
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGen> EventBuilder<C, G> {
    /// Start a fresh event for a request arriving over `connection`
    pub fn new<T>(
        runtime: &EventRuntime<C, G>,
        tenant: Arc<dyn TenantPolicy>,
        connection: &T,
    ) -> Self
    where
        T: ClientConnection + ?Sized,
    {
        let ip_address = connection.remote_addr();
        Self::resolved(runtime, tenant, Event::new(), ip_address)
    }

    /// Continue from an existing record, keeping its stored address
    pub fn resume(
        runtime: &EventRuntime<C, G>,
        tenant: Arc<dyn TenantPolicy>,
        event: Event,
    ) -> Self {
        let ip_address = event.ip_address.clone();
        Self::resolved(runtime, tenant, event, ip_address)
    }

    fn resolved(
        runtime: &EventRuntime<C, G>,
        tenant: Arc<dyn TenantPolicy>,
        event: Event,
        ip_address: Option<String>,
    ) -> Self {
        let registry = runtime.registry();
        let store = registry.resolve_store(tenant.as_ref());
        let listeners = registry.resolve_listeners(tenant.as_ref());
        let tenant_id = tenant.id().to_string();
        let host_name = runtime.host().host_name();

        let mut builder = Self::from_parts(
            store,
            listeners.into(),
            tenant,
            event,
            runtime.clock().clone(),
            runtime.ids().clone(),
        );
        builder
            .realm(tenant_id.as_str())
            .ip_address(ip_address.as_deref())
            .host_name(host_name.as_str());
        builder
    }

    fn from_parts(
        store: Option<Arc<dyn EventStore>>,
        listeners: Arc<[Arc<dyn EventListener>]>,
        tenant: Arc<dyn TenantPolicy>,
        event: Event,
        clock: C,
        ids: G,
    ) -> Self {
        Self {
            store,
            listeners,
            tenant,
            event,
            clock,
            ids,
        }
    }

    /// Tenant the event belongs to
    #[doc(alias = "tenant")]
    pub fn realm<'a>(&mut self, tenant_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.tenant_id, tenant_id.into());
        self
    }

    pub fn client<'a>(&mut self, client_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.client_id, client_id.into());
        self
    }

    pub fn user<'a>(&mut self, user_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.user_id, user_id.into());
        self
    }

    pub fn session<'a>(&mut self, session_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.session_id, session_id.into());
        self
    }

    pub fn ip_address<'a>(&mut self, ip_address: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.ip_address, ip_address.into());
        self
    }

    pub fn host_name<'a>(&mut self, host_name: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.host_name, host_name.into());
        self
    }

    pub fn node_id<'a>(&mut self, node_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.node_id, node_id.into());
        self
    }

    pub fn vm_id<'a>(&mut self, vm_id: impl Into<Option<&'a str>>) -> &mut Self {
        assign(&mut self.event.vm_id, vm_id.into());
        self
    }

    pub fn event_type(&mut self, kind: EventType) -> &mut Self {
        self.event.event_type = Some(kind);
        self
    }

    /// Add a detail; absent or empty values are ignored
    pub fn detail<'a>(&mut self, key: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        let Some(value) = value.into().filter(|v| !v.is_empty()) else {
            return self;
        };
        self.event
            .details
            .get_or_insert_with(Default::default)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn remove_detail(&mut self, key: &str) -> &mut Self {
        if let Some(details) = self.event.details.as_mut() {
            details.remove(key);
        }
        self
    }

    /// The event as assembled so far
    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_event(self) -> Event {
        self.event
    }

    /// Send the event as a successful occurrence
    pub fn success(&mut self) -> DispatchReport {
        self.send()
    }

    /// Send the event as a failure
    ///
    /// The type is switched to its `_ERROR` variant first. Fails only when
    /// no type has been set, in which case nothing is sent.
    pub fn error(&mut self, message: impl Into<String>) -> Result<DispatchReport, BuilderError> {
        let Some(kind) = self.event.event_type else {
            return Err(BuilderError::MissingEventType);
        };
        if !kind.is_error() {
            self.event.event_type = Some(kind.error_variant());
        }
        self.event.error = Some(message.into());
        Ok(self.send())
    }

    fn send(&mut self) -> DispatchReport {
        self.event.timestamp = Some(self.clock.now());
        self.event.id = Some(self.ids.next());

        let mut report = DispatchReport::default();
        let event = &self.event;
        let tenant = self.tenant.id();

        if let Some(store) = &self.store {
            match event.event_type {
                Some(kind) if self.tenant.should_persist(kind) => {
                    match isolate(|| store.record(event)) {
                        Ok(()) => report.stored = true,
                        Err(reason) => {
                            tracing::error!(
                                tenant,
                                event_type = %kind,
                                error = %reason,
                                "failed to save event"
                            );
                            report.faults.push(SinkFault {
                                sink: SinkId::Store,
                                reason,
                            });
                        }
                    }
                }
                Some(_) => {}
                None => tracing::warn!(tenant, "event has no type, not saving"),
            }
        }

        for listener in self.listeners.iter() {
            match isolate(|| listener.notify(event)) {
                Ok(()) => report.notified += 1,
                Err(reason) => {
                    tracing::error!(
                        tenant,
                        listener = listener.id(),
                        event_type = event.type_name(),
                        error = %reason,
                        "failed to send event to listener"
                    );
                    report.faults.push(SinkFault {
                        sink: SinkId::Listener(listener.id().to_string()),
                        reason,
                    });
                }
            }
        }

        report
    }
}

impl<C: Clock, G: IdGen> fmt::Debug for EventBuilder<C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<&str> = self.listeners.iter().map(|l| l.id()).collect();
        f.debug_struct("EventBuilder")
            .field("tenant", &self.tenant.id())
            .field("store", &self.store.is_some())
            .field("listeners", &listeners)
            .field("event", &self.event)
            .finish()
    }
}

fn assign(field: &mut Option<String>, value: Option<&str>) {
    *field = value.map(str::to_string);
}

/// Run one sink call, turning both errors and panics into a reason string
fn isolate<E: fmt::Display>(call: impl FnOnce() -> Result<(), E>) -> Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(format!("sink panicked: {}", message))
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
