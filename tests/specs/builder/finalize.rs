// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;
use audit_core::{BuilderError, Clock};
use chrono::Duration;

#[test]
fn success_stamps_time_of_call() {
    let world = World::new(&["log"]);
    let mut builder = world.builder(audited_tenant(&["log"]));
    builder
        .event_type(EventType::Login)
        .user("user-1")
        .client("web-app")
        .detail("username", "alice");

    world.clock.advance(Duration::minutes(3));
    let expected = world.clock.now();
    builder.success();

    let sent = &world.listener("log").calls()[0];
    assert_eq!(sent.timestamp, Some(expected));
    assert_eq!(sent.id.as_deref(), Some("spec-1"));
    assert_eq!(sent.host_name.as_deref(), Some("spec-host"));
    assert_eq!(sent.ip_address.as_deref(), Some("203.0.113.5"));
}

#[test]
fn error_without_type_reaches_no_sink() {
    let world = World::new(&["log", "webhook"]);
    let mut builder = world.builder(audited_tenant(&["log", "webhook"]));
    builder.user("user-1");

    assert_eq!(builder.error("boom"), Err(BuilderError::MissingEventType));
    assert!(world.store.calls().is_empty());
    assert!(world.listeners.iter().all(|l| l.calls().is_empty()));
}

#[test]
fn login_error_is_sent_as_login_error() {
    let world = World::new(&["log"]);
    let mut builder = world.builder(audited_tenant(&["log"]));
    builder.event_type(EventType::Login);

    builder.error("boom").unwrap();

    let stored = world.store.calls();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].event_type, Some(EventType::LoginError));
    assert_eq!(stored[0].error.as_deref(), Some("boom"));
    assert_eq!(world.listener("log").calls(), stored);
}

#[test]
fn empty_details_are_never_allocated() {
    let world = World::new(&[]);
    let mut builder = world.builder(audited_tenant(&[]));
    builder.detail("reason", None).detail("reason", "");
    assert!(builder.event().details.is_none());

    builder.detail("reason", "expired");
    assert_eq!(builder.event().detail("reason"), Some("expired"));
}
