// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn one_broken_listener_among_three() {
    let world = World::new(&["audit-log", "email", "webhook"]);
    world.listener("email").set_fails("smtp unreachable");

    let mut builder = world.builder(audited_tenant(&["audit-log", "email", "webhook"]));
    builder.event_type(EventType::Register).user("user-9");
    let report = builder.success();

    assert!(report.stored);
    assert_eq!(report.notified, 2);
    let email = SinkId::Listener("email".to_string());
    let fault = report.fault(&email).map(|f| f.reason.as_str());
    assert_eq!(fault, Some("listener failed: smtp unreachable"));
    assert_eq!(world.store.calls().len(), 1);
    assert_eq!(world.listener("audit-log").calls().len(), 1);
    assert_eq!(world.listener("webhook").calls().len(), 1);
}

#[test]
fn broken_store_still_notifies_listeners() {
    let world = World::new(&["audit-log"]);
    world.store.set_fails("database offline");

    let mut builder = world.builder(audited_tenant(&["audit-log"]));
    builder.event_type(EventType::Logout);
    let report = builder.error("session_expired").unwrap();

    assert!(!report.stored);
    assert!(report.fault(&SinkId::Store).is_some());
    assert_eq!(world.listener("audit-log").calls().len(), 1);
}

#[test]
fn unknown_listener_ids_are_skipped() {
    let world = World::new(&["audit-log"]);
    let mut builder = world.builder(audited_tenant(&["missing", "audit-log"]));
    builder.event_type(EventType::Login);

    let report = builder.success();

    assert!(report.is_clean());
    assert_eq!(report.notified, 1);
}
