// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;
use audit_storage::EventLog;

#[test]
fn allow_list_replaces_default_policy() {
    let world = World::new(&[]);
    let tenant = audited_tenant(&[]).with_enabled_type(EventType::LoginError);

    let mut login = world.builder(tenant.clone());
    login.event_type(EventType::Login).success();
    assert!(world.store.calls().is_empty());

    let mut failed = world.builder(tenant);
    failed.event_type(EventType::LoginError).success();
    let stored = world.store.calls();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].event_type, Some(EventType::LoginError));
}

#[test]
fn disabled_tenants_never_persist() {
    let world = World::new(&["audit-log"]);
    let tenant = TenantConfig::new("acme")
        .with_listener("audit-log")
        .with_enabled_type(EventType::Login);

    for _ in 0..2 {
        let mut builder = world.builder(tenant.clone());
        builder.event_type(EventType::Login).success();
        let mut builder = world.builder(tenant.clone());
        builder.event_type(EventType::Register);
        builder.error("username_in_use").unwrap();
    }

    assert!(world.store.calls().is_empty());
    assert_eq!(world.listener("audit-log").calls().len(), 4);
}

#[test]
fn durable_log_receives_persisted_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let log = Arc::new(EventLog::open(&path).unwrap());

    let runtime = EventRuntime::new(SinkRegistry::new().with_store(log.clone()))
        .with_host(Arc::new(FixedHost::new("spec-host")));
    let tenant = Arc::new(audited_tenant(&[]));

    for kind in [EventType::Login, EventType::RefreshToken, EventType::Logout] {
        let mut builder = EventBuilder::new(&runtime, tenant.clone(), "198.51.100.4");
        builder.event_type(kind).success();
    }

    let types: Vec<_> = EventLog::replay_events(&path)
        .unwrap()
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    similar_asserts::assert_eq!(types, vec![Some(EventType::Login), Some(EventType::Logout)]);
    assert_eq!(log.sequence(), 2);
}
