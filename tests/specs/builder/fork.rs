// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn forks_share_context_but_diverge_afterwards() {
    let world = World::new(&["log"]);
    let mut base = world.builder(audited_tenant(&["log"]));
    base.event_type(EventType::Login)
        .user("user-1")
        .session("sess-1")
        .detail("username", "alice");

    let mut fork = base.clone();
    fork.event_type(EventType::UpdatePassword)
        .detail("reason", "expired");
    base.remove_detail("username");

    assert_eq!(fork.event().user_id, base.event().user_id);
    assert_eq!(fork.event().session_id, base.event().session_id);
    assert_eq!(fork.event().detail("username"), Some("alice"));
    assert_eq!(base.event().detail("username"), None);
    assert_eq!(base.event().detail("reason"), None);

    base.success();
    fork.error("password_policy").unwrap();

    let sent = world.listener("log").calls();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].event_type, Some(EventType::Login));
    assert_eq!(sent[1].event_type, Some(EventType::UpdatePasswordError));
    assert!(sent[0].error.is_none());
    assert!(base.event().error.is_none());
}

#[test]
fn resumed_events_keep_their_address() {
    let world = World::new(&["log"]);
    let mut original = world.builder(audited_tenant(&["log"]));
    original.event_type(EventType::Login).user("user-1");
    original.success();
    let stored = world.store.calls().remove(0);

    let tenant = Arc::new(audited_tenant(&["log"]));
    let mut resumed = EventBuilder::resume(&world.runtime, tenant, stored);
    resumed.event_type(EventType::Logout);
    resumed.success();

    let sent = world.listener("log").calls();
    assert_eq!(sent[1].ip_address.as_deref(), Some("203.0.113.5"));
    assert_eq!(sent[1].user_id.as_deref(), Some("user-1"));
    assert_ne!(sent[0].id, sent[1].id);
}
