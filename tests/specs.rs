// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specifications for audit event dispatch.
//!
//! These tests wire real core types to fake and durable sinks and check
//! what each sink observes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// builder/
#[path = "specs/builder/finalize.rs"]
mod builder_finalize;
#[path = "specs/builder/fork.rs"]
mod builder_fork;

// dispatch/
#[path = "specs/dispatch/isolation.rs"]
mod dispatch_isolation;
#[path = "specs/dispatch/persistence.rs"]
mod dispatch_persistence;
