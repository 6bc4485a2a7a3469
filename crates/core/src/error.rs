// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced to callers of the event builder

use thiserror::Error;

/// Misuse of the builder
///
/// Sink and environment failures never appear here; they are absorbed
/// during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("attempted to define event error without first setting the event type")]
    MissingEventType,
}
