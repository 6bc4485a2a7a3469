// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener that writes every event to the tracing log

use audit_core::{Event, EventListener, ListenerError, LogLevel};

/// Target used for event records, so they can be filtered separately
pub const EVENT_TARGET: &str = "audit::events";

/// Writes events as structured log records
///
/// Successful events go out at `success_level`, failed ones at
/// `error_level`.
#[derive(Clone, Debug)]
pub struct LoggingListener {
    id: String,
    success_level: LogLevel,
    error_level: LogLevel,
}

impl LoggingListener {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success_level: LogLevel::Debug,
            error_level: LogLevel::Warn,
        }
    }

    pub fn with_levels(mut self, success_level: LogLevel, error_level: LogLevel) -> Self {
        self.success_level = success_level;
        self.error_level = error_level;
        self
    }

    fn level_for(&self, event: &Event) -> LogLevel {
        if event.is_error() {
            self.error_level
        } else {
            self.success_level
        }
    }
}

macro_rules! emit {
    ($macro:ident, $listener:expr, $event:expr, $line:expr) => {
        tracing::$macro!(
            target: EVENT_TARGET,
            listener = %$listener,
            event_id = $event.id.as_deref(),
            event_type = $event.type_name(),
            "{}",
            $line
        )
    };
}

impl EventListener for LoggingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &Event) -> Result<(), ListenerError> {
        let line = format_event(event);
        match self.level_for(event) {
            LogLevel::Trace => emit!(trace, self.id, event, line),
            LogLevel::Debug => emit!(debug, self.id, event, line),
            LogLevel::Info => emit!(info, self.id, event, line),
            LogLevel::Warn => emit!(warn, self.id, event, line),
            LogLevel::Error => emit!(error, self.id, event, line),
        }
        Ok(())
    }
}

/// Render an event as `key=value` pairs, absent fields omitted
pub fn format_event(event: &Event) -> String {
    let fields = [
        ("type", event.type_name().map(str::to_string)),
        ("tenantId", event.tenant_id.clone()),
        ("clientId", event.client_id.clone()),
        ("userId", event.user_id.clone()),
        ("sessionId", event.session_id.clone()),
        ("ipAddress", event.ip_address.clone()),
        ("error", event.error.clone()),
    ];

    let mut parts: Vec<String> = fields
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect();

    if let Some(details) = &event.details {
        parts.extend(details.iter().map(|(k, v)| format!("{}={}", k, v)));
    }

    parts.join(", ")
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
