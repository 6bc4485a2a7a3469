// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook listener posting events as JSON

use audit_core::{Event, EventListener, ListenerError};
use std::time::Duration;
use ureq::Agent;

/// Upper bound on one delivery, connect through response
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// POSTs each event to an HTTP endpoint
///
/// Delivery runs on the caller's thread, so every request is bounded by
/// the agent's global timeout.
#[derive(Clone, Debug)]
pub struct HttpListener {
    id: String,
    endpoint: String,
    timeout: Duration,
    agent: Agent,
}

impl HttpListener {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::with_timeout(id, endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            timeout,
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl EventListener for HttpListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &Event) -> Result<(), ListenerError> {
        let body = serde_json::to_string(event)
            .map_err(|e| ListenerError::Failed(e.to_string()))?;

        self.agent
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .send(body.as_bytes())
            .map_err(|e| {
                ListenerError::Transport(format!("POST {} failed: {}", self.endpoint, e))
            })?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
