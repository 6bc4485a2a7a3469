// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host identity used to stamp events with the emitting machine
//!
//! Resolution has two stages: a primary lookup that may fail, and a
//! fallback that always produces a best-effort name. Builders only ever
//! call [`HostIdentity::host_name`], which cannot fail.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors from the primary host name lookup
#[derive(Debug, Error)]
pub enum HostError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("host name is empty")]
    Empty,
}

/// Resolves the local host name
pub trait HostIdentity: Send + Sync {
    /// Primary lookup; allowed to fail
    fn lookup(&self) -> Result<String, HostError>;

    /// Best-effort name used when the lookup fails
    fn fallback(&self) -> String;

    /// Resolve the host name, routing lookup failures to the fallback
    fn host_name(&self) -> String {
        match self.lookup() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(error = %e, "host lookup failed, using fallback name");
                self.fallback()
            }
        }
    }
}

const HOSTNAME_SOURCES: &[&str] = &["/proc/sys/kernel/hostname", "/etc/hostname"];

/// Host identity backed by the operating system
#[derive(Debug)]
pub struct SystemHost {
    sources: Vec<PathBuf>,
    cached_fallback: OnceLock<String>,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::with_sources(HOSTNAME_SOURCES.iter().map(PathBuf::from))
    }

    /// Read the host name from the given files, first non-empty wins
    pub fn with_sources(sources: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            cached_fallback: OnceLock::new(),
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

fn read_name(path: &Path) -> Result<String, HostError> {
    let name = std::fs::read_to_string(path)?.trim().to_string();
    if name.is_empty() {
        return Err(HostError::Empty);
    }
    Ok(name)
}

impl HostIdentity for SystemHost {
    fn lookup(&self) -> Result<String, HostError> {
        let mut last = HostError::Empty;
        for source in &self.sources {
            match read_name(source) {
                Ok(name) => return Ok(name),
                Err(e) => last = e,
            }
        }
        Err(last)
    }

    fn fallback(&self) -> String {
        self.cached_fallback
            .get_or_init(|| {
                ["HOSTNAME", "COMPUTERNAME"]
                    .iter()
                    .filter_map(|var| std::env::var(var).ok())
                    .map(|name| name.trim().to_string())
                    .find(|name| !name.is_empty())
                    .unwrap_or_else(|| "localhost".to_string())
            })
            .clone()
    }
}

/// Host identity with a fixed name
#[derive(Clone, Debug)]
pub struct FixedHost(pub String);

impl FixedHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostIdentity for FixedHost {
    fn lookup(&self) -> Result<String, HostError> {
        Ok(self.0.clone())
    }

    fn fallback(&self) -> String {
        self.0.clone()
    }
}

/// Host identity whose primary lookup always fails
#[derive(Clone, Debug)]
pub struct FailingHost {
    fallback: String,
}

impl FailingHost {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }
}

impl HostIdentity for FailingHost {
    fn lookup(&self) -> Result<String, HostError> {
        Err(HostError::Empty)
    }

    fn fallback(&self) -> String {
        self.fallback.clone()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
