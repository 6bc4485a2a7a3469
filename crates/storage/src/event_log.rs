// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only JSON-lines event log

use audit_core::{Event, EventStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur in event log operations
#[derive(Debug, Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LogError> for StoreError {
    fn from(e: LogError) -> Self {
        match e {
            LogError::Io(e) => StoreError::Io(e),
            LogError::Json(e) => StoreError::Serialize(e),
        }
    }
}

/// One line of the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    pub event: Event,
}

struct Writer {
    file: File,
    sequence: u64,
}

/// Durable event store backed by a JSON-lines file
pub struct EventLog {
    path: PathBuf,
    writer: Mutex<Writer>,
}

impl EventLog {
    /// Open or create a log at the given path
    pub fn open(path: &Path) -> Result<Self, LogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;

        // Continue numbering after existing entries
        let reader = BufReader::new(File::open(path)?);
        let mut sequence = 0;
        for line in reader.lines() {
            if !line?.trim().is_empty() {
                sequence += 1;
            }
        }

        tracing::debug!(path = %path.display(), sequence, "opened event log");

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(Writer { file, sequence }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an event, returning its sequence number
    pub fn append(&self, event: &Event) -> Result<u64, LogError> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let entry = LogEntry {
            seq: writer.sequence + 1,
            event: event.clone(),
        };
        let line = serde_json::to_string(&entry)?;
        writeln!(writer.file, "{}", line)?;
        writer.file.sync_all()?;
        writer.sequence = entry.seq;
        Ok(entry.seq)
    }

    /// Sequence number of the last appended entry
    pub fn sequence(&self) -> u64 {
        self.writer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .sequence
    }

    /// Read every entry from a log; a missing file is an empty log
    pub fn replay(path: &Path) -> Result<Vec<LogEntry>, LogError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }

        Ok(entries)
    }

    /// Read just the events from a log
    pub fn replay_events(path: &Path) -> Result<Vec<Event>, LogError> {
        Ok(Self::replay(path)?.into_iter().map(|e| e.event).collect())
    }
}

impl EventStore for EventLog {
    fn record(&self, event: &Event) -> Result<(), StoreError> {
        self.append(event)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "event_log_tests.rs"]
mod tests;
