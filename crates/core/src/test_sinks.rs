// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording sinks shared by this crate's unit tests

use crate::event::Event;
use crate::sink::{EventListener, EventStore, ListenerError, StoreError};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Accept,
    Fail,
    Panic,
}

#[derive(Clone)]
pub struct RecordingStore {
    pub events: Arc<Mutex<Vec<Event>>>,
    mode: Mode,
}

impl RecordingStore {
    pub fn new(mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            events: Arc::default(),
            mode,
        })
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventStore for RecordingStore {
    fn record(&self, event: &Event) -> Result<(), StoreError> {
        match self.mode {
            Mode::Accept => {
                self.events.lock().unwrap().push(event.clone());
                Ok(())
            }
            Mode::Fail => Err(StoreError::Unavailable("disk full".to_string())),
            Mode::Panic => panic!("store exploded"),
        }
    }
}

pub struct RecordingListener {
    id: String,
    pub events: Mutex<Vec<Event>>,
    mode: Mode,
}

impl RecordingListener {
    pub fn new(id: &str, mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            events: Mutex::default(),
            mode,
        })
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &Event) -> Result<(), ListenerError> {
        match self.mode {
            Mode::Accept => {
                self.events.lock().unwrap().push(event.clone());
                Ok(())
            }
            Mode::Fail => Err(ListenerError::Failed(format!("{} is down", self.id))),
            Mode::Panic => panic!("{} exploded", self.id),
        }
    }
}

/// In-memory writer for capturing formatted log output
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a scoped subscriber and return what it logged
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
