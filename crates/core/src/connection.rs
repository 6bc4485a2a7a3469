// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Originating connection of the request being audited

use std::net::{IpAddr, SocketAddr};

/// Source of the client's address for a fresh event
pub trait ClientConnection {
    /// Remote address, if known
    fn remote_addr(&self) -> Option<String>;
}

impl ClientConnection for SocketAddr {
    fn remote_addr(&self) -> Option<String> {
        Some(self.ip().to_string())
    }
}

impl ClientConnection for IpAddr {
    fn remote_addr(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ClientConnection for str {
    fn remote_addr(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ClientConnection for String {
    fn remote_addr(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// Connection with no known address (internal or scheduled work)
#[derive(Clone, Copy, Debug, Default)]
pub struct Unaddressed;

impl ClientConnection for Unaddressed {
    fn remote_addr(&self) -> Option<String> {
        None
    }
}
