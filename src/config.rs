//! Runtime settings.
//!
//! Defaults first, then environment overrides. `APP__BIND_ADDR` wins over
//! `BIND_ADDR` when both are set.

use std::net::SocketAddr;

use crate::error::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_owned() }
    }
}

impl Settings {
    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(v) = lookup("BIND_ADDR") {
            settings.bind_addr = v;
        }
        if let Some(v) = lookup("APP__BIND_ADDR") {
            settings.bind_addr = v;
        }

        settings
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.bind_addr.trim().parse()?)
    }
}

/// Settings from the process environment.
pub fn load_settings() -> Settings {
    Settings::from_lookup(|key| std::env::var(key).ok())
}
