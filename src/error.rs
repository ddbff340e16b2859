//! Unified error type.

use std::fmt;
use std::net::AddrParseError;

/// The error type returned by sortlist's fallible operations.
///
/// Malformed query state is never an error: every page falls back to a
/// default instead. This type only surfaces infrastructure failures and a
/// parameter source that went away before delivering its value.
#[derive(Debug)]
pub enum Error {
    /// Binding to a port or accepting a connection failed.
    Io(std::io::Error),
    /// The configured bind address is not a valid `host:port`.
    Addr(AddrParseError),
    /// A [`Deferred`](crate::Deferred) was dropped by its producer before it
    /// resolved.
    Unresolved,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Addr(e) => write!(f, "invalid bind address: {e}"),
            Self::Unresolved => f.write_str("search params were never resolved"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Addr(e) => Some(e),
            Self::Unresolved => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<AddrParseError> for Error {
    fn from(e: AddrParseError) -> Self {
        Self::Addr(e)
    }
}
