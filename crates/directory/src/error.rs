//! Error types for the system directory.

use crate::models::SystemId;
use std::net::IpAddr;
use thiserror::Error;

/// Directory error type.
///
/// Lookup failures are values, not control flow: callers match on the kind
/// and the HTTP layer maps kinds to status codes centrally.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no such system: {0}")]
    NotFound(String),

    #[error("system {0} is not deployed")]
    NotDeployed(SystemId),

    #[error("explicit-ID resolution denied for peer {0}")]
    Forbidden(IpAddr),

    #[error("directory I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory data error: {0}")]
    Data(String),
}

/// Result type alias for directory operations.
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
