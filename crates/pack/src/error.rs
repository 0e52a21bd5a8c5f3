//! Error types for the packager.

use thiserror::Error;

/// Packager error type.
#[derive(Debug, Error)]
pub enum PackError {
    /// Retrieval of an upstream file failed. The request is abandoned as a
    /// whole; a partial archive would desynchronize client and server.
    #[error("content retrieval failed for {name}: {message}")]
    Content { name: String, message: String },

    /// An archive record could not be encoded (e.g., a name the tar header
    /// cannot carry).
    #[error("cannot archive entry {name}: {source}")]
    Entry {
        name: String,
        source: std::io::Error,
    },

    /// Temp-file allocation or write failure. Fatal for the request.
    #[error("archive storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] signcast_core::Error),
}

/// Result type alias for packager operations.
pub type PackResult<T> = std::result::Result<T, PackError>;
