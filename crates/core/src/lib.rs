//! Core domain types and shared logic for the signcast content sync server.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Content fingerprints (SHA-256)
//! - File entries as produced by the upstream aggregator
//! - Client and outbound manifests
//! - Application configuration

pub mod config;
pub mod error;
pub mod file;
pub mod hash;
pub mod manifest;

pub use error::{Error, Result};
pub use file::FileEntry;
pub use hash::{Fingerprint, FingerprintHasher};
pub use manifest::{ClientManifest, FileManifest, MANIFEST_ENTRY_NAME};

/// Default chunk size for streaming archive responses: 4 KiB
pub const DEFAULT_STREAM_CHUNK_SIZE: usize = 4096;

/// Maximum chunk size for streaming archive responses: 1 MiB
pub const MAX_STREAM_CHUNK_SIZE: usize = 1024 * 1024;
