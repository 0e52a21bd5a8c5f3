//! Configuration types shared across crates.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Chunk size in bytes for streaming archive responses.
    #[serde(default = "default_stream_chunk_size")]
    pub stream_chunk_size: usize,
    /// Networks from which explicit-ID resolution is permitted.
    /// Requests from outside these networks may only resolve themselves
    /// by their source address.
    #[serde(default = "default_intranet")]
    pub intranet: Vec<IpNet>,
    /// Enable request tracing.
    #[serde(default)]
    pub enable_tracing: bool,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_stream_chunk_size() -> usize {
    crate::DEFAULT_STREAM_CHUNK_SIZE
}

fn default_intranet() -> Vec<IpNet> {
    vec![
        "10.200.200.0/24".parse().expect("valid network literal"),
        "fdbc:83e9:4512:ea57::/64"
            .parse()
            .expect("valid network literal"),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            stream_chunk_size: default_stream_chunk_size(),
            intranet: default_intranet(),
            enable_tracing: false,
        }
    }
}

impl ServerConfig {
    /// Validate server configuration invariants.
    /// Returns warnings for settings that are allowed but surprising,
    /// and errors for settings that would misbehave at runtime.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        if self.stream_chunk_size == 0 {
            return Err("server.stream_chunk_size cannot be 0".to_string());
        }

        if self.stream_chunk_size > crate::MAX_STREAM_CHUNK_SIZE {
            return Err(format!(
                "server.stream_chunk_size {} exceeds maximum {}",
                self.stream_chunk_size,
                crate::MAX_STREAM_CHUNK_SIZE
            ));
        }

        if self.intranet.is_empty() {
            warnings.push(
                "server.intranet is empty; explicit-ID resolution will be \
                 rejected for every caller"
                    .to_string(),
            );
        }

        Ok(warnings)
    }
}

/// Content source configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentConfig {
    /// Serve per-system file trees from a local directory.
    Filesystem {
        /// Root directory; each system's files live under `<root>/<system-id>/`.
        path: PathBuf,
    },
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::Filesystem {
            path: PathBuf::from("./data/content"),
        }
    }
}

/// System directory configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DirectoryConfig {
    /// Systems loaded from a JSON file into memory.
    File {
        /// Path to the systems JSON file.
        path: PathBuf,
    },
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::File {
            path: PathBuf::from("./data/systems.json"),
        }
    }
}

/// Client self-update configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Path to the latest client binary served to terminals.
    pub path: PathBuf,
}

/// Complete application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Content source configuration.
    #[serde(default)]
    pub content: ContentConfig,
    /// System directory configuration.
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Client self-update configuration (optional).
    pub update: Option<UpdateConfig>,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Uses filesystem content and a file-backed
    /// directory, neither of which is expected to exist.
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            content: ContentConfig::default(),
            directory: DirectoryConfig::default(),
            update: None,
        }
    }
}
