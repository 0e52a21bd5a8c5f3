//! Server test utilities.

use crate::common::fixtures::{StaticPickups, test_systems};
use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use signcast_core::config::{AppConfig, UpdateConfig};
use signcast_directory::{MemoryDirectory, SystemDirectory, SystemId};
use signcast_server::content::{ContentSource, FilesystemContent};
use signcast_server::{AppState, create_router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub state: AppState,
    pub pickups: Arc<StaticPickups>,
    content_root: PathBuf,
    update_path: PathBuf,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a new test server with temporary content storage and a
    /// configured client update binary.
    pub async fn new() -> Self {
        Self::build(true).await
    }

    /// Create a test server without a configured update path.
    pub async fn without_update() -> Self {
        Self::build(false).await
    }

    async fn build(with_update: bool) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        let content_root = temp_dir.path().join("content");
        std::fs::create_dir_all(&content_root).expect("Failed to create content directory");

        let update_path = temp_dir.path().join("client.bin");
        if with_update {
            std::fs::write(&update_path, b"latest-client-binary")
                .expect("Failed to write update binary");
        }

        let directory: Arc<dyn SystemDirectory> = Arc::new(
            MemoryDirectory::new(test_systems()).expect("Failed to build system directory"),
        );
        let content: Arc<dyn ContentSource> = Arc::new(FilesystemContent::new(&content_root));
        let pickups = Arc::new(StaticPickups::new());

        let mut config = AppConfig::for_testing();
        if with_update {
            config.update = Some(UpdateConfig {
                path: update_path.clone(),
            });
        }

        let state = AppState::new(config, directory, content, pickups.clone());

        Self {
            state,
            pickups,
            content_root,
            update_path,
            _temp_dir: temp_dir,
        }
    }

    /// A router whose requests appear to come from `peer`.
    pub fn router_as(&self, peer: &str) -> Router {
        let peer: SocketAddr = peer.parse().expect("valid peer address");
        create_router(self.state.clone()).layer(MockConnectInfo(peer))
    }

    /// Write a content file for a system.
    pub async fn write_content(&self, system: SystemId, name: &str, content: &[u8]) {
        let path = self.content_root.join(system.to_string()).join(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .expect("Failed to create content subdirectory");
        }
        tokio::fs::write(&path, content)
            .await
            .expect("Failed to write content file");
    }

    /// Bytes of the configured client update binary.
    pub fn update_binary(&self) -> Vec<u8> {
        std::fs::read(&self.update_path).expect("Failed to read update binary")
    }
}
