//! Content source seam.
//!
//! The presentation aggregator of the production deployment (presentation
//! XML, media attachments, feed snapshots) is an external collaborator. The
//! server only requires a lazy, fallible sequence of file entries per
//! system; [`FilesystemContent`] serves per-system file trees from disk.

use async_trait::async_trait;
use futures::{StreamExt, stream};
use signcast_core::FileEntry;
use signcast_directory::SystemId;
use signcast_pack::{FileEntryStream, PackError, PackResult};
use std::path::{Path, PathBuf};

/// Supplier of the current file set for a system.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The current file set for a system, as a lazy fallible sequence.
    /// Entry names are relative paths within the system's content tree.
    async fn files_for(&self, system: SystemId) -> PackResult<FileEntryStream>;
}

/// Content source backed by a local directory tree.
///
/// Each system's files live under `<root>/<system-id>/`. A system without a
/// content directory has an empty file set.
pub struct FilesystemContent {
    root: PathBuf,
}

impl FilesystemContent {
    /// Create a new filesystem content source.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the system's content tree, returning (entry name, path) pairs
    /// sorted by name so the manifest order is stable across requests.
    async fn collect_files(&self, dir: &Path) -> std::io::Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&current).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    let name = path
                        .strip_prefix(dir)
                        .map_err(std::io::Error::other)?
                        .to_string_lossy()
                        .into_owned();
                    files.push((name, path));
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl ContentSource for FilesystemContent {
    async fn files_for(&self, system: SystemId) -> PackResult<FileEntryStream> {
        let dir = self.root.join(system.to_string());
        let files = self.collect_files(&dir).await?;

        let entries = stream::iter(files).then(|(name, path)| async move {
            let content = tokio::fs::read(&path)
                .await
                .map_err(|e| PackError::Content {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            Ok(FileEntry::new(name, content))
        });

        Ok(Box::pin(entries))
    }
}
