//! Differential archive builder.
//!
//! Serializes the changed-file set plus the trailing manifest entry into a
//! tar-structured byte stream wrapped in an xz container. The archive is
//! written to an anonymous temp file, fully flushed, then rewound for
//! streaming; the backing storage is released when the archive (or the
//! stream derived from it) is dropped.

use crate::differ::ManifestDiffer;
use crate::error::{PackError, PackResult};
use crate::stream::ArchiveStream;
use async_compression::tokio::write::XzEncoder;
use signcast_core::{ClientManifest, FileEntry, FileManifest, MANIFEST_ENTRY_NAME};
use std::io::SeekFrom;
use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

const TAR_BLOCK_SIZE: usize = 512;
const ZERO_BLOCK: [u8; TAR_BLOCK_SIZE] = [0u8; TAR_BLOCK_SIZE];

/// Builder for one differential sync archive.
pub struct ArchiveBuilder {
    encoder: XzEncoder<File>,
    differ: ManifestDiffer,
    entry_count: u64,
}

impl ArchiveBuilder {
    /// Create a builder backed by a fresh anonymous temp file.
    pub async fn new(known: ClientManifest) -> PackResult<Self> {
        let file = File::from_std(tempfile::tempfile()?);
        Ok(Self {
            encoder: XzEncoder::new(file),
            differ: ManifestDiffer::new(known),
            entry_count: 0,
        })
    }

    /// Offer one file.
    ///
    /// The name is recorded in the outbound manifest unconditionally; the
    /// bytes are written only when the client does not already have them.
    pub async fn add(&mut self, entry: &FileEntry) -> PackResult<()> {
        if self.differ.admit(entry) {
            self.append_record(&entry.name, &entry.content).await?;
            self.entry_count += 1;
        }
        Ok(())
    }

    /// Number of file entries written so far (excluding the manifest entry).
    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    /// Append the trailing manifest entry, finalize compression and rewind
    /// the backing file for streaming.
    pub async fn finish(mut self) -> PackResult<DiffArchive> {
        let manifest = self.differ.take_manifest();
        let manifest_json = manifest.to_json()?;
        self.append_record(MANIFEST_ENTRY_NAME, &manifest_json)
            .await?;

        // End-of-archive marker: two zero blocks.
        self.encoder.write_all(&ZERO_BLOCK).await?;
        self.encoder.write_all(&ZERO_BLOCK).await?;
        self.encoder.shutdown().await?;

        let mut file = self.encoder.into_inner();
        file.flush().await?;
        let size = file.metadata().await?.len();
        file.seek(SeekFrom::Start(0)).await?;

        Ok(DiffArchive {
            file,
            manifest,
            entry_count: self.entry_count,
            size,
        })
    }

    /// Write one tar record: header, content, zero padding to the block
    /// boundary. The declared size in the header always matches the bytes
    /// written because records are emitted from complete byte slices.
    async fn append_record(&mut self, name: &str, data: &[u8]) -> PackResult<()> {
        let mut header = tar::Header::new_gnu();
        header.set_path(name).map_err(|e| PackError::Entry {
            name: name.to_string(),
            source: e,
        })?;
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(0);
        header.set_cksum();

        self.encoder.write_all(header.as_bytes()).await?;
        self.encoder.write_all(data).await?;

        let padding = (TAR_BLOCK_SIZE - data.len() % TAR_BLOCK_SIZE) % TAR_BLOCK_SIZE;
        if padding > 0 {
            self.encoder.write_all(&ZERO_BLOCK[..padding]).await?;
        }
        Ok(())
    }
}

/// A finished, fully flushed sync archive, rewound and ready to stream.
pub struct DiffArchive {
    file: File,
    manifest: FileManifest,
    entry_count: u64,
    size: u64,
}

impl DiffArchive {
    /// Whether the change-set was empty (the archive holds only the
    /// manifest entry). Callers use this to short-circuit with a
    /// "no update necessary" response instead of emitting the archive.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Number of file entries in the archive (excluding the manifest entry).
    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    /// The outbound manifest carried in the trailing `manifest.json` entry.
    pub fn manifest(&self) -> &FileManifest {
        &self.manifest
    }

    /// Size of the compressed archive in bytes.
    pub fn compressed_size(&self) -> u64 {
        self.size
    }

    /// Consume the archive and expose it as a chunked byte stream.
    pub fn into_stream(self, chunk_size: usize) -> ArchiveStream {
        ArchiveStream::new(self.file, chunk_size)
    }
}

impl std::fmt::Debug for DiffArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffArchive")
            .field("entry_count", &self.entry_count)
            .field("manifest_len", &self.manifest.len())
            .field("compressed_size", &self.size)
            .finish()
    }
}
