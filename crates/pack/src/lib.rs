//! Differential file-sync packager.
//!
//! Given the current file set and the fingerprints a client already reported,
//! this crate produces a tar.xz archive containing only the changed files
//! plus a trailing `manifest.json` listing every current file name, and
//! exposes the result as a chunked byte stream:
//!
//! - [`ManifestDiffer`] decides which files need transmission
//! - [`ArchiveBuilder`] serializes them into a temp-file-backed tar.xz
//! - [`ArchiveStream`] yields the finished archive chunk-wise
//!
//! The packager is pure glue between its inputs: it performs no logging, no
//! retries, and no caching; failures surface to the caller untouched.

pub mod archive;
pub mod differ;
pub mod error;
pub mod stream;

pub use archive::{ArchiveBuilder, DiffArchive};
pub use differ::ManifestDiffer;
pub use error::{PackError, PackResult};
pub use stream::{ARCHIVE_CONTENT_TYPE, ArchiveStream};

use futures::{Stream, StreamExt};
use signcast_core::{ClientManifest, FileEntry};

/// A boxed lazy sequence of file entries, as produced by an upstream
/// content aggregator.
pub type FileEntryStream =
    std::pin::Pin<Box<dyn Stream<Item = PackResult<FileEntry>> + Send>>;

/// Compute the delta of `files` against the client's fingerprint set and
/// pack the changed files into a finished archive.
///
/// All-or-nothing: an error from the upstream sequence or from archive
/// storage abandons the temp backing without yielding a partial stream.
pub async fn pack_changed_files<S>(
    mut files: S,
    known: ClientManifest,
) -> PackResult<DiffArchive>
where
    S: Stream<Item = PackResult<FileEntry>> + Unpin,
{
    let mut builder = ArchiveBuilder::new(known).await?;
    while let Some(entry) = files.next().await {
        builder.add(&entry?).await?;
    }
    builder.finish().await
}
