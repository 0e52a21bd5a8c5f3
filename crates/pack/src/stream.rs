//! Archive stream emitter.

use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Content type of the emitted archive stream.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/x-xz";

/// Chunked byte stream over a finished archive's backing file.
///
/// Yields chunks of at most the configured size until the backing file is
/// exhausted. A mid-stream read failure is terminal; any retry starts from a
/// fresh archive. Dropping the stream releases the temp backing.
pub struct ArchiveStream {
    inner: ReaderStream<File>,
}

impl ArchiveStream {
    pub(crate) fn new(file: File, chunk_size: usize) -> Self {
        Self {
            inner: ReaderStream::with_capacity(file, chunk_size),
        }
    }
}

impl Stream for ArchiveStream {
    type Item = std::io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
