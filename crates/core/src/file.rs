//! File entry types.

use crate::hash::Fingerprint;
use bytes::Bytes;
use std::fmt;

/// A named file produced by the upstream content aggregator.
///
/// Entries are produced lazily as a fallible sequence and consumed once by
/// the differ; the content bytes are cheaply cloneable.
#[derive(Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Entry name, carried verbatim into the archive (may be path-like).
    pub name: String,
    /// The file's content.
    pub content: Bytes,
}

impl FileEntry {
    /// Create a new file entry.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Compute the content fingerprint of this entry.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(&self.content)
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEntry")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}
