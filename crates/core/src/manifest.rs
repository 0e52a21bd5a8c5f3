//! Client and outbound manifest types.

use crate::hash::Fingerprint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name of the manifest entry appended to every sync archive.
pub const MANIFEST_ENTRY_NAME: &str = "manifest.json";

/// The set of fingerprints a client already possesses.
///
/// Decoded from the request body as a JSON array of hex digests. An absent or
/// empty body means "the client has nothing" and every file is transmitted.
/// The set is immutable for the duration of one request and has no ordering.
#[derive(Clone, Debug, Default)]
pub struct ClientManifest(HashSet<Fingerprint>);

impl ClientManifest {
    /// Create an empty client manifest (treat all files as new).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse from a JSON request body.
    ///
    /// An empty body decodes to the empty set. Invalid JSON or non-hex array
    /// elements are input errors, not silently dropped entries.
    pub fn from_json_body(body: &[u8]) -> crate::Result<Self> {
        if body.is_empty() {
            return Ok(Self::empty());
        }
        let digests: Vec<String> = serde_json::from_slice(body)
            .map_err(|e| crate::Error::InvalidClientManifest(e.to_string()))?;
        let mut fingerprints = HashSet::with_capacity(digests.len());
        for digest in &digests {
            fingerprints.insert(Fingerprint::from_hex(digest)?);
        }
        Ok(Self(fingerprints))
    }

    /// Build from an iterator of fingerprints.
    pub fn from_fingerprints(fingerprints: impl IntoIterator<Item = Fingerprint>) -> Self {
        Self(fingerprints.into_iter().collect())
    }

    /// Whether the client already has content with this fingerprint.
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.0.contains(fingerprint)
    }

    /// Number of fingerprints the client reported.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the client reported nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The ordered list of all current file names, emitted inside every archive
/// as the trailing `manifest.json` entry so the client can reconcile its
/// local cache even for files that were skipped as unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileManifest(Vec<String>);

impl FileManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file name. Input order is preserved.
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// The recorded names, in input order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no names were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to the JSON array carried in `manifest.json`.
    pub fn to_json(&self) -> crate::Result<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(|e| crate::Error::Serialization(e.to_string()))
    }

    /// Deserialize from the JSON array carried in `manifest.json`.
    pub fn from_json(json: &[u8]) -> crate::Result<Self> {
        let names = serde_json::from_slice(json)
            .map_err(|e| crate::Error::Serialization(e.to_string()))?;
        Ok(Self(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_manifest_empty_body() {
        let manifest = ClientManifest::from_json_body(b"").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_client_manifest_empty_array() {
        let manifest = ClientManifest::from_json_body(b"[]").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_client_manifest_contains() {
        let fingerprint = Fingerprint::compute(b"hello");
        let body = serde_json::to_vec(&vec![fingerprint.to_hex()]).unwrap();
        let manifest = ClientManifest::from_json_body(&body).unwrap();

        assert_eq!(manifest.len(), 1);
        assert!(manifest.contains(&fingerprint));
        assert!(!manifest.contains(&Fingerprint::compute(b"world")));
    }

    #[test]
    fn test_client_manifest_normalizes_case() {
        let fingerprint = Fingerprint::compute(b"hello");
        let body = serde_json::to_vec(&vec![fingerprint.to_hex().to_uppercase()]).unwrap();
        let manifest = ClientManifest::from_json_body(&body).unwrap();
        assert!(manifest.contains(&fingerprint));
    }

    #[test]
    fn test_client_manifest_rejects_bad_entries() {
        assert!(ClientManifest::from_json_body(b"{\"not\":\"array\"}").is_err());
        assert!(ClientManifest::from_json_body(b"[\"zz\"]").is_err());
    }

    #[test]
    fn test_file_manifest_preserves_order() {
        let mut manifest = FileManifest::new();
        manifest.push("b.txt");
        manifest.push("a.txt");

        let json = manifest.to_json().unwrap();
        let decoded = FileManifest::from_json(&json).unwrap();
        assert_eq!(decoded.names(), ["b.txt", "a.txt"]);
    }
}
