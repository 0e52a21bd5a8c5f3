//! Client self-update endpoint.
//!
//! Terminals periodically report the fingerprint and modification time of
//! their installed client binary; the server answers with the latest binary
//! iff it is newer, and 204 No Content otherwise.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use signcast_core::Fingerprint;
use std::path::Path;
use time::OffsetDateTime;

/// Status report a terminal posts about its installed client binary.
#[derive(Debug, Deserialize)]
pub struct ClientRelease {
    /// Hex SHA-256 digest of the installed binary.
    pub sha256sum: String,
    /// Modification time of the installed binary, unix seconds.
    pub mtime: i64,
}

/// Release metadata of a client binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub fingerprint: Fingerprint,
    pub modified: OffsetDateTime,
}

impl ReleaseInfo {
    /// Two releases are the same iff their fingerprints match; otherwise the
    /// one with the later modification time is newer.
    pub fn is_newer_than(&self, other: &ReleaseInfo) -> bool {
        self.fingerprint != other.fingerprint && self.modified > other.modified
    }
}

/// Load release info and content for a binary on disk.
pub async fn load_release(path: &Path) -> std::io::Result<(ReleaseInfo, Vec<u8>)> {
    let content = tokio::fs::read(path).await?;
    let modified = tokio::fs::metadata(path).await?.modified()?;
    let info = ReleaseInfo {
        fingerprint: Fingerprint::compute(&content),
        modified: OffsetDateTime::from(modified),
    };
    Ok((info, content))
}

/// POST /v1/update - Return an update of the client binary iff available.
pub async fn check_update(
    State(state): State<AppState>,
    Json(report): Json<ClientRelease>,
) -> ApiResult<Response> {
    let Some(update) = &state.config.update else {
        return Err(ApiError::Internal(
            "client update path not configured".to_string(),
        ));
    };

    let (latest, content) = load_release(&update.path).await.map_err(|e| {
        ApiError::Internal(format!("latest client binary unavailable: {e}"))
    })?;

    let current = ReleaseInfo {
        fingerprint: Fingerprint::from_hex(&report.sha256sum)?,
        modified: OffsetDateTime::from_unix_timestamp(report.mtime)
            .map_err(|e| ApiError::BadRequest(format!("invalid mtime: {e}")))?,
    };

    if latest.is_newer_than(&current) {
        tracing::info!(
            latest = %latest.fingerprint,
            reported = %current.fingerprint,
            "serving client update"
        );
        return Ok((
            StatusCode::OK,
            [(CONTENT_TYPE, "application/octet-stream")],
            Body::from(content),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn release(content: &[u8], modified: OffsetDateTime) -> ReleaseInfo {
        ReleaseInfo {
            fingerprint: Fingerprint::compute(content),
            modified,
        }
    }

    #[test]
    fn test_same_fingerprint_is_never_newer() {
        let older = release(b"v1", datetime!(2026-01-01 00:00 UTC));
        let newer = release(b"v1", datetime!(2026-06-01 00:00 UTC));
        assert!(!newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&newer));
    }

    #[test]
    fn test_later_different_release_is_newer() {
        let old = release(b"v1", datetime!(2026-01-01 00:00 UTC));
        let new = release(b"v2", datetime!(2026-06-01 00:00 UTC));
        assert!(new.is_newer_than(&old));
        assert!(!old.is_newer_than(&new));
    }

    #[tokio::test]
    async fn test_load_release_reads_fingerprint() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("client.bin");
        tokio::fs::write(&path, b"binary").await.unwrap();

        let (info, content) = load_release(&path).await.unwrap();
        assert_eq!(content, b"binary");
        assert_eq!(info.fingerprint, Fingerprint::compute(b"binary"));
    }
}
