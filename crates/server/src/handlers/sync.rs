//! Differential content sync endpoints.
//!
//! A terminal posts the fingerprints it already has (a JSON array of hex
//! digests; empty or absent body means "send everything") and receives a
//! tar.xz archive of the changed files plus the full name manifest, or
//! 304 Not Modified when nothing changed.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::body::{Body, Bytes};
use axum::extract::{ConnectInfo, Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use signcast_core::ClientManifest;
use signcast_directory::{System, SystemId, resolve_by_explicit_id, resolve_by_source_address};
use signcast_pack::{ARCHIVE_CONTENT_TYPE, pack_changed_files};
use std::net::SocketAddr;

/// POST /v1/sync - Sync the calling terminal, resolved by source address.
pub async fn sync_by_source(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> ApiResult<Response> {
    let system = resolve_by_source_address(state.directory.as_ref(), peer.ip()).await?;
    sync_system(&state, &system, &body).await
}

/// POST /v1/sync/{system_id} - Sync an explicitly addressed system.
/// Only permitted from the configured intranet networks.
pub async fn sync_by_id(
    State(state): State<AppState>,
    Path(system_id): Path<SystemId>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> ApiResult<Response> {
    let system = resolve_by_explicit_id(
        state.directory.as_ref(),
        system_id,
        peer.ip(),
        &state.config.server.intranet,
    )
    .await?;
    sync_system(&state, &system, &body).await
}

/// Shared sync path: diff, pack, stream.
async fn sync_system(state: &AppState, system: &System, body: &[u8]) -> ApiResult<Response> {
    let known = ClientManifest::from_json_body(body)?;
    let files = state.content.files_for(system.id).await?;
    let archive = pack_changed_files(files, known).await?;

    if archive.is_empty() {
        tracing::debug!(system_id = system.id, "change-set empty, nothing to sync");
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    tracing::info!(
        system_id = system.id,
        entries = archive.entry_count(),
        compressed_size = archive.compressed_size(),
        "streaming sync archive"
    );

    let content_length = archive.compressed_size().to_string();
    let stream = archive.into_stream(state.config.server.stream_chunk_size);

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, ARCHIVE_CONTENT_TYPE),
            (CONTENT_LENGTH, content_length.as_str()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}
