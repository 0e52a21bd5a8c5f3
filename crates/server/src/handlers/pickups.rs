//! Garbage-pickup lookup endpoints.

use crate::error::ApiResult;
use crate::pickups::Pickup;
use crate::state::AppState;
use axum::Json;
use axum::extract::{ConnectInfo, Path, State};
use signcast_directory::{System, SystemId, resolve_by_explicit_id, resolve_by_source_address};
use std::net::SocketAddr;
use time::OffsetDateTime;

/// GET /v1/pickups - Pickups for the calling terminal's deployment address.
pub async fn pickups_by_source(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> ApiResult<Json<Vec<Pickup>>> {
    let system = resolve_by_source_address(state.directory.as_ref(), peer.ip()).await?;
    pickups_for_system(&state, &system).await
}

/// GET /v1/pickups/{system_id} - Pickups for an explicitly addressed system.
/// Only permitted from the configured intranet networks.
pub async fn pickups_by_id(
    State(state): State<AppState>,
    Path(system_id): Path<SystemId>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> ApiResult<Json<Vec<Pickup>>> {
    let system = resolve_by_explicit_id(
        state.directory.as_ref(),
        system_id,
        peer.ip(),
        &state.config.server.intranet,
    )
    .await?;
    pickups_for_system(&state, &system).await
}

/// Shared lookup path: resolve the deployment address, consult the day
/// cache, fall through to the municipal service on miss.
async fn pickups_for_system(state: &AppState, system: &System) -> ApiResult<Json<Vec<Pickup>>> {
    let address = &system.deployment()?.address;
    let location = state.pickups.find_location(&address.street).await?;

    let today = OffsetDateTime::now_utc().date();
    let key = (location.id, address.house_number.clone());

    if let Some(cached) = state.pickup_cache.get(today, &key) {
        tracing::debug!(system_id = system.id, location = %location.name, "pickup cache hit");
        return Ok(Json(cached));
    }

    let pickups = state
        .pickups
        .pickups(&location, &address.house_number)
        .await?;
    state.pickup_cache.insert(today, key, pickups.clone());

    Ok(Json(pickups))
}
