//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// Source-address and explicit-ID resolution are separate routes composed
/// here; handlers never branch on a privacy flag.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (intentionally unauthenticated for load balancers/k8s probes)
        .route("/v1/health", get(handlers::health_check))
        // Differential content sync
        .route("/v1/sync", post(handlers::sync_by_source))
        .route("/v1/sync/{system_id}", post(handlers::sync_by_id))
        // Client self-update
        .route("/v1/update", post(handlers::check_update))
        // Garbage-pickup lookup
        .route("/v1/pickups", get(handlers::pickups_by_source))
        .route("/v1/pickups/{system_id}", get(handlers::pickups_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
