//! HTTP API server for the signcast content sync backend.
//!
//! This crate provides the HTTP control plane:
//! - Differential content sync (tar.xz streaming)
//! - Client self-update checks
//! - Garbage-pickup lookups with a day-scoped cache
//! - Health check

pub mod cache;
pub mod content;
pub mod error;
pub mod handlers;
pub mod pickups;
pub mod routes;
pub mod state;

pub use cache::DayCache;
pub use content::{ContentSource, FilesystemContent};
pub use error::ApiError;
pub use pickups::{Location, Pickup, PickupError, PickupSource};
pub use routes::create_router;
pub use state::AppState;
