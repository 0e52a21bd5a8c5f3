//! Garbage-pickup lookup seam.
//!
//! The municipal pickup service is an external collaborator; this module
//! defines the client trait and its error surface only.

use crate::cache::DayCache;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

/// A municipal pickup location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
}

/// One scheduled pickup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    /// Waste type (e.g., "Restabfall").
    pub waste_type: String,
    /// Scheduled date.
    pub date: Date,
}

/// Pickup lookup error.
#[derive(Debug, Error)]
pub enum PickupError {
    #[error("no matching location for street: {0}")]
    NoLocationFound(String),

    #[error("ambiguous locations for street: {street}")]
    AmbiguousLocations {
        street: String,
        candidates: Vec<String>,
    },

    #[error("pickup service error: {0}")]
    Upstream(String),
}

/// Client for the municipal pickup service.
#[async_trait]
pub trait PickupSource: Send + Sync {
    /// Find the pickup location for a street.
    async fn find_location(&self, street: &str) -> Result<Location, PickupError>;

    /// Scheduled pickups for a location and house number.
    async fn pickups(
        &self,
        location: &Location,
        house_number: &str,
    ) -> Result<Vec<Pickup>, PickupError>;
}

/// Cache for pickup lookups, keyed by location and house number, cleared on
/// day rollover.
pub type PickupCache = DayCache<(u32, String), Vec<Pickup>>;

/// Stand-in used when no municipal service client is configured.
pub struct UnconfiguredPickups;

#[async_trait]
impl PickupSource for UnconfiguredPickups {
    async fn find_location(&self, _street: &str) -> Result<Location, PickupError> {
        Err(PickupError::Upstream(
            "no pickup service configured".to_string(),
        ))
    }

    async fn pickups(
        &self,
        _location: &Location,
        _house_number: &str,
    ) -> Result<Vec<Pickup>, PickupError> {
        Err(PickupError::Upstream(
            "no pickup service configured".to_string(),
        ))
    }
}
