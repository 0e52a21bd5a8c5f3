//! Application state shared across handlers.

use crate::content::ContentSource;
use crate::pickups::{PickupCache, PickupSource};
use signcast_core::config::AppConfig;
use signcast_directory::SystemDirectory;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// System directory.
    pub directory: Arc<dyn SystemDirectory>,
    /// Content source.
    pub content: Arc<dyn ContentSource>,
    /// Municipal pickup service client.
    pub pickups: Arc<dyn PickupSource>,
    /// Day-scoped cache for pickup lookups.
    pub pickup_cache: Arc<PickupCache>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// This validates the configuration and logs warnings for surprising
    /// settings. Panics if configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if server configuration validation fails with an error.
    pub fn new(
        config: AppConfig,
        directory: Arc<dyn SystemDirectory>,
        content: Arc<dyn ContentSource>,
        pickups: Arc<dyn PickupSource>,
    ) -> Self {
        match config.server.validate() {
            Ok(warnings) => {
                for warning in warnings {
                    tracing::warn!("Configuration warning: {}", warning);
                }
            }
            Err(error) => {
                panic!("Invalid server configuration: {}", error);
            }
        }

        Self {
            config: Arc::new(config),
            directory,
            content,
            pickups,
            pickup_cache: Arc::new(PickupCache::new()),
        }
    }
}
