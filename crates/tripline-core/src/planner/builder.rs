//! Builder for creating and configuring TripPlanner instances.

use std::sync::Arc;

use super::{blocking, TripPlanner};
use crate::{
    error::Result,
    geocode::Geocoder,
    storage::{self, Backend, StorageConfig},
};

/// Builder for creating and configuring [`TripPlanner`] instances.
#[derive(Clone, Default)]
pub struct TripPlannerBuilder {
    storage: StorageConfig,
    backend: Option<Arc<dyn Backend>>,
    geocoder: Option<Arc<dyn Geocoder>>,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    ///
    /// Without further configuration the planner stores into SQLite at
    /// `$XDG_DATA_HOME/tripline/tripline.db`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets where the itinerary is stored.
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Uses an already constructed backend instead of a [`StorageConfig`].
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Enables free-text place search for new points.
    pub fn with_geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Opens the backend and loads the itinerary from it.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend cannot be constructed (bad path
    /// or URL, unwritable data directory). An unreachable or unreadable store
    /// is not an error: the planner starts with an empty itinerary.
    pub async fn build(self) -> Result<TripPlanner> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let storage = self.storage;
                blocking(move || storage::open_backend(&storage)).await?
            }
        };

        let loader = Arc::clone(&backend);
        let itinerary = blocking(move || Ok(storage::load_or_empty(loader.as_ref()))).await?;

        Ok(TripPlanner::new(itinerary, backend, self.geocoder))
    }
}
