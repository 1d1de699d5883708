//! The trip planner session.
//!
//! [`TripPlanner`] owns the in-memory [`Itinerary`] together with the backend
//! it persists to. There is no global session: a caller builds one planner
//! with [`TripPlannerBuilder`] and passes it to whatever needs it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Core Params   │    │   TripPlanner   │    │     Backend     │
//! │ (AddPoint, ...) │───▶│  validate, then │───▶│  full-replace   │
//! │                 │    │  mutate, save   │    │      save       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutation returns a [`Change`]: the operation's value, what happened
//! to the save, and whether the day's route should be redrawn. A failed save
//! never rolls back the in-memory change; it is reported as
//! [`SaveOutcome::Failed`] and the caller decides how loudly to warn.
//!
//! Backend and geocoder calls block, so they run on
//! [`tokio::task::spawn_blocking`].
//!
//! ```rust,no_run
//! use tripline_core::{
//!     models::DayKey,
//!     params::{AddPoint, PointSource},
//!     storage::StorageConfig,
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = TripPlannerBuilder::new()
//!     .with_storage(StorageConfig::Memory { seed_sample: false })
//!     .build()
//!     .await?;
//!
//! let change = planner
//!     .add_point(&AddPoint {
//!         day: DayKey::new(1)?,
//!         name: "에펠탑".to_string(),
//!         source: PointSource::Link(
//!             "https://www.google.com/maps/place/@48.8584,2.2945,17z".to_string(),
//!         ),
//!     })
//!     .await?;
//! assert!(change.redraw);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use tokio::task;

use crate::{
    error::{Result, TripError},
    geocode::Geocoder,
    itinerary::Itinerary,
    models::{DayKey, Point},
    route::{render_route, RouteOptions, RouteView},
    storage::{Backend, BackendKind, SaveReport},
};

pub mod builder;
pub mod day_ops;
pub mod point_ops;


pub use builder::TripPlannerBuilder;

/// What happened to the save that followed a mutation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaveOutcome {
    /// The backend now holds the full itinerary
    Saved(SaveReport),
    /// The backend rejected the save; the in-memory change stands
    Failed { reason: String },
    /// Nothing changed, so nothing was saved
    Skipped,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SaveOutcome::Failed { .. })
    }
}

/// Result of a planner mutation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Change<T> {
    pub value: T,
    pub persistence: SaveOutcome,
    /// Whether the affected day's route should be rendered again
    pub redraw: bool,
}

impl<T> Change<T> {
    /// A change that did not touch the itinerary.
    pub(crate) fn unchanged(value: T) -> Self {
        Self {
            value,
            persistence: SaveOutcome::Skipped,
            redraw: false,
        }
    }
}

/// Planner session: the itinerary plus its persistence.
pub struct TripPlanner {
    itinerary: Itinerary,
    backend: Arc<dyn Backend>,
    geocoder: Option<Arc<dyn Geocoder>>,
}

impl TripPlanner {
    pub(crate) fn new(
        itinerary: Itinerary,
        backend: Arc<dyn Backend>,
        geocoder: Option<Arc<dyn Geocoder>>,
    ) -> Self {
        Self {
            itinerary,
            backend,
            geocoder,
        }
    }

    /// The whole itinerary.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Points of one day in visit order.
    pub fn day(&self, day: DayKey) -> &[Point] {
        self.itinerary.for_day(day)
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Renders the route of one day.
    pub fn render_day(&self, day: DayKey, options: &RouteOptions) -> RouteView {
        render_route(self.itinerary.for_day(day), options)
    }

    /// Saves the full itinerary and wraps `value` in the resulting change.
    pub(crate) async fn commit<T>(&self, value: T) -> Change<T> {
        let backend = Arc::clone(&self.backend);
        let snapshot = self.itinerary.clone();
        let persistence = match blocking(move || backend.save(&snapshot)).await {
            Ok(report) => {
                info!("Saved {} points to {} backend", report.points, report.backend);
                SaveOutcome::Saved(report)
            }
            Err(e) => {
                warn!("Save to {} backend failed: {e}", self.backend.kind());
                SaveOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        Change {
            value,
            persistence,
            redraw: true,
        }
    }

    pub(crate) fn geocoder(&self) -> Result<Arc<dyn Geocoder>> {
        self.geocoder
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| TripError::Configuration {
                message: "no geocoder configured for place search".to_string(),
            })
    }
}

/// Runs blocking work off the async worker threads.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
