//! Core library for the Tripline itinerary editor.
//!
//! A trip is split into numbered days (`1일차` through `13일차`); each day
//! holds an ordered list of named points. This crate keeps that itinerary,
//! turns map links into coordinates, renders each day's route and persists
//! the whole thing to a pluggable backend.
//!
//! - [`itinerary`]: the ordered per-day store
//! - [`extract`]: coordinates from `@lat,lon` map links
//! - [`route`]: markers, segments and transit deep links for one day
//! - [`storage`]: memory, SQLite, remote HTTP and CSV file backends
//! - [`transfer`]: CSV export and import
//! - [`geocode`]: free-text place search
//! - [`planner`]: the session tying them together
//! - [`display`]: markdown output for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use tripline_core::{
//!     models::{DayKey, Direction},
//!     params::{MovePoint, PointRef},
//!     route::RouteOptions,
//!     storage::StorageConfig,
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = TripPlannerBuilder::new()
//!     .with_storage(StorageConfig::Memory { seed_sample: true })
//!     .build()
//!     .await?;
//!
//! let day = DayKey::first();
//! planner
//!     .move_point(&MovePoint {
//!         point: PointRef::At { day, position: 1 },
//!         direction: Direction::Next,
//!     })
//!     .await?;
//!
//! let view = planner.render_day(day, &RouteOptions::default());
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod extract;
pub mod geocode;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;
pub mod route;
pub mod storage;
pub mod transfer;

// Re-export commonly used types
pub use display::{AddResult, DayOverview, DayPoints, DeleteResult, OperationStatus};
pub use error::{Result, TripError};
pub use extract::extract_coordinates;
pub use itinerary::Itinerary;
pub use models::{Coordinates, DayKey, Direction, NewPoint, Point, PointId, Record};
pub use params::{AddPoint, MovePoint, PointRef, PointSource, RemovePoint};
pub use planner::{Change, SaveOutcome, TripPlanner, TripPlannerBuilder};
pub use route::{render_route, RouteOptions, RouteView, TravelMode};
pub use storage::{Backend, BackendKind, SaveReport, StorageConfig};
