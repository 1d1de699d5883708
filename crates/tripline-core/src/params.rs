//! Parameter structures for planner operations.
//!
//! These are plain data with serde derives only, so every front end (today
//! the CLI) can wrap them in its own framework types and convert with
//! `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  TripPlanner    │
//! │  (clap derives) │    │ (serde derives) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{DayKey, Direction, PointId};

/// Where the coordinates of a new point come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PointSource {
    /// Coordinates typed in by the user
    Manual { latitude: f64, longitude: f64 },
    /// A map link with `@lat,lon` embedded
    Link(String),
    /// Free text resolved by the geocoder
    Search(String),
}

/// Parameters for adding a point to the end of a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddPoint {
    pub day: DayKey,
    /// Display name; may be empty only for [`PointSource::Search`], where the
    /// place name is used instead
    #[serde(default)]
    pub name: String,
    pub source: PointSource,
}

/// How an operation addresses an existing point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PointRef {
    /// By stable identifier
    Id(PointId),
    /// By 1-based position within a day, as shown to the user
    At { day: DayKey, position: usize },
}

/// Parameters for moving a point one place within its day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovePoint {
    pub point: PointRef,
    pub direction: Direction,
}

/// Parameters for removing a point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemovePoint {
    pub point: PointRef,
}
