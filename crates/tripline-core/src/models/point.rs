//! Point model definition and entry validation.

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::error::{Result, TripError};

/// Stable identifier of a point, assigned by the itinerary at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

/// A named stop on one day of the trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// Identifier, unique within the itinerary that created it
    pub id: PointId,

    /// Display name of the place
    pub name: String,

    /// Where the place is
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

impl Point {
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }
}

/// A point that has not been placed in an itinerary yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub(crate) name: String,
    pub(crate) coordinates: Coordinates,
}

impl NewPoint {
    /// Validates a point typed in by the user.
    ///
    /// Besides the range checks, a component that is exactly `0.0` counts as
    /// "not filled in" and is rejected.
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Result<Self> {
        if latitude == 0.0 {
            return Err(TripError::invalid_input("latitude").with_reason("latitude is required"));
        }
        if longitude == 0.0 {
            return Err(TripError::invalid_input("longitude").with_reason("longitude is required"));
        }
        Self::at(name, Coordinates::new(latitude, longitude)?)
    }

    /// Creates a point from already validated coordinates (link extraction,
    /// geocoding, bulk loads).
    pub fn at(name: &str, coordinates: Coordinates) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TripError::invalid_input("name").with_reason("name must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            coordinates,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
