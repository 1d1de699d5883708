//! The flat row shape shared by every storage backend.

use serde::{Deserialize, Serialize};

use super::{Coordinates, DayKey, NewPoint, Point};
use crate::error::Result;

/// One persisted point: `{day, name, lat, lon}`.
///
/// Column names and types are the storage contract; SQLite columns, CSV
/// headers and the remote JSON objects all use these four fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Day label, e.g. `1일차`
    pub day: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Record {
    /// Builds the row for a point on the given day.
    pub fn from_point(day: DayKey, point: &Point) -> Self {
        Self {
            day: day.label(),
            name: point.name.clone(),
            lat: point.latitude(),
            lon: point.longitude(),
        }
    }

    /// Validates the row and splits it into its day and point.
    pub fn to_entry(&self) -> Result<(DayKey, NewPoint)> {
        let day = self.day.parse::<DayKey>()?;
        let point = NewPoint::at(&self.name, Coordinates::new(self.lat, self.lon)?)?;
        Ok((day, point))
    }
}
