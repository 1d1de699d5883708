//! Validated latitude/longitude pairs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// A geographic position in decimal degrees.
///
/// Built through [`Coordinates::new`], and deserialization goes through the
/// same check, so a value of this type is always finite and within range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "UncheckedCoordinates")]
pub struct Coordinates {
    /// Latitude in [-90, 90]
    pub(crate) latitude: f64,
    /// Longitude in [-180, 180]
    pub(crate) longitude: f64,
}

#[derive(Deserialize)]
struct UncheckedCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<UncheckedCoordinates> for Coordinates {
    type Error = TripError;

    fn try_from(raw: UncheckedCoordinates) -> Result<Self> {
        Coordinates::new(raw.latitude, raw.longitude)
    }
}

impl Coordinates {
    /// Creates a coordinate pair, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TripError::invalid_input("latitude")
                .with_reason(format!("{latitude} is outside [-90, 90]")));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TripError::invalid_input("longitude")
                .with_reason(format!("{longitude} is outside [-180, 180]")));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `[lat, lon]`, the order map libraries use for positions.
    pub fn lat_lon(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// `[lon, lat]`, the GeoJSON axis order.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
