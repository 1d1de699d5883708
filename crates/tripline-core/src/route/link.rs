//! Directions deep links.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Default routing service base URL.
pub const DEFAULT_ROUTING_BASE: &str = "https://www.google.com/maps";

/// Travel mode passed to the routing service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Public transport
    #[default]
    Transit,
    Driving,
    Walking,
    Bicycling,
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transit" => Ok(TravelMode::Transit),
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "bicycling" | "cycling" => Ok(TravelMode::Bicycling),
            _ => Err(format!("Invalid travel mode: {s}")),
        }
    }
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

/// Builds the directions URL between two positions.
///
/// Inputs are numeric, so plain formatting is enough; the comma between
/// latitude and longitude is left as is.
pub fn directions_url(
    base: &str,
    origin: &Coordinates,
    destination: &Coordinates,
    mode: TravelMode,
) -> String {
    format!(
        "{}/dir/?api=1&origin={},{}&destination={},{}&travelmode={}",
        base.trim_end_matches('/'),
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
        mode.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transit_link_between_two_points() {
        let origin = Coordinates::new(48.8584, 2.2945).unwrap();
        let destination = Coordinates::new(48.8606, 2.3376).unwrap();
        let url = directions_url(DEFAULT_ROUTING_BASE, &origin, &destination, TravelMode::Transit);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=48.8584,2.2945&destination=48.8606,2.3376&travelmode=transit"
        );
    }

    #[test]
    fn test_custom_base_and_mode() {
        let origin = Coordinates::new(-33.5, 151.25).unwrap();
        let destination = Coordinates::new(-34.0, 150.0).unwrap();
        let url = directions_url("https://maps.example.org/", &origin, &destination, TravelMode::Walking);
        assert_eq!(
            url,
            "https://maps.example.org/dir/?api=1&origin=-33.5,151.25&destination=-34,150&travelmode=walking"
        );
    }

    #[test]
    fn test_travel_mode_parsing() {
        assert_eq!("TRANSIT".parse::<TravelMode>().unwrap(), TravelMode::Transit);
        assert_eq!("cycling".parse::<TravelMode>().unwrap(), TravelMode::Bicycling);
        assert!("teleport".parse::<TravelMode>().is_err());
        assert_eq!(TravelMode::default(), TravelMode::Transit);
    }
}
