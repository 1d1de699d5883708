//! Place search for the free-text input path.

use std::time::Duration;

use log::debug;
use reqwest::{blocking::Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    error::{HttpResultExt, Result, TripError},
    models::Coordinates,
};

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!("tripline/", env!("CARGO_PKG_VERSION"));

/// A resolved place.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Place {
    /// Short name, falling back to the first part of the display name
    pub name: String,
    pub display_name: String,
    pub coordinates: Coordinates,
}

/// Resolves free text to a place.
pub trait Geocoder: Send + Sync {
    /// Returns the best match, or `None` when nothing matched.
    fn search(&self, query: &str) -> Result<Option<Place>>;
}

/// Nominatim search result; coordinates come back as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: String,
}

impl SearchHit {
    fn into_place(self) -> Result<Place> {
        let parse = |field: &str, value: &str| {
            value.parse::<f64>().map_err(|_| {
                TripError::invalid_input(field)
                    .with_reason(format!("geocoder returned '{value}'"))
            })
        };
        let coordinates = Coordinates::new(parse("latitude", &self.lat)?, parse("longitude", &self.lon)?)?;
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                self.display_name
                    .split(',')
                    .next()
                    .map(|s| s.trim().to_string())
            })
            .unwrap_or_default();
        Ok(Place {
            name,
            display_name: self.display_name,
            coordinates,
        })
    }
}

/// Geocoder backed by a Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    endpoint: Url,
    timeout: Duration,
}

impl NominatimGeocoder {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            TripError::invalid_input("geocoder_url").with_reason(format!("'{endpoint}': {e}"))
        })?;
        Ok(Self { endpoint, timeout })
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TripError::invalid_input("geocoder_url").with_reason("cannot be a base URL")
            })?
            .pop_if_empty()
            .push("search");
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        Ok(url)
    }
}

impl Geocoder for NominatimGeocoder {
    fn search(&self, query: &str) -> Result<Option<Place>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TripError::invalid_input("query").with_reason("must not be empty"));
        }

        let url = self.search_url(query)?;
        debug!("GET {url}");
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .http_context("Failed to build HTTP client")?;
        let response = client
            .get(url.clone())
            .send()
            .http_context("Failed to reach geocoder")?;

        let status = response.status();
        if !status.is_success() {
            return Err(TripError::RemoteStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: None,
            });
        }

        let hits: Vec<SearchHit> = response
            .json()
            .http_context("Failed to decode geocoder response")?;
        hits.into_iter().next().map(SearchHit::into_place).transpose()
    }
}
