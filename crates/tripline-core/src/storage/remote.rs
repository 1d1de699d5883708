//! HTTP backend.
//!
//! The endpoint speaks a two-call protocol:
//!
//! - `GET <endpoint>` answers the stored rows, either as a bare JSON array or
//!   wrapped as `{"data": [...]}`.
//! - `POST <endpoint>` with `{"data": [...]}` replaces everything the endpoint
//!   stores.
//!
//! Rows are [`Record`] objects: `{"day": "1일차", "name": ..., "lat": ..., "lon": ...}`.

use std::time::Duration;

use log::{debug, warn};
use reqwest::{blocking::Client, Url};
use serde::Serialize;
use serde_json::Value;

use super::{Backend, BackendKind, SaveReport};
use crate::{
    error::{HttpResultExt, Result, TripError},
    itinerary::{Itinerary, RejectedRecord},
    models::Record,
};

const USER_AGENT: &str = concat!("tripline/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct Payload<'a> {
    data: &'a [Record],
}

/// Loads and saves the itinerary through a remote HTTP endpoint.
///
/// Calls block; the blocking client is built per call so the backend can be
/// created inside an async runtime and used from `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    endpoint: Url,
    timeout: Duration,
}

impl RemoteBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            TripError::invalid_input("remote_url").with_reason(format!("'{endpoint}': {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TripError::invalid_input("remote_url")
                .with_reason(format!("unsupported scheme '{}'", endpoint.scheme())));
        }
        Ok(Self { endpoint, timeout })
    }

    fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .http_context("Failed to build HTTP client")
    }

    fn check_status(&self, response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .ok()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        Err(TripError::RemoteStatus {
            status: status.as_u16(),
            url: self.endpoint.to_string(),
            body,
        })
    }
}

/// Pulls the row array out of either response shape.
fn rows_from_body(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(TripError::Configuration {
                message: "remote response object has no 'data' array".to_string(),
            }),
        },
        _ => Err(TripError::Configuration {
            message: "remote response is neither an array nor an object".to_string(),
        }),
    }
}

/// Builds the itinerary from raw rows. A malformed row costs only that row;
/// rejections carry the row's index in the response.
fn itinerary_from_rows(rows: Vec<Value>) -> (Itinerary, Vec<RejectedRecord>) {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Record>(row) {
            Ok(record) => records.push((index, record)),
            Err(e) => rejected.push(RejectedRecord {
                index,
                reason: e.to_string(),
            }),
        }
    }

    let (itinerary, invalid) = Itinerary::from_records(records.iter().map(|(_, record)| record));
    rejected.extend(invalid.into_iter().map(|row| RejectedRecord {
        index: records[row.index].0,
        reason: row.reason,
    }));
    rejected.sort_by_key(|row| row.index);
    (itinerary, rejected)
}

impl Backend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn load(&self) -> Result<Itinerary> {
        debug!("GET {}", self.endpoint);
        let response = self
            .client()?
            .get(self.endpoint.clone())
            .send()
            .http_context("Failed to reach remote endpoint")?;
        let body: Value = self
            .check_status(response)?
            .json()
            .http_context("Failed to decode remote response")?;

        let (itinerary, rejected) = itinerary_from_rows(rows_from_body(body)?);
        for row in rejected {
            warn!("Skipping remote row {}: {}", row.index + 1, row.reason);
        }
        Ok(itinerary)
    }

    fn save(&self, itinerary: &Itinerary) -> Result<SaveReport> {
        let records = itinerary.to_records();
        debug!("POST {} ({} rows)", self.endpoint, records.len());
        let response = self
            .client()?
            .post(self.endpoint.clone())
            .json(&Payload { data: &records })
            .send()
            .http_context("Failed to reach remote endpoint")?;
        self.check_status(response)?;
        Ok(SaveReport::now(BackendKind::Remote, records.len()))
    }
}
