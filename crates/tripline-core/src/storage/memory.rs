//! In-process backend.

use std::sync::Mutex;

use super::{Backend, BackendKind, SaveReport};
use crate::{
    error::{Result, TripError},
    itinerary::Itinerary,
    models::Record,
};

/// Keeps the last saved rows in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Mutex<Vec<Record>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the rows of `itinerary` already saved.
    pub fn seeded(itinerary: &Itinerary) -> Self {
        Self {
            rows: Mutex::new(itinerary.to_records()),
        }
    }

    fn poisoned() -> TripError {
        TripError::Configuration {
            message: "memory backend lock poisoned".to_string(),
        }
    }
}

impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn load(&self) -> Result<Itinerary> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        let (itinerary, _) = Itinerary::from_records(rows.iter());
        Ok(itinerary)
    }

    fn save(&self, itinerary: &Itinerary) -> Result<SaveReport> {
        let records = itinerary.to_records();
        let points = records.len();
        *self.rows.lock().map_err(|_| Self::poisoned())? = records;
        Ok(SaveReport::now(BackendKind::Memory, points))
    }
}
