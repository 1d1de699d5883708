//! Persistence backends for the itinerary.
//!
//! The planner depends on the [`Backend`] capability set, not on a specific
//! store. Every backend keeps the same flat row shape ([`Record`]) and every
//! backend saves by **replacing** its whole contents with the itinerary it
//! is given; none of them appends single rows. Concurrent writers to a shared
//! backend are not coordinated: the last save wins.
//!
//! | Kind     | Backend            | Durable | Notes                           |
//! |----------|--------------------|---------|---------------------------------|
//! | memory   | [`MemoryBackend`]  | no      | seeded with the sample trip     |
//! | sqlite   | [`SqliteBackend`]  | yes     | one table, replaced per save    |
//! | remote   | [`RemoteBackend`]  | yes     | GET rows, POST `{"data": rows}` |
//! | file     | [`CsvFileBackend`] | yes     | `day,name,lat,lon` CSV          |
//!
//! [`Record`]: crate::models::Record

use std::{path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use jiff::Timestamp;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    itinerary::Itinerary,
};

pub mod csv_file;
pub mod memory;
pub mod remote;
pub mod sqlite;

pub use csv_file::CsvFileBackend;
pub use memory::MemoryBackend;
pub use remote::RemoteBackend;
pub use sqlite::SqliteBackend;

const XDG_PREFIX: &str = "tripline";
const DEFAULT_DATABASE_FILE: &str = "tripline.db";
const DEFAULT_CSV_FILE: &str = "itinerary.csv";

/// Default timeout for remote requests.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Which kind of store a backend writes to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    Sqlite,
    Remote,
    File,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(BackendKind::Memory),
            "sqlite" => Ok(BackendKind::Sqlite),
            "remote" => Ok(BackendKind::Remote),
            "file" | "csv" => Ok(BackendKind::File),
            _ => Err(format!("Invalid backend: {s}")),
        }
    }
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite => "sqlite",
            BackendKind::Remote => "remote",
            BackendKind::File => "file",
        }
    }
}

/// What a successful save wrote.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SaveReport {
    pub backend: BackendKind,
    /// Number of points written
    pub points: usize,
    pub saved_at: Timestamp,
}

impl SaveReport {
    pub(crate) fn now(backend: BackendKind, points: usize) -> Self {
        Self {
            backend,
            points,
            saved_at: Timestamp::now(),
        }
    }
}

/// A store the itinerary can be loaded from and saved to.
///
/// Implementations do blocking I/O; async callers run them on a blocking
/// thread (see [`crate::planner`]).
pub trait Backend: Send + Sync {
    /// The kind of store behind this backend.
    fn kind(&self) -> BackendKind;

    /// Reads the full itinerary.
    fn load(&self) -> Result<Itinerary>;

    /// Replaces the stored itinerary with `itinerary`.
    fn save(&self, itinerary: &Itinerary) -> Result<SaveReport>;
}

/// Loads from the backend, falling back to an empty itinerary on any error so
/// the editor stays usable without its store.
pub fn load_or_empty(backend: &dyn Backend) -> Itinerary {
    match backend.load() {
        Ok(itinerary) => {
            info!(
                "Loaded {} points from {} backend",
                itinerary.len(),
                backend.kind()
            );
            itinerary
        }
        Err(e) => {
            warn!(
                "Could not load from {} backend, starting empty: {e}",
                backend.kind()
            );
            Itinerary::new()
        }
    }
}

/// Where the itinerary is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Process memory only; optionally seeded with the sample trip
    Memory { seed_sample: bool },
    /// SQLite file; `None` uses `$XDG_DATA_HOME/tripline/tripline.db`
    Sqlite { path: Option<PathBuf> },
    /// HTTP endpoint speaking the remote row protocol
    Remote { endpoint: String, timeout: Duration },
    /// CSV file; `None` uses `$XDG_DATA_HOME/tripline/itinerary.csv`
    File { path: Option<PathBuf> },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Sqlite { path: None }
    }
}

impl StorageConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            StorageConfig::Memory { .. } => BackendKind::Memory,
            StorageConfig::Sqlite { .. } => BackendKind::Sqlite,
            StorageConfig::Remote { .. } => BackendKind::Remote,
            StorageConfig::File { .. } => BackendKind::File,
        }
    }
}

/// Creates the backend described by `config`.
pub fn open_backend(config: &StorageConfig) -> Result<Arc<dyn Backend>> {
    let backend: Arc<dyn Backend> = match config {
        StorageConfig::Memory { seed_sample } => {
            if *seed_sample {
                Arc::new(MemoryBackend::seeded(&Itinerary::sample()))
            } else {
                Arc::new(MemoryBackend::new())
            }
        }
        StorageConfig::Sqlite { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => default_data_file(DEFAULT_DATABASE_FILE)?,
            };
            Arc::new(SqliteBackend::open(path)?)
        }
        StorageConfig::Remote { endpoint, timeout } => {
            Arc::new(RemoteBackend::new(endpoint, *timeout)?)
        }
        StorageConfig::File { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => default_data_file(DEFAULT_CSV_FILE)?,
            };
            Arc::new(CsvFileBackend::new(path))
        }
    };
    Ok(backend)
}

/// Returns a data file path following the XDG Base Directory specification.
fn default_data_file(name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(XDG_PREFIX)
        .place_data_file(name)
        .map_err(|e| TripError::XdgDirectory(e.to_string()))
}
