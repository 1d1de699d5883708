//! SQLite backend.

use std::path::PathBuf;

use log::{debug, warn};
use rusqlite::{params, Connection};

use super::{Backend, BackendKind, SaveReport};
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    itinerary::Itinerary,
    models::Record,
};

/// Stores the itinerary in a local SQLite file.
///
/// A connection is opened per call, so the backend is cheap to share between
/// threads and never holds the file open while idle.
#[derive(Debug, Clone)]
pub struct SqliteBackend {
    path: PathBuf,
}

impl SqliteBackend {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::file_system(parent, e))?;
        }
        let backend = Self { path };
        backend.connect()?;
        Ok(backend)
    }

    fn connect(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.path).db_context("Failed to open database connection")?;
        let schema_sql = include_str!("../../assets/schema.sql");
        connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        Ok(connection)
    }
}

impl Backend for SqliteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    fn load(&self) -> Result<Itinerary> {
        let connection = self.connect()?;
        let mut stmt = connection
            .prepare("SELECT day, name, lat, lon FROM points ORDER BY position, id")
            .db_context("Failed to prepare points query")?;

        let records = stmt
            .query_map([], |row| {
                Ok(Record {
                    day: row.get(0)?,
                    name: row.get(1)?,
                    lat: row.get(2)?,
                    lon: row.get(3)?,
                })
            })
            .db_context("Failed to query points")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read point row")?;

        let (itinerary, rejected) = Itinerary::from_records(records.iter());
        for row in rejected {
            warn!("Skipping stored row {}: {}", row.index + 1, row.reason);
        }
        debug!("Read {} points from {}", itinerary.len(), self.path.display());
        Ok(itinerary)
    }

    fn save(&self, itinerary: &Itinerary) -> Result<SaveReport> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute("DELETE FROM points", [])
            .db_context("Failed to clear points")?;

        let mut points = 0;
        {
            let mut insert = tx
                .prepare(
                    "INSERT INTO points (day, position, name, lat, lon) VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .db_context("Failed to prepare point insert")?;
            for (day, day_points) in itinerary.days() {
                for (position, point) in day_points.iter().enumerate() {
                    insert
                        .execute(params![
                            day.label(),
                            position as i64,
                            point.name,
                            point.latitude(),
                            point.longitude(),
                        ])
                        .db_context("Failed to insert point")?;
                    points += 1;
                }
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(SaveReport::now(BackendKind::Sqlite, points))
    }
}
