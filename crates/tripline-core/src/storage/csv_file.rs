//! CSV file backend.

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::warn;

use super::{Backend, BackendKind, SaveReport};
use crate::{
    error::{Result, TripError},
    itinerary::Itinerary,
    transfer::{export_csv, import_csv},
};

/// Stores the itinerary as a `day,name,lat,lon` CSV file.
#[derive(Debug, Clone)]
pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for CsvFileBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::File
    }

    fn load(&self) -> Result<Itinerary> {
        if !self.path.exists() {
            return Ok(Itinerary::new());
        }
        let file = File::open(&self.path).map_err(|e| TripError::file_system(&self.path, e))?;
        let report = import_csv(file)?;
        for row in &report.skipped {
            warn!(
                "Skipping line {} of {}: {}",
                row.line,
                self.path.display(),
                row.reason
            );
        }
        Ok(report.itinerary)
    }

    fn save(&self, itinerary: &Itinerary) -> Result<SaveReport> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TripError::file_system(parent, e))?;
        }

        // Write next to the target and rename so a failed write keeps the old file.
        let staging = self.path.with_extension("csv.tmp");
        let file = File::create(&staging).map_err(|e| TripError::file_system(&staging, e))?;
        let points = export_csv(itinerary, BufWriter::new(file))?;
        fs::rename(&staging, &self.path).map_err(|e| TripError::file_system(&self.path, e))?;

        Ok(SaveReport::now(BackendKind::File, points))
    }
}
