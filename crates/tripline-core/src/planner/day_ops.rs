//! Day-level and bulk planner operations.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::{debug, info};

use super::{blocking, Change, TripPlanner};
use crate::{
    error::{Result, TripError},
    itinerary::Itinerary,
    models::DayKey,
    transfer::{self, ImportReport},
};

impl TripPlanner {
    /// Removes every point of a day and returns how many were removed.
    ///
    /// Clearing a day that is already empty saves nothing.
    pub async fn clear_day(&mut self, day: DayKey) -> Result<Change<usize>> {
        let removed = self.itinerary.clear_day(day).len();
        if removed == 0 {
            return Ok(Change::unchanged(0));
        }
        debug!("cleared {removed} points from {day}");
        Ok(self.commit(removed).await)
    }

    /// Replaces the whole itinerary and returns the new point count.
    pub async fn replace_all(&mut self, itinerary: Itinerary) -> Result<Change<usize>> {
        self.itinerary.replace_all(itinerary);
        let points = self.itinerary.len();
        Ok(self.commit(points).await)
    }

    /// Replaces the itinerary with the contents of a CSV file.
    ///
    /// Bad rows are skipped and listed in the report. A file without a single
    /// valid row is rejected and the trip is left as it was; use
    /// [`TripPlanner::replace_all`] or [`TripPlanner::clear_day`] to empty it.
    pub async fn import_csv(&mut self, path: impl AsRef<Path>) -> Result<Change<ImportReport>> {
        let path = path.as_ref().to_path_buf();
        let source = path.clone();
        let report = blocking(move || {
            let file = File::open(&source).map_err(|e| TripError::file_system(&source, e))?;
            transfer::import_csv(file)
        })
        .await?;

        if report.imported == 0 {
            return Err(TripError::invalid_input("file").with_reason(format!(
                "no points to import from '{}' ({} rows skipped)",
                path.display(),
                report.skipped.len()
            )));
        }

        info!(
            "Imported {} points from {} ({} skipped)",
            report.imported,
            path.display(),
            report.skipped.len()
        );
        self.itinerary.replace_all(report.itinerary.clone());
        Ok(self.commit(report).await)
    }

    /// Writes the itinerary to a CSV file and returns the number of rows.
    pub async fn export_csv(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let snapshot = self.itinerary.clone();
        blocking(move || {
            let file = File::create(&path).map_err(|e| TripError::file_system(&path, e))?;
            let rows = transfer::export_csv(&snapshot, BufWriter::new(file))?;
            info!("Exported {rows} points to {}", path.display());
            Ok(rows)
        })
        .await
    }
}
