//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{DayKey, Point},
    planner::SaveOutcome,
    storage::SaveReport,
    transfer::ImportReport,
};

/// A point that was added to a day.
pub struct AddResult<'a> {
    pub day: DayKey,
    pub point: &'a Point,
}

impl fmt::Display for AddResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added {} to {}", self.point, self.day)
    }
}

/// A point that was removed.
pub struct DeleteResult<'a> {
    pub point: &'a Point,
}

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Removed {}", self.point)
    }
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved {} points to {} backend at {}",
            self.points,
            self.backend,
            LocalDateTime(&self.saved_at)
        )
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Saved(report) => write!(f, "{report}"),
            SaveOutcome::Failed { reason } => {
                writeln!(f, "Warning: changes kept locally but not saved: {reason}")
            }
            SaveOutcome::Skipped => writeln!(f, "Nothing changed."),
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported {} points", self.imported)?;
        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped rows:")?;
            for row in &self.skipped {
                writeln!(f, "- line {}: {}", row.line, row.reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{itinerary::Itinerary, storage::BackendKind, transfer::SkippedRow};

    #[test]
    fn test_save_outcome_messages() {
        let saved = SaveOutcome::Saved(SaveReport {
            backend: BackendKind::Sqlite,
            points: 3,
            saved_at: Timestamp::from_second(1640995200).unwrap(),
        });
        assert!(saved.to_string().starts_with("Saved 3 points to sqlite backend at "));

        let failed = SaveOutcome::Failed {
            reason: "offline".to_string(),
        };
        assert!(failed.to_string().contains("not saved: offline"));
        assert_eq!(SaveOutcome::Skipped.to_string(), "Nothing changed.\n");
    }

    #[test]
    fn test_import_report_lists_skipped_rows() {
        let report = ImportReport {
            itinerary: Itinerary::new(),
            imported: 2,
            skipped: vec![SkippedRow {
                line: 4,
                reason: "missing name".to_string(),
            }],
        };
        let output = report.to_string();
        assert!(output.starts_with("Imported 2 points"));
        assert!(output.contains("- line 4: missing name"));
    }

    #[test]
    fn test_add_and_delete_results() {
        let itinerary = Itinerary::sample();
        let point = &itinerary.for_day(DayKey::first())[0];
        assert_eq!(
            AddResult {
                day: DayKey::first(),
                point
            }
            .to_string(),
            "Added **에펠탑** (48.8584, 2.2945) to 1일차\n"
        );
        assert_eq!(
            DeleteResult { point }.to_string(),
            "Removed **에펠탑** (48.8584, 2.2945)\n"
        );
    }
}
