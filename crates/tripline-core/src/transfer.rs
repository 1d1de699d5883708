//! CSV export and import.
//!
//! The format is the storage row shape with a header line:
//!
//! ```text
//! day,name,lat,lon
//! 1일차,에펠탑,48.8584,2.2945
//! 1일차,"Café, Louvre side",48.8606,2.3376
//! ```
//!
//! Import accepts the columns in any order and ignores extra columns. Rows
//! that cannot become a point are skipped and reported, so one bad line does
//! not lose the rest of the file.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;
use serde::Serialize;

use crate::{
    error::{CsvResultExt, Result, TripError},
    itinerary::Itinerary,
    models::Record,
};

/// Header columns, in export order.
pub const CSV_HEADER: [&str; 4] = ["day", "name", "lat", "lon"];

/// A row that import skipped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the input
    pub line: u64,
    pub reason: String,
}

/// Outcome of [`import_csv`].
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub itinerary: Itinerary,
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Writes the itinerary as CSV and returns the number of rows written.
pub fn export_csv<W: Write>(itinerary: &Itinerary, writer: W) -> Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer
        .write_record(CSV_HEADER)
        .csv_context("Failed to write CSV header")?;

    let records = itinerary.to_records();
    for record in &records {
        writer
            .serialize(record)
            .csv_context("Failed to write CSV row")?;
    }
    writer
        .flush()
        .map_err(csv::Error::from)
        .csv_context("Failed to flush CSV output")?;

    debug!("Exported {} rows", records.len());
    Ok(records.len())
}

struct Columns {
    day: usize,
    name: usize,
    lat: usize,
    lon: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(column))
                .ok_or_else(|| {
                    TripError::invalid_input("header")
                        .with_reason(format!("missing column '{column}'"))
                })
        };
        Ok(Self {
            day: find("day")?,
            name: find("name")?,
            lat: find("lat")?,
            lon: find("lon")?,
        })
    }

    fn record(&self, row: &StringRecord) -> std::result::Result<Record, String> {
        let field = |index: usize, column: &str| {
            row.get(index)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| format!("missing {column}"))
        };
        let number = |index: usize, column: &str| {
            let value = field(index, column)?;
            value
                .parse::<f64>()
                .map_err(|_| format!("{column} '{value}' is not a number"))
        };
        Ok(Record {
            day: field(self.day, "day")?.to_string(),
            name: field(self.name, "name")?.to_string(),
            lat: number(self.lat, "lat")?,
            lon: number(self.lon, "lon")?,
        })
    }
}

/// Reads CSV into a fresh itinerary.
///
/// A missing header column fails the whole import with
/// [`TripError::InvalidInput`]; a bad row is only skipped.
pub fn import_csv<R: Read>(reader: R) -> Result<ImportReport> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .csv_context("Failed to read CSV header")?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut itinerary = Itinerary::new();
    let mut imported = 0;
    let mut skipped = Vec::new();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let entry = columns
            .record(&row)
            .and_then(|record| record.to_entry().map_err(|e| e.to_string()));
        match entry {
            Ok((day, point)) => {
                itinerary.append(day, point);
                imported += 1;
            }
            Err(reason) => skipped.push(SkippedRow { line, reason }),
        }
    }

    debug!("Imported {imported} rows, skipped {}", skipped.len());
    Ok(ImportReport {
        itinerary,
        imported,
        skipped,
    })
}
