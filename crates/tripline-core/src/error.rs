//! Error types for the tripline library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DayKey;

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// SQLite backend errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Transport-level HTTP failures (connection refused, timeout, bad body)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The remote endpoint answered with a non-success status
    #[error("Remote endpoint {url} answered {status}{}", body_suffix(.body))]
    RemoteStatus {
        status: u16,
        url: String,
        body: Option<String>,
    },
    /// CSV reading or writing errors
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A 1-based position that does not exist in the given day
    #[error("Position {position} is out of range for {day} ({len} points)")]
    PositionOutOfRange {
        day: DayKey,
        position: usize,
        len: usize,
    },
    /// Point not found for the given ID
    #[error("Point with ID {id} not found")]
    PointNotFound { id: u64 },
    /// A map link without embedded coordinates
    #[error("No coordinates found in link '{input}'; enter latitude and longitude manually")]
    CoordinatesNotFound { input: String },
    /// A search query the geocoder could not resolve
    #[error("No place found for '{query}'; enter latitude and longitude manually")]
    PlaceNotFound { query: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref().map(|b| format!(": {b}")).unwrap_or_default()
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error comes from user input rather than a backend.
    ///
    /// Input errors leave the itinerary untouched and should be shown inline;
    /// everything else is a backend problem the user can keep working past.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TripError::InvalidInput { .. }
                | TripError::PositionOutOfRange { .. }
                | TripError::PointNotFound { .. }
                | TripError::CoordinatesNotFound { .. }
                | TripError::PlaceNotFound { .. }
        )
    }

    /// Whether the user should fall back to typing the coordinates in.
    pub fn needs_manual_entry(&self) -> bool {
        matches!(
            self,
            TripError::CoordinatesNotFound { .. } | TripError::PlaceNotFound { .. }
        )
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TripError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| TripError::Database {
            message: message.to_string(),
            source,
        })
    }
}

/// Specialized extension trait for HTTP-related Results.
pub trait HttpResultExt<T> {
    /// Map transport errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|source| TripError::Http {
            message: message.to_string(),
            source,
        })
    }
}

/// Specialized extension trait for CSV-related Results.
pub trait CsvResultExt<T> {
    /// Map CSV errors with a message.
    fn csv_context(self, message: &str) -> Result<T>;
}

impl<T> CsvResultExt<T> for std::result::Result<T, csv::Error> {
    fn csv_context(self, message: &str) -> Result<T> {
        self.map_err(|source| TripError::Csv {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, TripError>;
