//! One-line status messages.

use std::fmt;

use crate::error::TripError;

/// Severity of a [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// The operation went through but something needs the user's attention
    Warning,
    Error,
}

impl StatusLevel {
    fn prefix(&self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Error => "Error:",
        }
    }
}

/// A short message reporting how an operation went.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Warning,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Error,
        }
    }

    /// Reports an error caused by the user's input.
    ///
    /// Lookups that found nothing are warnings pointing at manual entry; other
    /// rejected input is a failure. Returns `None` for backend and runtime
    /// errors, which are not the user's to fix.
    pub fn rejected(error: &TripError) -> Option<Self> {
        if !error.is_input_error() {
            return None;
        }
        Some(if error.needs_manual_entry() {
            Self::warning(error.to_string())
        } else {
            Self::failure(error.to_string())
        })
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.prefix(), self.message)
    }
}
