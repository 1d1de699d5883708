//! Day keys of the itinerary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// Number of days every itinerary has.
pub const DAY_COUNT: u8 = 13;

const LABEL_SUFFIX: &str = "일차";

/// One day of the trip, numbered from 1 to [`DAY_COUNT`].
///
/// Serialized as its label (`"1일차"`), which is also the `day` column of the
/// persisted record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(u8);

impl DayKey {
    /// Creates a day key from its 1-based number.
    pub fn new(number: u8) -> Result<Self> {
        if (1..=DAY_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TripError::invalid_input("day")
                .with_reason(format!("day {number} is outside 1..={DAY_COUNT}")))
        }
    }

    /// The first day of the trip.
    pub fn first() -> Self {
        Self(1)
    }

    /// All day keys in order.
    pub fn all() -> impl Iterator<Item = DayKey> {
        (1..=DAY_COUNT).map(DayKey)
    }

    /// The 1-based day number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Canonical label, e.g. `3일차`.
    pub fn label(&self) -> String {
        format!("{}{LABEL_SUFFIX}", self.0)
    }
}

impl FromStr for DayKey {
    type Err = TripError;

    /// Accepts `3`, `3일차`, `day3` and `day 3` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        let digits = lower
            .strip_suffix(LABEL_SUFFIX)
            .or_else(|| lower.strip_prefix("day"))
            .unwrap_or(lower.as_str())
            .trim();

        let number = digits.parse::<u8>().map_err(|_| {
            TripError::invalid_input("day").with_reason(format!(
                "'{trimmed}' is not a day; use 1-{DAY_COUNT} or labels like 1{LABEL_SUFFIX}"
            ))
        })?;
        DayKey::new(number)
    }
}

impl TryFrom<String> for DayKey {
    type Error = TripError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(day: DayKey) -> Self {
        day.label()
    }
}
