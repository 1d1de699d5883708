//! Reorder directions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which neighbour a point is swapped with when reordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the day (earlier visit)
    Previous,

    /// Towards the end of the day (later visit)
    Next,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "previous" | "prev" | "up" => Ok(Direction::Previous),
            "next" | "down" => Ok(Direction::Next),
            _ => Err(format!("Invalid direction: {s}")),
        }
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }

    /// Index of the neighbour in this direction, if there is one.
    pub fn neighbour(&self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => Some(index + 1).filter(|&next| next < len),
        }
    }
}
