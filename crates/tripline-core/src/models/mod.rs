//! Data models for days, points and persisted rows.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data
//! structures, the same way the itinerary store in [`crate::itinerary`] keeps
//! ordering rules out of the models.
//!
//! # Examples
//!
//! ```rust
//! use tripline_core::models::{DayKey, NewPoint};
//!
//! let day: DayKey = "1일차".parse().unwrap();
//! assert_eq!(day.number(), 1);
//!
//! let point = NewPoint::new("에펠탑", 48.8584, 2.2945).unwrap();
//! assert_eq!(point.name(), "에펠탑");
//!
//! // Zero means "not filled in" for manual entry
//! assert!(NewPoint::new("Null Island", 0.0, 0.0).is_err());
//! ```

pub mod coordinates;
pub mod day;
pub mod direction;
pub mod point;
pub mod record;


pub use coordinates::Coordinates;
pub use day::{DayKey, DAY_COUNT};
pub use direction::Direction;
pub use point::{NewPoint, Point, PointId};
pub use record::Record;
