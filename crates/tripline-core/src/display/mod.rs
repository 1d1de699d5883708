//! Markdown formatting for terminal output.
//!
//! Domain models get direct `Display` implementations; collections and
//! operation results get small wrapper types. Everything renders markdown, so
//! the CLI can pass it through `termimad` or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │    Markdown     │
//! │ (Point, Route)  │───▶│ (DayPoints, ..) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: days and routes
//! - [`results`]: add/remove confirmations, save and import reports
//! - [`status`]: one-line success, warning or failure messages
//! - [`datetime`]: local time formatting
//! - [`models`]: `Display` for the domain models
//!
//! ```rust
//! use tripline_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Cleared 1일차".to_string());
//! assert_eq!(status.to_string(), "Success: Cleared 1일차\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DayOverview, DayPoints};
pub use datetime::LocalDateTime;
pub use results::{AddResult, DeleteResult};
pub use status::{OperationStatus, StatusLevel};
