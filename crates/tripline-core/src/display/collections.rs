//! Display wrappers for groups of points.

use std::fmt;

use crate::{
    itinerary::Itinerary,
    models::{DayKey, Point},
    route::RouteView,
};

/// The points of one day, numbered in visit order.
///
/// # Examples
///
/// ```rust
/// use tripline_core::{display::DayPoints, itinerary::Itinerary, models::DayKey};
///
/// let itinerary = Itinerary::sample();
/// let day = DayKey::first();
/// let output = DayPoints::new(day, itinerary.for_day(day)).to_string();
/// assert!(output.contains("1. **에펠탑**"));
/// ```
pub struct DayPoints<'a> {
    pub day: DayKey,
    pub points: &'a [Point],
}

impl<'a> DayPoints<'a> {
    pub fn new(day: DayKey, points: &'a [Point]) -> Self {
        Self { day, points }
    }
}

impl fmt::Display for DayPoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.day)?;
        writeln!(f)?;
        if self.points.is_empty() {
            return writeln!(f, "No points for this day yet.");
        }
        for (i, point) in self.points.iter().enumerate() {
            writeln!(f, "{}. {point}", i + 1)?;
        }
        Ok(())
    }
}

/// One line per day of the trip with its stops.
pub struct DayOverview<'a>(pub &'a Itinerary);

impl fmt::Display for DayOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Itinerary")?;
        writeln!(f)?;
        for (day, points) in self.0.days() {
            if points.is_empty() {
                writeln!(f, "- {day}: -")?;
            } else {
                let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
                writeln!(f, "- **{day}** ({}): {}", points.len(), names.join(" → "))?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total: {} points", self.0.len())
    }
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_content() {
            writeln!(f, "No points for this day yet. Add a place to see the route.")?;
            writeln!(f)?;
            return writeln!(f, "- Map center: {} (zoom {})", self.center, self.zoom);
        }

        writeln!(f, "- Map center: {} (zoom {})", self.center, self.zoom)?;
        writeln!(f)?;
        writeln!(f, "## Stops")?;
        writeln!(f)?;
        for marker in &self.markers {
            writeln!(f, "{}. **{}** ({})", marker.order, marker.name, marker.position)?;
        }

        if !self.segments.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Segments")?;
            writeln!(f)?;
            for segment in &self.segments {
                writeln!(f, "- {}: <{}>", segment.label(), segment.directions_url)?;
            }
        }
        Ok(())
    }
}
