//! The itinerary store: ordered points per day.
//!
//! Every mutation is synchronous and visible to the next read. Positions are
//! 0-based indices into a day's sequence; points also carry a [`PointId`] so
//! callers can address a specific point even when two points share a name
//! and coordinates.

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::{Result, TripError},
    models::{Coordinates, DayKey, Direction, NewPoint, Point, PointId, Record},
};

/// Ordered points for every day of the trip.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    days: BTreeMap<DayKey, Vec<Point>>,
    next_id: u64,
}

/// A persisted row that could not be turned into a point.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Index of the row in the input
    pub index: usize,
    pub reason: String,
}

impl Itinerary {
    /// Creates an itinerary with no points on any day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the example itinerary shown to first-time users: a walk
    /// through Paris on day 1.
    pub fn sample() -> Self {
        let mut itinerary = Self::new();
        let day = DayKey::first();
        for (name, lat, lon) in [
            ("에펠탑", 48.8584, 2.2945),
            ("루브르 박물관", 48.8606, 2.3376),
            ("몽마르뜨 언덕", 48.8867, 2.3431),
        ] {
            if let Ok(coordinates) = Coordinates::new(lat, lon) {
                if let Ok(point) = NewPoint::at(name, coordinates) {
                    itinerary.append(day, point);
                }
            }
        }
        itinerary
    }

    /// Adds a point at the end of the day and returns it with its new id.
    pub fn append(&mut self, day: DayKey, point: NewPoint) -> &Point {
        let id = self.allocate_id();
        debug!("append {} to {day} as #{}", point.name, id.0);
        let points = self.days.entry(day).or_default();
        points.push(Point {
            id,
            name: point.name,
            coordinates: point.coordinates,
        });
        &points[points.len() - 1]
    }

    /// Swaps the point at `index` with its neighbour in `direction`.
    ///
    /// Returns `Ok(false)` without changing anything when the point is
    /// already first (moving up) or last (moving down).
    pub fn reorder(&mut self, day: DayKey, index: usize, direction: Direction) -> Result<bool> {
        let len = self.for_day(day).len();
        if index >= len {
            return Err(TripError::PositionOutOfRange {
                day,
                position: index + 1,
                len,
            });
        }

        let Some(neighbour) = direction.neighbour(index, len) else {
            debug!("reorder {day}[{index}] {} is a no-op", direction.as_str());
            return Ok(false);
        };

        if let Some(points) = self.days.get_mut(&day) {
            points.swap(index, neighbour);
        }
        Ok(true)
    }

    /// Removes the point at `index`; later points shift down by one.
    pub fn delete(&mut self, day: DayKey, index: usize) -> Result<Point> {
        let len = self.for_day(day).len();
        match self.days.get_mut(&day) {
            Some(points) if index < len => Ok(points.remove(index)),
            _ => Err(TripError::PositionOutOfRange {
                day,
                position: index + 1,
                len,
            }),
        }
    }

    /// Removes every point of a day and returns them in visit order.
    pub fn clear_day(&mut self, day: DayKey) -> Vec<Point> {
        self.days.remove(&day).unwrap_or_default()
    }

    /// Replaces the whole itinerary, e.g. after a bulk load.
    pub fn replace_all(&mut self, other: Itinerary) {
        *self = other;
    }

    /// Points of a day in visit order; empty for a day without points.
    pub fn for_day(&self, day: DayKey) -> &[Point] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every day of the trip with its points, in day order.
    pub fn days(&self) -> impl Iterator<Item = (DayKey, &[Point])> + '_ {
        DayKey::all().map(move |day| (day, self.for_day(day)))
    }

    /// Finds the day and index of a point.
    pub fn locate(&self, id: PointId) -> Option<(DayKey, usize)> {
        self.days.iter().find_map(|(day, points)| {
            points
                .iter()
                .position(|point| point.id == id)
                .map(|index| (*day, index))
        })
    }

    /// Identifier-based [`Itinerary::reorder`].
    pub fn move_point(&mut self, id: PointId, direction: Direction) -> Result<bool> {
        let (day, index) = self
            .locate(id)
            .ok_or(TripError::PointNotFound { id: id.0 })?;
        self.reorder(day, index, direction)
    }

    /// Identifier-based [`Itinerary::delete`].
    pub fn remove_point(&mut self, id: PointId) -> Result<(DayKey, Point)> {
        let (day, index) = self
            .locate(id)
            .ok_or(TripError::PointNotFound { id: id.0 })?;
        Ok((day, self.delete(day, index)?))
    }

    /// Total number of points across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compares days, names, coordinates and order, ignoring point ids.
    pub fn content_eq(&self, other: &Itinerary) -> bool {
        self.days().zip(other.days()).all(|((_, a), (_, b))| {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|(x, y)| x.name == y.name && x.coordinates == y.coordinates)
        })
    }

    /// Flattens the itinerary into rows, by day and then by visit order.
    pub fn to_records(&self) -> Vec<Record> {
        self.days()
            .flat_map(|(day, points)| points.iter().map(move |point| Record::from_point(day, point)))
            .collect()
    }

    /// Builds an itinerary from rows, keeping the row order within each day.
    ///
    /// Rows that fail validation are skipped and reported.
    pub fn from_records<'a, I>(records: I) -> (Self, Vec<RejectedRecord>)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut itinerary = Self::new();
        let mut rejected = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            match record.to_entry() {
                Ok((day, point)) => {
                    itinerary.append(day, point);
                }
                Err(e) => rejected.push(RejectedRecord {
                    index,
                    reason: e.to_string(),
                }),
            }
        }

        (itinerary, rejected)
    }

    fn allocate_id(&mut self) -> PointId {
        self.next_id += 1;
        PointId(self.next_id)
    }
}
