//! Point-level planner operations.

use log::debug;

use super::{blocking, Change, TripPlanner};
use crate::{
    error::{Result, TripError},
    extract::extract_coordinates,
    models::{NewPoint, Point, PointId},
    params::{AddPoint, MovePoint, PointRef, PointSource, RemovePoint},
};

impl TripPlanner {
    /// Appends a point to the end of a day and saves.
    ///
    /// The point is validated before anything changes: a link without
    /// `@lat,lon` gives [`TripError::CoordinatesNotFound`], a search without a
    /// match gives [`TripError::PlaceNotFound`], and an empty name or a zero
    /// manual coordinate gives [`TripError::InvalidInput`].
    pub async fn add_point(&mut self, params: &AddPoint) -> Result<Change<Point>> {
        let point = match &params.source {
            PointSource::Manual {
                latitude,
                longitude,
            } => NewPoint::new(&params.name, *latitude, *longitude)?,
            PointSource::Link(link) => {
                let coordinates =
                    extract_coordinates(link).ok_or_else(|| TripError::CoordinatesNotFound {
                        input: link.clone(),
                    })?;
                NewPoint::at(&params.name, coordinates)?
            }
            PointSource::Search(query) => {
                let geocoder = self.geocoder()?;
                let lookup = query.clone();
                let place = blocking(move || geocoder.search(&lookup))
                    .await?
                    .ok_or_else(|| TripError::PlaceNotFound {
                        query: query.clone(),
                    })?;
                debug!("'{query}' resolved to {}", place.display_name);
                let name = if params.name.trim().is_empty() {
                    place.name.as_str()
                } else {
                    params.name.as_str()
                };
                NewPoint::at(name, place.coordinates)?
            }
        };

        let added = self.itinerary.append(params.day, point).clone();
        Ok(self.commit(added).await)
    }

    /// Swaps a point with its neighbour within its day.
    ///
    /// Moving the first point up or the last point down is a no-op: the value
    /// is `false` and nothing is saved or redrawn.
    pub async fn move_point(&mut self, params: &MovePoint) -> Result<Change<bool>> {
        let id = self.resolve(params.point)?;
        if !self.itinerary.move_point(id, params.direction)? {
            return Ok(Change::unchanged(false));
        }
        Ok(self.commit(true).await)
    }

    /// Removes a point and saves.
    pub async fn remove_point(&mut self, params: &RemovePoint) -> Result<Change<Point>> {
        let id = self.resolve(params.point)?;
        let (day, removed) = self.itinerary.remove_point(id)?;
        debug!("removed {} from {day}", removed.name);
        Ok(self.commit(removed).await)
    }

    /// Turns a user-facing reference into the point's identifier.
    fn resolve(&self, point: PointRef) -> Result<PointId> {
        match point {
            PointRef::Id(id) => self
                .itinerary
                .locate(id)
                .map(|_| id)
                .ok_or(TripError::PointNotFound { id: id.0 }),
            PointRef::At { day, position } => {
                let points = self.itinerary.for_day(day);
                position
                    .checked_sub(1)
                    .and_then(|index| points.get(index))
                    .map(|point| point.id)
                    .ok_or(TripError::PositionOutOfRange {
                        day,
                        position,
                        len: points.len(),
                    })
            }
        }
    }
}
