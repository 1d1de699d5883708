//! Route rendering for one day of the itinerary.
//!
//! [`render_route`] turns an ordered slice of points into a [`RouteView`]:
//! a map center, one marker per point and one segment per consecutive pair.
//! The view is plain data; [`html`] and [`geojson`] turn it into artifacts a
//! browser or GIS tool can open, and [`crate::display`] prints it as
//! markdown.
//!
//! ```text
//!  points[0] ──segment 1──▶ points[1] ──segment 2──▶ points[2]
//!  marker 1                 marker 2                 marker 3
//! ```
//!
//! Marker and segment order always follow visit order, so rendering the same
//! points twice gives the same view.

use serde::Serialize;

use crate::models::{Coordinates, Point, PointId};

pub mod geojson;
pub mod html;
pub mod link;

pub use link::{directions_url, TravelMode, DEFAULT_ROUTING_BASE};

/// Map center used when a day has no points (Seoul City Hall).
pub const FALLBACK_CENTER: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.9780,
};

/// Zoom level of the placeholder view.
pub const FALLBACK_ZOOM: u8 = 12;

/// Zoom level of a view centered on the first point.
pub const ROUTE_ZOOM: u8 = 13;

/// Rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    /// Travel mode written into every directions link
    pub travel_mode: TravelMode,
    /// Base URL of the routing service
    pub routing_base: String,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            travel_mode: TravelMode::default(),
            routing_base: DEFAULT_ROUTING_BASE.to_string(),
        }
    }
}

/// A marker for one point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    /// 1-based visit order
    pub order: usize,
    pub point_id: PointId,
    pub name: String,
    pub position: Coordinates,
}

impl Marker {
    /// Hover label, e.g. `1. 에펠탑`.
    pub fn tooltip(&self) -> String {
        format!("{}. {}", self.order, self.name)
    }
}

/// The connection between two consecutive points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Segment {
    /// Visit order of the origin marker
    pub from_order: usize,
    /// Visit order of the destination marker
    pub to_order: usize,
    pub from: Coordinates,
    pub to: Coordinates,
    pub directions_url: String,
}

impl Segment {
    /// Short label, e.g. `1 -> 2`.
    pub fn label(&self) -> String {
        format!("{} -> {}", self.from_order, self.to_order)
    }
}

/// A renderable map of one day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
}

impl RouteView {
    /// The placeholder view for a day without points.
    pub fn placeholder() -> Self {
        Self {
            center: FALLBACK_CENTER,
            zoom: FALLBACK_ZOOM,
            markers: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// `false` for the placeholder; the caller should prompt for points
    /// instead of showing a route.
    pub fn has_content(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// Renders the points of one day in visit order.
pub fn render_route(points: &[Point], options: &RouteOptions) -> RouteView {
    let Some(first) = points.first() else {
        return RouteView::placeholder();
    };

    let markers = points
        .iter()
        .enumerate()
        .map(|(i, point)| Marker {
            order: i + 1,
            point_id: point.id,
            name: point.name.clone(),
            position: point.coordinates,
        })
        .collect();

    let segments = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Segment {
            from_order: i + 1,
            to_order: i + 2,
            from: pair[0].coordinates,
            to: pair[1].coordinates,
            directions_url: directions_url(
                &options.routing_base,
                &pair[0].coordinates,
                &pair[1].coordinates,
                options.travel_mode,
            ),
        })
        .collect();

    RouteView {
        center: first.coordinates,
        zoom: ROUTE_ZOOM,
        markers,
        segments,
    }
}
