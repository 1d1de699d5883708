//! GeoJSON export of a [`RouteView`].

use serde_json::{json, Value};

use super::RouteView;

/// Builds a `FeatureCollection`: one `Point` feature per marker and one
/// `LineString` feature per segment, in visit order.
///
/// GeoJSON positions are `[longitude, latitude]`.
pub fn to_geojson(view: &RouteView) -> Value {
    let markers = view.markers.iter().map(|marker| {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": marker.position.lon_lat(),
            },
            "properties": {
                "order": marker.order,
                "name": marker.name,
                "label": marker.tooltip(),
            },
        })
    });
    let segments = view.segments.iter().map(|segment| {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [segment.from.lon_lat(), segment.to.lon_lat()],
            },
            "properties": {
                "from": segment.from_order,
                "to": segment.to_order,
                "label": segment.label(),
                "directions_url": segment.directions_url,
            },
        })
    });

    json!({
        "type": "FeatureCollection",
        "features": markers.chain(segments).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        itinerary::Itinerary,
        models::DayKey,
        route::{render_route, RouteOptions},
    };

    #[test]
    fn test_feature_collection_layout() {
        let view = render_route(Itinerary::sample().for_day(DayKey::first()), &RouteOptions::default());
        let collection = to_geojson(&view);

        assert_eq!(collection["type"], "FeatureCollection");
        let features = collection["features"].as_array().unwrap();
        assert_eq!(features.len(), 5);

        assert_eq!(features[0]["geometry"]["type"], "Point");
        assert_eq!(features[0]["geometry"]["coordinates"], json!([2.2945, 48.8584]));
        assert_eq!(features[0]["properties"]["label"], "1. 에펠탑");

        assert_eq!(features[3]["geometry"]["type"], "LineString");
        assert_eq!(features[3]["properties"]["label"], "1 -> 2");
        assert!(features[4]["properties"]["directions_url"]
            .as_str()
            .unwrap()
            .contains("origin=48.8606,2.3376&destination=48.8867,2.3431"));
    }

    #[test]
    fn test_empty_view_has_no_features() {
        let collection = to_geojson(&RouteView::placeholder());
        assert_eq!(collection["features"], json!([]));
    }
}
