mod common;

use std::time::Duration;

use tripline_core::{
    display::DayPoints,
    params::{AddPoint, MovePoint, PointRef, PointSource, RemovePoint},
    storage::{SqliteBackend, StorageConfig},
    Backend, DayKey, Direction, RouteOptions, TravelMode, TripPlannerBuilder,
};

use common::{create_test_planner, serve_once};

fn link(lat: f64, lon: f64) -> PointSource {
    PointSource::Link(format!("https://www.google.com/maps/place/x/@{lat},{lon},17z"))
}

#[tokio::test]
async fn test_paris_day_workflow() {
    let (_temp_dir, db_path, mut planner) = create_test_planner().await;
    let day = DayKey::first();

    for (name, lat, lon) in [
        ("에펠탑", 48.8584, 2.2945),
        ("루브르 박물관", 48.8606, 2.3376),
        ("몽마르뜨 언덕", 48.8867, 2.3431),
    ] {
        let change = planner
            .add_point(&AddPoint {
                day,
                name: name.to_string(),
                source: link(lat, lon),
            })
            .await
            .expect("Failed to add point");
        assert!(change.persistence.is_saved());
    }

    let view = planner.render_day(day, &RouteOptions::default());
    assert_eq!(view.markers.len(), 3);
    assert_eq!(view.segments.len(), 2);
    assert_eq!(view.markers[0].tooltip(), "1. 에펠탑");
    assert!(view.segments[1]
        .directions_url
        .ends_with("origin=48.8606,2.3376&destination=48.8867,2.3431&travelmode=transit"));

    // Move the Louvre to the front, then drop the Eiffel Tower.
    planner
        .move_point(&MovePoint {
            point: PointRef::At { day, position: 2 },
            direction: Direction::Previous,
        })
        .await
        .expect("Failed to move point");
    planner
        .remove_point(&RemovePoint {
            point: PointRef::At { day, position: 2 },
        })
        .await
        .expect("Failed to remove point");

    let output = DayPoints::new(day, planner.day(day)).to_string();
    assert!(output.contains("1. **루브르 박물관**"));
    assert!(output.contains("2. **몽마르뜨 언덕**"));

    // The database holds exactly what the session holds.
    let stored = SqliteBackend::open(&db_path).unwrap().load().unwrap();
    assert!(stored.content_eq(planner.itinerary()));
}

#[tokio::test]
async fn test_session_survives_restart() {
    let (_temp_dir, db_path, mut planner) = create_test_planner().await;
    let day = DayKey::new(13).unwrap();
    planner
        .add_point(&AddPoint {
            day,
            name: "Charles de Gaulle".to_string(),
            source: PointSource::Manual {
                latitude: 49.0097,
                longitude: 2.5479,
            },
        })
        .await
        .unwrap();
    drop(planner);

    let reopened = TripPlannerBuilder::new()
        .with_storage(StorageConfig::Sqlite {
            path: Some(db_path),
        })
        .build()
        .await
        .unwrap();
    assert_eq!(reopened.day(day)[0].name, "Charles de Gaulle");
}

#[tokio::test]
async fn test_route_options_change_links() {
    let mut planner = TripPlannerBuilder::new()
        .with_storage(StorageConfig::Memory { seed_sample: true })
        .build()
        .await
        .unwrap();
    planner
        .move_point(&MovePoint {
            point: PointRef::At {
                day: DayKey::first(),
                position: 3,
            },
            direction: Direction::Next,
        })
        .await
        .unwrap();

    let options = RouteOptions {
        travel_mode: TravelMode::Walking,
        routing_base: "https://maps.example.com".to_string(),
    };
    let view = planner.render_day(DayKey::first(), &options);
    assert!(view.segments[0]
        .directions_url
        .starts_with("https://maps.example.com/dir/?api=1&origin=48.8584,2.2945"));
    assert!(view.segments[0].directions_url.ends_with("travelmode=walking"));
}

#[tokio::test]
async fn test_remote_planner_keeps_working_offline() {
    let (url, server) = serve_once("500 Internal Server Error", "");
    let mut planner = TripPlannerBuilder::new()
        .with_storage(StorageConfig::Remote {
            endpoint: url,
            timeout: Duration::from_secs(5),
        })
        .build()
        .await
        .expect("An unavailable remote must not fail the build");
    server.join().unwrap();
    assert!(planner.itinerary().is_empty());

    // No server is listening any more; the save fails but the point stays.
    let change = planner
        .add_point(&AddPoint {
            day: DayKey::first(),
            name: "에펠탑".to_string(),
            source: link(48.8584, 2.2945),
        })
        .await
        .unwrap();
    assert!(change.persistence.is_failed());
    assert_eq!(planner.day(DayKey::first()).len(), 1);
}
