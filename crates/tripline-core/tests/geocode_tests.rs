mod common;

use std::{sync::Arc, time::Duration};

use tripline_core::{
    geocode::{Geocoder, NominatimGeocoder},
    params::{AddPoint, PointSource},
    storage::StorageConfig,
    Coordinates, DayKey, TripError, TripPlannerBuilder,
};

use common::serve_once;

fn geocoder(url: &str) -> NominatimGeocoder {
    NominatimGeocoder::new(url, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_search_decodes_first_hit() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"lat":"48.8867","lon":"2.3431","name":"Montmartre",
             "display_name":"Montmartre, Paris 18e Arrondissement, Paris, France"},
            {"lat":"45.0","lon":"5.0","name":"Elsewhere","display_name":"Elsewhere"}]"#,
    );

    let place = geocoder(&url).search("몽마르뜨 언덕").unwrap().unwrap();
    let request = server.join().unwrap();

    assert_eq!(request.method, "GET");
    assert!(request.path.starts_with("/search?q="));
    assert!(request.path.ends_with("&format=jsonv2&limit=1"));
    assert_eq!(place.name, "Montmartre");
    assert!(place.display_name.ends_with("France"));
    assert_eq!(place.coordinates, Coordinates::new(48.8867, 2.3431).unwrap());
}

#[test]
fn test_search_without_hits_is_none() {
    let (url, server) = serve_once("200 OK", "[]");
    assert!(geocoder(&url).search("nowhere at all").unwrap().is_none());
    server.join().unwrap();
}

#[test]
fn test_search_reports_error_status() {
    let (url, server) = serve_once("503 Service Unavailable", r#"{"error":"busy"}"#);

    let err = geocoder(&url).search("Lyon").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TripError::RemoteStatus { status: 503, .. }));
    assert!(!err.is_input_error());
}

#[test]
fn test_search_rejects_malformed_body() {
    let (url, server) = serve_once("200 OK", r#"{"not":"a list"}"#);

    let err = geocoder(&url).search("Lyon").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TripError::Http { .. }));
}

#[tokio::test]
async fn test_planner_search_with_no_match_changes_nothing() {
    let (url, server) = serve_once("200 OK", "[]");
    let mut planner = TripPlannerBuilder::new()
        .with_storage(StorageConfig::Memory { seed_sample: true })
        .with_geocoder(Arc::new(geocoder(&url)))
        .build()
        .await
        .unwrap();

    let err = planner
        .add_point(&AddPoint {
            day: DayKey::first(),
            name: String::new(),
            source: PointSource::Search("Atlantis".to_string()),
        })
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TripError::PlaceNotFound { .. }));
    assert!(err.needs_manual_entry());
    assert_eq!(planner.day(DayKey::first()).len(), 3);
}
