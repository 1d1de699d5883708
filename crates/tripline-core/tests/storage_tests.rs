mod common;

use std::time::Duration;

use serde_json::Value;
use tempfile::TempDir;
use tripline_core::{
    storage::{open_backend, CsvFileBackend, RemoteBackend, SqliteBackend},
    Backend, DayKey, Itinerary, NewPoint, StorageConfig, TripError,
};

use common::serve_once;

fn sample_with_second_day() -> Itinerary {
    let mut itinerary = Itinerary::sample();
    let day = DayKey::new(2).unwrap();
    itinerary.append(day, NewPoint::new("Versailles", 48.8049, 2.1204).unwrap());
    itinerary
}

#[test]
fn test_every_durable_backend_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let backends: Vec<Box<dyn Backend>> = vec![
        Box::new(SqliteBackend::open(temp_dir.path().join("trip.db")).unwrap()),
        Box::new(CsvFileBackend::new(temp_dir.path().join("trip.csv"))),
    ];
    let itinerary = sample_with_second_day();

    for backend in backends {
        let report = backend.save(&itinerary).unwrap();
        assert_eq!(report.points, 4);
        assert_eq!(report.backend, backend.kind());
        assert!(backend.load().unwrap().content_eq(&itinerary));
    }
}

#[test]
fn test_last_write_wins_between_handles() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig::Sqlite {
        path: Some(temp_dir.path().join("shared.db")),
    };
    let first = open_backend(&config).unwrap();
    let second = open_backend(&config).unwrap();

    first.save(&sample_with_second_day()).unwrap();
    second.save(&Itinerary::sample()).unwrap();

    assert!(first.load().unwrap().content_eq(&Itinerary::sample()));
}

#[test]
fn test_remote_load_accepts_bare_array() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"day":"1일차","name":"에펠탑","lat":48.8584,"lon":2.2945},
            {"day":"3일차","name":"Lyon","lat":45.764,"lon":4.8357}]"#,
    );
    let backend = RemoteBackend::new(&format!("{url}/trip"), Duration::from_secs(5)).unwrap();

    let itinerary = backend.load().unwrap();
    let request = server.join().unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/trip");
    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.for_day(DayKey::new(3).unwrap())[0].name, "Lyon");
}

#[test]
fn test_remote_load_accepts_wrapped_rows_and_skips_bad_ones() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"data":[{"day":"1일차","name":"에펠탑","lat":48.8584,"lon":2.2945},
                    {"day":"1일차","name":"broken","lat":"north","lon":2.0},
                    {"day":"77일차","name":"too late","lat":1.0,"lon":1.0}]}"#,
    );
    let backend = RemoteBackend::new(&url, Duration::from_secs(5)).unwrap();

    let itinerary = backend.load().unwrap();
    server.join().unwrap();
    assert_eq!(itinerary.len(), 1);
}

#[test]
fn test_remote_save_posts_full_itinerary() {
    let (url, server) = serve_once("200 OK", r#"{"ok":true}"#);
    let backend = RemoteBackend::new(&format!("{url}/trip"), Duration::from_secs(5)).unwrap();

    let report = backend.save(&sample_with_second_day()).unwrap();
    let request = server.join().unwrap();

    assert_eq!(report.points, 4);
    assert_eq!(request.method, "POST");
    let payload: Value = serde_json::from_str(&request.body).unwrap();
    let rows = payload["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["day"], "1일차");
    assert_eq!(rows[0]["name"], "에펠탑");
    assert_eq!(rows[3]["day"], "2일차");
    assert_eq!(rows[3]["lat"], 48.8049);
}

#[test]
fn test_remote_error_status_is_reported() {
    let (url, server) = serve_once("503 Service Unavailable", r#"{"error":"maintenance"}"#);
    let backend = RemoteBackend::new(&url, Duration::from_secs(5)).unwrap();

    let err = backend.save(&Itinerary::sample()).unwrap_err();
    server.join().unwrap();

    match err {
        TripError::RemoteStatus { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body.as_deref(), Some(r#"{"error":"maintenance"}"#));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unreachable_remote_is_http_error() {
    // Bind and drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let backend =
        RemoteBackend::new(&format!("http://127.0.0.1:{port}/trip"), Duration::from_secs(2))
            .unwrap();
    assert!(matches!(backend.load(), Err(TripError::Http { .. })));
}
