#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    path::PathBuf,
    thread::{self, JoinHandle},
};

use tempfile::TempDir;
use tripline_core::{storage::StorageConfig, TripPlanner, TripPlannerBuilder};

/// Helper function to create a planner backed by a fresh SQLite file
pub async fn create_test_planner() -> (TempDir, PathBuf, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_storage(StorageConfig::Sqlite {
            path: Some(db_path.clone()),
        })
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, db_path, planner)
}

/// What the one-shot server received.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves exactly one HTTP request with the given status line and JSON body.
///
/// Returns the base URL and a handle yielding the request that was received.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let url = format!("http://{}", listener.local_addr().unwrap());
    let status = status.to_string();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("Failed to accept connection");
        let mut reader = BufReader::new(&stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut content_length = 0;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }

        let mut request_body = vec![0; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        (&stream).write_all(response.as_bytes()).unwrap();
        (&stream).flush().unwrap();

        RecordedRequest {
            method,
            path,
            body: String::from_utf8(request_body).unwrap(),
        }
    });

    (url, handle)
}
