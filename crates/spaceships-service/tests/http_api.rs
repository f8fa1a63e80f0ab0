//! End-to-end tests for the catalog HTTP surface.
//!
//! Each test seeds a throwaway SQLite database, wires the real object graph
//! over it, and drives the router through `axum_test::TestServer`.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use rusqlite::Connection;
use tempfile::NamedTempFile;

use spaceships_lib::{Config, SpaceshipService, SqliteSpaceshipStore};
use spaceships_service::{router, AppState};

fn seeded_db(rows: &[(i64, &str)]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file should be created");
    let conn = Connection::open(file.path()).expect("database should open");
    conn.execute(
        "CREATE TABLE spaceships (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
        [],
    )
    .expect("table should be created");
    for (id, name) in rows {
        conn.execute(
            "INSERT INTO spaceships (id, name) VALUES (?1, ?2)",
            rusqlite::params![id, name],
        )
        .expect("row should insert");
    }
    file
}

fn test_server(db: &NamedTempFile, service_enabled: bool) -> TestServer {
    let config = Config::new(db.path(), 0, service_enabled);
    let store = SqliteSpaceshipStore::open(config.database_path()).expect("store should open");
    let service = SpaceshipService::new(config, Arc::new(store));
    TestServer::new(router(AppState::new(service))).expect("test server should start")
}

#[tokio::test]
async fn list_returns_seeded_spaceships_as_json_array() {
    let db = seeded_db(&[(1, "Enterprise")]);
    let server = test_server(&db, true);

    let response = server.get("/spaceships").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"[{"ID":1,"Name":"Enterprise"}]"#);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));
}

#[tokio::test]
async fn list_returns_empty_array_for_empty_table() {
    let db = seeded_db(&[]);
    let server = test_server(&db, true);

    let response = server.get("/spaceships").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn list_returns_empty_array_while_gate_is_closed() {
    let db = seeded_db(&[(1, "Enterprise")]);
    let server = test_server(&db, false);

    let response = server.get("/spaceships").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn fetch_returns_single_spaceship_as_json_object() {
    let db = seeded_db(&[(1, "Enterprise"), (2, "Falcon")]);
    let server = test_server(&db, true);

    let response = server.get("/spaceships/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"{"ID":1,"Name":"Enterprise"}"#);
}

#[tokio::test]
async fn fetch_returns_zero_valued_record_while_gate_is_closed() {
    let db = seeded_db(&[(1, "Enterprise")]);
    let server = test_server(&db, false);

    let response = server.get("/spaceships/42").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"{"ID":0,"Name":""}"#);
}

#[tokio::test]
async fn fetch_of_absent_id_yields_empty_bodied_500() {
    let db = seeded_db(&[(1, "Enterprise")]);
    let server = test_server(&db, true);

    let response = server.get("/spaceships/999").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn fetch_of_non_integer_id_yields_empty_bodied_500() {
    let db = seeded_db(&[(1, "Enterprise")]);
    let server = test_server(&db, true);

    let response = server.get("/spaceships/abc").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn repeated_reads_are_byte_identical() {
    let db = seeded_db(&[(1, "Enterprise"), (2, "Falcon")]);
    let server = test_server(&db, true);

    let first = server.get("/spaceships").await;
    let second = server.get("/spaceships").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.as_bytes(), second.as_bytes());

    let first = server.get("/spaceships/2").await;
    let second = server.get("/spaceships/2").await;

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first.text(), r#"{"ID":2,"Name":"Falcon"}"#);
}
