/// Common test utilities and fixtures
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::util::ServiceExt;
use tuneloop_server::{api, state::AppState};

/// Router over a fresh in-memory database with migrations applied.
///
/// The pool is returned too so fixtures can write rows the API has no
/// endpoint for.
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = tuneloop_storage::create_pool("sqlite::memory:")
        .await
        .expect("create pool");
    tuneloop_storage::run_migrations(&pool)
        .await
        .expect("run migrations");

    let state = AppState::new(pool.clone());
    (api::router(state), pool)
}

/// Insert a catalogue song directly; the API exposes no write path for songs
pub async fn insert_song(pool: &SqlitePool, id: &str, title: &str, artist: &str) {
    sqlx::query(
        "INSERT INTO songs (id, title, artist, album, genre, cover_url, duration_ms, created_at)
         VALUES (?, ?, ?, '', '', '', 0, ?)",
    )
    .bind(id)
    .bind(title)
    .bind(artist)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("insert song");
}

/// Fire a request with no body
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    split_response(response).await
}

/// Fire a request carrying a JSON body
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    split_response(response).await
}

async fn split_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Register a profile through the API and return its record
pub async fn create_profile(app: &Router, username: &str) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/profile",
        json!({ "username": username, "displayName": username }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

/// Create a playlist through the API and return its record
pub async fn create_playlist(app: &Router, username: &str, name: &str) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/playlists",
        json!({ "username": username, "name": name }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}
