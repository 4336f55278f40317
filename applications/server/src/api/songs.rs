/// Song catalogue and like ledger API routes
use super::{required_username, resolve_profile, resolve_viewer};
use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tuneloop_core::types::SearchMode;
use tuneloop_storage::songs;

/// Feed page size
const FEED_LIMIT: i64 = 50;
/// Default trending window
const TRENDING_LIMIT: i64 = 10;
/// Autocomplete cap
const SUGGEST_LIMIT: i64 = 8;

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub username: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub by: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    pub username: Option<String>,
}

/// GET /songs
/// The catalogue feed, most liked first
pub async fn feed(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<Value>> {
    let viewer = resolve_viewer(&state.pool, query.username.as_deref()).await?;
    let data = songs::list_all(&state.pool, viewer.as_deref(), FEED_LIMIT).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}

/// GET /songs/trending
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<Value>> {
    // malformed limits fall back to the default
    let limit = query
        .limit
        .as_deref()
        .and_then(|l| l.parse().ok())
        .unwrap_or(TRENDING_LIMIT)
        .clamp(1, FEED_LIMIT);
    let viewer = resolve_viewer(&state.pool, query.username.as_deref()).await?;
    let data = songs::trending(&state.pool, viewer.as_deref(), limit).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}

/// GET /songs/suggest
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<Value>> {
    let q = query.q.as_deref().unwrap_or("").trim().to_string();
    if q.is_empty() {
        // nothing typed yet, nothing to suggest
        return Ok(Json(json!({ "status": "ok", "data": [] })));
    }

    let data = songs::suggest(&state.pool, &q, SUGGEST_LIMIT).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}

/// GET /songs/search
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let q = query.q.as_deref().unwrap_or("").trim().to_string();
    if q.is_empty() {
        return Err(ServerError::Validation(
            "Search query \"q\" is required".to_string(),
        ));
    }

    let by = query.by.as_deref().unwrap_or("all");
    let mode = SearchMode::from_str(by).ok_or_else(|| {
        ServerError::Validation("Parameter \"by\" must be artist, title, or all".to_string())
    })?;

    let viewer = resolve_viewer(&state.pool, query.username.as_deref()).await?;
    let data = songs::search(&state.pool, &q, mode, viewer.as_deref()).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}

/// POST /songs/:song_id/like
pub async fn like(
    Path(song_id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<LikeRequest>>,
) -> Result<Json<Value>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let username = required_username(req.username.as_deref())?;
    let profile = resolve_profile(&state.pool, &username).await?;

    songs::get_by_id(&state.pool, &song_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    songs::like(&state.pool, &profile.id, &song_id).await?;
    Ok(Json(json!({ "status": "ok", "message": "Song liked" })))
}

/// DELETE /songs/:song_id/like
pub async fn unlike(
    Path(song_id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<LikeRequest>>,
) -> Result<Json<Value>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let username = required_username(req.username.as_deref())?;
    let profile = resolve_profile(&state.pool, &username).await?;

    // No song lookup here: removing a like that cannot exist is a no-op
    songs::unlike(&state.pool, &profile.id, &song_id).await?;
    Ok(Json(json!({ "status": "ok", "message": "Song unliked" })))
}

/// GET /songs/liked/:username
/// Songs the profile has liked, most recent first
pub async fn liked_by_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let profile = resolve_profile(&state.pool, &username).await?;
    let data = songs::liked_by_user(&state.pool, &profile.id).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}
