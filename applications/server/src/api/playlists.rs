/// Playlist API routes.
///
/// Mutations all follow the same shape: resolve the acting profile, check
/// ownership, then touch storage. The ownership guard returns 403 for
/// unknown playlists too, so strangers cannot probe which ids exist.
use super::{required_username, resolve_profile, resolve_viewer};
use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tuneloop_storage::{playlists, songs};
use uuid::Uuid;

const NAME_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 1000;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePlaylistRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackRequest {
    pub username: Option<String>,
    pub track_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnerActionRequest {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub username: Option<String>,
}

/// POST /playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    body: Option<Json<CreatePlaylistRequest>>,
) -> Result<impl IntoResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let username = required_username(req.username.as_deref())?;

    let name = req.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(ServerError::Validation(
            "Playlist name is required".to_string(),
        ));
    }
    if name.chars().count() > NAME_MAX {
        return Err(ServerError::Validation(
            "Playlist name must be at most 200 characters".to_string(),
        ));
    }

    let description = req.description.as_deref().unwrap_or("").trim().to_string();
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ServerError::Validation(
            "Description must be at most 1000 characters".to_string(),
        ));
    }

    let profile = resolve_profile(&state.pool, &username).await?;
    let playlist = playlists::create(&state.pool, &profile.id, &name, &description).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "ok", "data": playlist })),
    ))
}

/// GET /playlists/user/:username
/// A profile's playlists, most recently touched first
pub async fn list_by_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let profile = resolve_profile(&state.pool, &username).await?;
    let data = playlists::list_by_user(&state.pool, &profile.id).await?;
    Ok(Json(json!({ "status": "ok", "data": data })))
}

/// GET /playlists/:id
/// Playlist details with tracks; the optional username personalizes
/// the per-track like state
pub async fn get_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<Value>> {
    let viewer = resolve_viewer(&state.pool, query.username.as_deref()).await?;
    let detail = playlists::get_by_id(&state.pool, &id, viewer.as_deref())
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(json!({ "status": "ok", "data": detail })))
}

/// DELETE /playlists/:id
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<OwnerActionRequest>>,
) -> Result<Json<Value>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let username = required_username(req.username.as_deref())?;
    let profile = resolve_profile(&state.pool, &username).await?;
    guard_ownership(&state.pool, &id, &profile.id).await?;

    playlists::delete(&state.pool, &id).await?;
    Ok(Json(json!({ "status": "ok", "message": "Playlist deleted" })))
}

/// POST /playlists/:id/tracks
pub async fn add_track(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<AddTrackRequest>>,
) -> Result<Json<Value>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let track_id = req.track_id.as_deref().unwrap_or("").trim().to_string();
    if track_id.is_empty() {
        return Err(ServerError::Validation("Track ID is required".to_string()));
    }
    if Uuid::parse_str(&track_id).is_err() {
        return Err(ServerError::Validation("Invalid track ID".to_string()));
    }

    let username = required_username(req.username.as_deref())?;
    let profile = resolve_profile(&state.pool, &username).await?;
    guard_ownership(&state.pool, &id, &profile.id).await?;

    // Membership must never point at a song the catalogue does not have
    songs::get_by_id(&state.pool, &track_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    playlists::add_track(&state.pool, &id, &track_id).await?;
    Ok(Json(
        json!({ "status": "ok", "message": "Track added to playlist" }),
    ))
}

/// DELETE /playlists/:id/tracks/:track_id
pub async fn remove_track(
    Path((id, track_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<Value>> {
    let username = required_username(query.username.as_deref())?;
    let profile = resolve_profile(&state.pool, &username).await?;
    guard_ownership(&state.pool, &id, &profile.id).await?;

    let removed = playlists::remove_track(&state.pool, &id, &track_id).await?;
    if !removed {
        return Err(ServerError::NotFound("Track not in playlist".to_string()));
    }

    Ok(Json(
        json!({ "status": "ok", "message": "Track removed from playlist" }),
    ))
}

// Helper functions

async fn guard_ownership(pool: &SqlitePool, playlist_id: &str, profile_id: &str) -> Result<()> {
    if !playlists::is_owner(pool, playlist_id, profile_id).await? {
        return Err(ServerError::Forbidden(
            "Forbidden: not playlist owner".to_string(),
        ));
    }
    Ok(())
}
