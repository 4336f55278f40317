/// API route modules
use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;
use tuneloop_core::Profile;

pub mod health;
pub mod playlists;
pub mod profiles;
pub mod songs;

/// Route table, shared by the binary and the integration tests
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health))
        // Profiles
        .route(
            "/profile",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route("/profile/:username", get(profiles::get_profile))
        // Songs
        .route("/songs", get(songs::feed))
        .route("/songs/trending", get(songs::trending))
        .route("/songs/suggest", get(songs::suggest))
        .route("/songs/search", get(songs::search))
        .route("/songs/:song_id/like", post(songs::like).delete(songs::unlike))
        .route("/songs/liked/:username", get(songs::liked_by_user))
        // Playlists
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/user/:username", get(playlists::list_by_user))
        .route(
            "/playlists/:id",
            get(playlists::get_playlist).delete(playlists::delete_playlist),
        )
        .route("/playlists/:id/tracks", post(playlists::add_track))
        .route(
            "/playlists/:id/tracks/:track_id",
            delete(playlists::remove_track),
        )
        .with_state(state)
}

// Shared extraction helpers. Acting endpoints identify the caller by a
// username in the body or query string; reads treat the username as an
// optional viewer hint instead.

/// Resolve an acting username or fail with 404
pub(crate) async fn resolve_profile(pool: &SqlitePool, username: &str) -> Result<Profile> {
    tuneloop_storage::profiles::find_by_username(pool, username)
        .await?
        .ok_or_else(|| ServerError::NotFound("Profile not found".to_string()))
}

/// Resolve an optional viewer username to a profile id.
///
/// Unknown or blank usernames degrade to an anonymous view rather than an
/// error, so public pages keep working with a stale viewer.
pub(crate) async fn resolve_viewer(
    pool: &SqlitePool,
    username: Option<&str>,
) -> Result<Option<String>> {
    let Some(username) = username else {
        return Ok(None);
    };
    if username.trim().is_empty() {
        return Ok(None);
    }

    let profile = tuneloop_storage::profiles::find_by_username(pool, username.trim()).await?;
    Ok(profile.map(|p| p.id))
}

/// A username field that must be present and non-blank
pub(crate) fn required_username(username: Option<&str>) -> Result<String> {
    let username = username.unwrap_or("").trim();
    if username.is_empty() {
        return Err(ServerError::Validation("Username is required".to_string()));
    }
    Ok(username.to_string())
}
