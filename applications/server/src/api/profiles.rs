/// Profile directory API routes
use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tuneloop_core::types::CreateProfile;
use tuneloop_storage::profiles;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// GET /profile
/// Every profile in the directory, newest first
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Value>> {
    let all = profiles::list_all(&state.pool).await?;
    Ok(Json(json!({ "status": "ok", "data": all })))
}

/// GET /profile/:username
pub async fn get_profile(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let profile = profiles::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Profile not found: {}", username)))?;

    Ok(Json(json!({ "status": "ok", "data": profile })))
}

/// POST /profile
/// Register a new profile; the username becomes its public handle
pub async fn create_profile(
    State(state): State<AppState>,
    body: Option<Json<CreateProfileRequest>>,
) -> Result<impl IntoResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let username = req.username.as_deref().unwrap_or("").trim().to_string();
    if username.is_empty() {
        return Err(ServerError::Validation("Username is required".to_string()));
    }
    let username_chars = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_chars) {
        return Err(ServerError::Validation(
            "Username must be between 3 and 50 characters".to_string(),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ServerError::Validation(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }

    let display_name = req.display_name.as_deref().unwrap_or("").trim().to_string();
    if display_name.is_empty() {
        return Err(ServerError::Validation(
            "Display name is required".to_string(),
        ));
    }

    // Pre-check for a friendly 409; the unique index backs this up under
    // concurrent registration.
    if profiles::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(ServerError::Conflict("Username already taken".to_string()));
    }

    let profile = profiles::create(
        &state.pool,
        CreateProfile {
            username,
            display_name,
            bio: req.bio.map(|b| b.trim().to_string()),
            avatar_url: req.avatar_url.map(|a| a.trim().to_string()),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "ok", "data": profile })),
    ))
}
