//! Profile directory queries

use crate::StorageError;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tuneloop_core::types::{CreateProfile, Profile};
use uuid::Uuid;

type Result<T> = std::result::Result<T, StorageError>;

/// Look up a profile by its unique username
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Profile>> {
    let row = sqlx::query(
        "SELECT id, username, display_name, bio, avatar_url, created_at
         FROM profiles
         WHERE username = ?
         LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| profile_from_row(&row)))
}

/// Create a profile.
///
/// The caller validates the input and pre-checks the username; a racing
/// duplicate still fails on the unique index.
pub async fn create(pool: &SqlitePool, input: CreateProfile) -> Result<Profile> {
    let profile = Profile {
        id: Uuid::new_v4().to_string(),
        username: input.username,
        display_name: input.display_name,
        bio: input.bio.unwrap_or_default(),
        avatar_url: input.avatar_url.unwrap_or_default(),
        created_at: Utc::now(),
    };

    sqlx::query(
        "INSERT INTO profiles (id, username, display_name, bio, avatar_url, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&profile.id)
    .bind(&profile.username)
    .bind(&profile.display_name)
    .bind(&profile.bio)
    .bind(&profile.avatar_url)
    .bind(profile.created_at)
    .execute(pool)
    .await?;

    Ok(profile)
}

/// All profiles, newest first
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Profile>> {
    let rows = sqlx::query(
        "SELECT id, username, display_name, bio, avatar_url, created_at
         FROM profiles
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(profile_from_row).collect())
}

// Helper functions

fn profile_from_row(row: &SqliteRow) -> Profile {
    Profile {
        id: row.get("id"),
        username: row.get("username"),
        display_name: row.get("display_name"),
        bio: row.get("bio"),
        avatar_url: row.get("avatar_url"),
        created_at: row.get("created_at"),
    }
}

