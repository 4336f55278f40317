//! Playlist store queries.
//!
//! Playlists reference songs through a membership table; `track_count` is
//! derived from it at read time. `updated_at` advances on every membership
//! change, which makes the per-user listing a recency feed.

use crate::StorageError;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tuneloop_core::types::{Playlist, PlaylistDetail, PlaylistTrack};
use uuid::Uuid;

type Result<T> = std::result::Result<T, StorageError>;

/// Create a playlist owned by `owner_id`.
///
/// Name and description arrive pre-trimmed and validated. The fresh
/// playlist reports zero tracks without a second round trip.
pub async fn create(
    pool: &SqlitePool,
    owner_id: &str,
    name: &str,
    description: &str,
) -> Result<Playlist> {
    let now = Utc::now();
    let playlist = Playlist {
        id: Uuid::new_v4().to_string(),
        user_id: owner_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: now,
        updated_at: now,
        track_count: 0,
    };

    sqlx::query(
        "INSERT INTO playlists (id, user_id, name, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&playlist.id)
    .bind(&playlist.user_id)
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(playlist.created_at)
    .bind(playlist.updated_at)
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Playlists owned by a profile, most recently touched first
pub async fn list_by_user(pool: &SqlitePool, owner_id: &str) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.name, p.description, p.created_at, p.updated_at,
               COUNT(pt.id) AS track_count
        FROM playlists p
        LEFT JOIN playlist_tracks pt ON pt.playlist_id = p.id
        WHERE p.user_id = ?
        GROUP BY p.id
        ORDER BY p.updated_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// Load a playlist with its tracks, or `None` if it does not exist.
///
/// Tracks are ordered by when they were added, most recent first, and carry
/// the same like state as the catalogue listings.
pub async fn get_by_id(
    pool: &SqlitePool,
    playlist_id: &str,
    viewer_profile_id: Option<&str>,
) -> Result<Option<PlaylistDetail>> {
    let playlist_row = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.name, p.description, p.created_at, p.updated_at,
               COUNT(pt.id) AS track_count
        FROM playlists p
        LEFT JOIN playlist_tracks pt ON pt.playlist_id = p.id
        WHERE p.id = ?
        GROUP BY p.id
        "#,
    )
    .bind(playlist_id)
    .fetch_optional(pool)
    .await?;

    let Some(playlist_row) = playlist_row else {
        return Ok(None);
    };
    let playlist = playlist_from_row(&playlist_row);

    let track_rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               pt.added_at,
               COUNT(l.id) AS like_count,
               COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
        FROM playlist_tracks pt
        JOIN songs s ON s.id = pt.track_id
        LEFT JOIN likes l ON l.song_id = s.id
        WHERE pt.playlist_id = ?
        GROUP BY s.id
        ORDER BY pt.added_at DESC
        "#,
    )
    .bind(viewer_profile_id)
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    let tracks = track_rows
        .iter()
        .map(|row| PlaylistTrack {
            song: crate::songs::song_with_like_from_row(row),
            added_at: row.get("added_at"),
        })
        .collect();

    Ok(Some(PlaylistDetail { playlist, tracks }))
}

/// Delete a playlist; membership rows cascade with it.
///
/// Returns whether a row was actually removed. Ownership is checked by the
/// caller, not here.
pub async fn delete(pool: &SqlitePool, playlist_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(playlist_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Add a song to a playlist.
///
/// The membership insert is idempotent, but `updated_at` advances even when
/// the pair already existed. A failed insert skips the touch entirely.
pub async fn add_track(pool: &SqlitePool, playlist_id: &str, track_id: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO playlist_tracks (id, playlist_id, track_id, added_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (playlist_id, track_id) DO NOTHING",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(playlist_id)
    .bind(track_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    touch(pool, playlist_id).await
}

/// Remove a song from a playlist.
///
/// Returns whether a membership row was removed; `updated_at` is only
/// touched when one was.
pub async fn remove_track(pool: &SqlitePool, playlist_id: &str, track_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?")
        .bind(playlist_id)
        .bind(track_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }

    touch(pool, playlist_id).await?;
    Ok(true)
}

/// Whether `profile_id` owns the playlist.
///
/// False for unknown playlists as well, so callers cannot distinguish
/// missing from not-owned through this check alone.
pub async fn is_owner(pool: &SqlitePool, playlist_id: &str, profile_id: &str) -> Result<bool> {
    let row = sqlx::query("SELECT id FROM playlists WHERE id = ? AND user_id = ?")
        .bind(playlist_id)
        .bind(profile_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

// Helper functions

fn playlist_from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        track_count: row.get("track_count"),
    }
}

async fn touch(pool: &SqlitePool, playlist_id: &str) -> Result<()> {
    sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(playlist_id)
        .execute(pool)
        .await?;

    Ok(())
}
