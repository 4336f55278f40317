//! Song catalogue and like ledger queries.
//!
//! Every listing that returns songs also carries the derived like state:
//! a total `like_count` and, when a viewer is given, whether that viewer
//! has liked each song. Both are computed at read time from the ledger,
//! never stored.

use crate::StorageError;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tuneloop_core::types::{SearchMode, Song, SongWithLike, Suggestion, SuggestionKind};
use uuid::Uuid;

mod seed;
pub use seed::seed_catalog;

type Result<T> = std::result::Result<T, StorageError>;

/// Look up a single song by id
pub async fn get_by_id(pool: &SqlitePool, song_id: &str) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, artist, album, genre, cover_url, duration_ms, created_at
         FROM songs
         WHERE id = ?",
    )
    .bind(song_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| song_from_row(&row)))
}

/// Songs whose artist contains `query`, case-insensitively
pub async fn search_by_artist(
    pool: &SqlitePool,
    query: &str,
    viewer_profile_id: Option<&str>,
) -> Result<Vec<SongWithLike>> {
    let pattern = format!("%{}%", query);
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               COUNT(l.id) AS like_count,
               COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
        FROM songs s
        LEFT JOIN likes l ON l.song_id = s.id
        WHERE s.artist LIKE ?
        GROUP BY s.id
        ORDER BY s.artist, s.title
        "#,
    )
    .bind(viewer_profile_id)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_with_like_from_row).collect())
}

/// Songs whose title contains `query`, case-insensitively
pub async fn search_by_title(
    pool: &SqlitePool,
    query: &str,
    viewer_profile_id: Option<&str>,
) -> Result<Vec<SongWithLike>> {
    let pattern = format!("%{}%", query);
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               COUNT(l.id) AS like_count,
               COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
        FROM songs s
        LEFT JOIN likes l ON l.song_id = s.id
        WHERE s.title LIKE ?
        GROUP BY s.id
        ORDER BY s.title
        "#,
    )
    .bind(viewer_profile_id)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_with_like_from_row).collect())
}

/// Search dispatch: artist, title, or both fields.
///
/// A song matching on both fields in `All` mode still appears once; the
/// grouping collapses it.
pub async fn search(
    pool: &SqlitePool,
    query: &str,
    mode: SearchMode,
    viewer_profile_id: Option<&str>,
) -> Result<Vec<SongWithLike>> {
    match mode {
        SearchMode::Artist => search_by_artist(pool, query, viewer_profile_id).await,
        SearchMode::Title => search_by_title(pool, query, viewer_profile_id).await,
        SearchMode::All => {
            let pattern = format!("%{}%", query);
            let rows = sqlx::query(
                r#"
                SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
                       COUNT(l.id) AS like_count,
                       COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
                FROM songs s
                LEFT JOIN likes l ON l.song_id = s.id
                WHERE s.artist LIKE ? OR s.title LIKE ?
                GROUP BY s.id
                ORDER BY s.artist, s.title
                "#,
            )
            .bind(viewer_profile_id)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

            Ok(rows.iter().map(song_with_like_from_row).collect())
        }
    }
}

/// Type-ahead suggestions: distinct matching artists, then matching titles,
/// truncated to `limit` after concatenation.
pub async fn suggest(pool: &SqlitePool, query: &str, limit: i64) -> Result<Vec<Suggestion>> {
    let pattern = format!("%{}%", query);

    let artists = sqlx::query(
        "SELECT DISTINCT artist
         FROM songs
         WHERE artist LIKE ?
         ORDER BY artist
         LIMIT ?",
    )
    .bind(&pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let titles = sqlx::query(
        "SELECT DISTINCT title
         FROM songs
         WHERE title LIKE ?
         ORDER BY title
         LIMIT ?",
    )
    .bind(&pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut suggestions: Vec<Suggestion> = artists
        .iter()
        .map(|row| Suggestion {
            kind: SuggestionKind::Artist,
            value: row.get("artist"),
        })
        .chain(titles.iter().map(|row| Suggestion {
            kind: SuggestionKind::Title,
            value: row.get("title"),
        }))
        .collect();
    suggestions.truncate(usize::try_from(limit).unwrap_or(0));

    Ok(suggestions)
}

/// The song feed: the whole catalogue, most liked first
pub async fn list_all(
    pool: &SqlitePool,
    viewer_profile_id: Option<&str>,
    limit: i64,
) -> Result<Vec<SongWithLike>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               COUNT(l.id) AS like_count,
               COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
        FROM songs s
        LEFT JOIN likes l ON l.song_id = s.id
        GROUP BY s.id
        ORDER BY like_count DESC, s.artist, s.title
        LIMIT ?
        "#,
    )
    .bind(viewer_profile_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_with_like_from_row).collect())
}

/// Songs with at least one like, most liked first
pub async fn trending(
    pool: &SqlitePool,
    viewer_profile_id: Option<&str>,
    limit: i64,
) -> Result<Vec<SongWithLike>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               COUNT(l.id) AS like_count,
               COALESCE(MAX(l.profile_id = ?), 0) AS is_liked
        FROM songs s
        LEFT JOIN likes l ON l.song_id = s.id
        GROUP BY s.id
        HAVING COUNT(l.id) > 0
        ORDER BY like_count DESC, s.artist, s.title
        LIMIT ?
        "#,
    )
    .bind(viewer_profile_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_with_like_from_row).collect())
}

/// Record a like. Re-liking is a no-op; the pair constraint absorbs it.
///
/// The ledger itself does not check that the song exists; callers are
/// expected to, and the foreign key backs them up.
pub async fn like(pool: &SqlitePool, profile_id: &str, song_id: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO likes (id, profile_id, song_id, created_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (profile_id, song_id) DO NOTHING",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(profile_id)
    .bind(song_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a like. Succeeds whether or not the like existed.
pub async fn unlike(pool: &SqlitePool, profile_id: &str, song_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM likes WHERE profile_id = ? AND song_id = ?")
        .bind(profile_id)
        .bind(song_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Songs a profile has liked, most recently liked first.
///
/// `is_liked` is true on every row by construction.
pub async fn liked_by_user(pool: &SqlitePool, profile_id: &str) -> Result<Vec<SongWithLike>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.artist, s.album, s.genre, s.cover_url, s.duration_ms, s.created_at,
               (SELECT COUNT(*) FROM likes x WHERE x.song_id = s.id) AS like_count
        FROM likes l
        JOIN songs s ON s.id = l.song_id
        WHERE l.profile_id = ?
        ORDER BY l.created_at DESC
        "#,
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| SongWithLike {
            song: song_from_row(row),
            like_count: row.get("like_count"),
            is_liked: true,
        })
        .collect())
}

// Helper functions

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        album: row.get("album"),
        genre: row.get("genre"),
        cover_url: row.get("cover_url"),
        duration_ms: row.get("duration_ms"),
        created_at: row.get("created_at"),
    }
}

pub(crate) fn song_with_like_from_row(row: &SqliteRow) -> SongWithLike {
    SongWithLike {
        song: song_from_row(row),
        like_count: row.get("like_count"),
        is_liked: row.get::<i64, _>("is_liked") != 0,
    }
}
