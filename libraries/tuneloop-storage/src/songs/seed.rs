//! Built-in song catalogue.
//!
//! The HTTP API exposes no write path for songs; the catalogue is seeded
//! once through the CLI and is read-only afterwards.

use super::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// (id, title, artist, album, genre, cover_url, duration_ms)
///
/// Ids are fixed so re-seeding an existing database inserts nothing.
const CATALOG: &[(&str, &str, &str, &str, &str, &str, i64)] = &[
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000001",
        "Bohemian Rhapsody",
        "Queen",
        "A Night at the Opera",
        "Rock",
        "https://picsum.photos/seed/tuneloop-01/300/300",
        354_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000002",
        "Don't Stop Me Now",
        "Queen",
        "Jazz",
        "Rock",
        "https://picsum.photos/seed/tuneloop-02/300/300",
        209_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000003",
        "Killer Queen",
        "Queen",
        "Sheer Heart Attack",
        "Rock",
        "https://picsum.photos/seed/tuneloop-03/300/300",
        181_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000004",
        "Dancing Queen",
        "ABBA",
        "Arrival",
        "Pop",
        "https://picsum.photos/seed/tuneloop-04/300/300",
        230_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000005",
        "Dreams",
        "Fleetwood Mac",
        "Rumours",
        "Rock",
        "https://picsum.photos/seed/tuneloop-05/300/300",
        257_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000006",
        "The Chain",
        "Fleetwood Mac",
        "Rumours",
        "Rock",
        "https://picsum.photos/seed/tuneloop-06/300/300",
        270_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000007",
        "One More Time",
        "Daft Punk",
        "Discovery",
        "Electronic",
        "https://picsum.photos/seed/tuneloop-07/300/300",
        320_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000008",
        "Harder, Better, Faster, Stronger",
        "Daft Punk",
        "Discovery",
        "Electronic",
        "https://picsum.photos/seed/tuneloop-08/300/300",
        224_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000009",
        "Billie Jean",
        "Michael Jackson",
        "Thriller",
        "Pop",
        "https://picsum.photos/seed/tuneloop-09/300/300",
        294_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000010",
        "Beat It",
        "Michael Jackson",
        "Thriller",
        "Pop",
        "https://picsum.photos/seed/tuneloop-10/300/300",
        258_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000011",
        "Superstition",
        "Stevie Wonder",
        "Talking Book",
        "Funk",
        "https://picsum.photos/seed/tuneloop-11/300/300",
        245_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000012",
        "Smells Like Teen Spirit",
        "Nirvana",
        "Nevermind",
        "Grunge",
        "https://picsum.photos/seed/tuneloop-12/300/300",
        301_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000013",
        "Karma Police",
        "Radiohead",
        "OK Computer",
        "Alternative",
        "https://picsum.photos/seed/tuneloop-13/300/300",
        264_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000014",
        "No Surprises",
        "Radiohead",
        "OK Computer",
        "Alternative",
        "https://picsum.photos/seed/tuneloop-14/300/300",
        229_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000015",
        "Hey Jude",
        "The Beatles",
        "Hey Jude",
        "Rock",
        "https://picsum.photos/seed/tuneloop-15/300/300",
        431_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000016",
        "Let It Be",
        "The Beatles",
        "Let It Be",
        "Rock",
        "https://picsum.photos/seed/tuneloop-16/300/300",
        243_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000017",
        "Heroes",
        "David Bowie",
        "Heroes",
        "Rock",
        "https://picsum.photos/seed/tuneloop-17/300/300",
        371_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000018",
        "Purple Rain",
        "Prince",
        "Purple Rain",
        "Rock",
        "https://picsum.photos/seed/tuneloop-18/300/300",
        520_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000019",
        "Back to Black",
        "Amy Winehouse",
        "Back to Black",
        "Soul",
        "https://picsum.photos/seed/tuneloop-19/300/300",
        240_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000020",
        "So What",
        "Miles Davis",
        "Kind of Blue",
        "Jazz",
        "https://picsum.photos/seed/tuneloop-20/300/300",
        565_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000021",
        "Giant Steps",
        "John Coltrane",
        "Giant Steps",
        "Jazz",
        "https://picsum.photos/seed/tuneloop-21/300/300",
        286_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000022",
        "HUMBLE.",
        "Kendrick Lamar",
        "DAMN.",
        "Hip-Hop",
        "https://picsum.photos/seed/tuneloop-22/300/300",
        177_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000023",
        "Hey Ya!",
        "OutKast",
        "Speakerboxxx/The Love Below",
        "Hip-Hop",
        "https://picsum.photos/seed/tuneloop-23/300/300",
        235_000,
    ),
    (
        "3f8a1d2e-9c4b-4f6a-8d00-000000000024",
        "Levitating",
        "Dua Lipa",
        "Future Nostalgia",
        "Pop",
        "https://picsum.photos/seed/tuneloop-24/300/300",
        203_000,
    ),
];

/// Insert the built-in catalogue, skipping songs already present.
///
/// Returns the number of rows actually inserted.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<u64> {
    let mut inserted = 0;
    for &(id, title, artist, album, genre, cover_url, duration_ms) in CATALOG {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO songs (id, title, artist, album, genre, cover_url, duration_ms, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind(artist)
        .bind(album)
        .bind(genre)
        .bind(cover_url)
        .bind(duration_ms)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(inserted)
}
