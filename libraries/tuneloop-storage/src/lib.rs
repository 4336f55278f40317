//! TuneLoop Storage
//!
//! SQLite-backed storage for the TuneLoop catalogue: the profile directory,
//! the song catalogue with its like ledger, and the playlist store.
//!
//! The crate is organized as vertical slices. Each module owns the queries
//! for one area and exposes free async functions over a shared
//! [`sqlx::SqlitePool`]; row types live in `tuneloop-core`.

mod error;

pub mod playlists;
pub mod profiles;
pub mod songs;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded migrations, applied at startup
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool for the given database URL.
///
/// The database file is created if missing. Foreign keys are enforced on
/// every connection; the membership and ledger tables rely on them for
/// cascade deletes and referential integrity.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30))
        .foreign_keys(true);

    // Each connection to an in-memory database sees its own private store,
    // so those pools must stay on a single connection.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// One round trip to the database; the health endpoint times this.
pub async fn ping(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
