/// Shared application state
use sqlx::SqlitePool;
use std::time::Instant;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            started_at: Instant::now(),
        }
    }
}
