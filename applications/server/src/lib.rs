//! TuneLoop Server
//!
//! Music-discovery REST API over the TuneLoop storage layer: a public
//! profile directory, a read-only song catalogue with a like ledger, and
//! owner-gated playlists.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
