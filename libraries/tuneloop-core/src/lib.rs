//! TuneLoop Core
//!
//! Domain types shared by the storage layer and the HTTP server.
//!
//! The core crate defines:
//! - **Identity**: [`Profile`] and its creation input
//! - **Catalog**: [`Song`] and the viewer-decorated [`SongWithLike`]
//! - **Playlists**: [`Playlist`], [`PlaylistTrack`], [`PlaylistDetail`]
//! - **Search**: [`SearchMode`] and autocomplete [`Suggestion`]s
//!
//! All types serialize to the JSON shapes the public API exposes; field
//! names stay snake_case to match the persisted column names.

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{
    CreateProfile, Playlist, PlaylistDetail, PlaylistTrack, Profile, SearchMode, Song,
    SongWithLike, Suggestion, SuggestionKind,
};
