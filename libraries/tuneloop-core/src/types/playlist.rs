//! Playlist domain types

use super::song::SongWithLike;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, owned collection of song references.
///
/// Owned exclusively by the creating profile; only the owner may mutate
/// membership or delete the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,

    /// Owner profile ID, immutable after creation
    pub user_id: String,

    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,

    /// Advances on every membership mutation; reads never touch it
    pub updated_at: DateTime<Utc>,

    /// Live cardinality of the membership rows, computed at read time
    pub track_count: i64,
}

/// A playlist member: the song with like decoration plus when it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(flatten)]
    pub song: SongWithLike,
    pub added_at: DateTime<Utc>,
}

/// A playlist together with its tracks, most recently added first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub tracks: Vec<PlaylistTrack>,
}
