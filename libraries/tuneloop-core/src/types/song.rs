//! Song catalog and search types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry, read-only from the API's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub cover_url: String,
    pub duration_ms: i64,
    pub created_at: DateTime<Utc>,
}

/// A [`Song`] decorated with its aggregate like count and the viewer's
/// like status.
///
/// `is_liked` is `false` whenever no viewer profile was supplied. The song
/// fields flatten into the surrounding JSON object, so API consumers see a
/// single flat song record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongWithLike {
    #[serde(flatten)]
    pub song: Song,
    pub like_count: i64,
    pub is_liked: bool,
}

/// Which song columns a search query matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Substring match on the artist name
    Artist,
    /// Substring match on the title
    Title,
    /// Union of artist and title matches, deduplicated
    All,
}

impl SearchMode {
    /// Convert the mode to its query-parameter spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Artist => "artist",
            SearchMode::Title => "title",
            SearchMode::All => "all",
        }
    }

    /// Parse a query-parameter value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "artist" => Some(SearchMode::Artist),
            "title" => Some(SearchMode::Title),
            "all" => Some(SearchMode::All),
            _ => None,
        }
    }
}

/// Kind of an autocomplete suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Artist,
    Title,
}

/// A single autocomplete entry: a distinct artist name or song title
/// matching the typed fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub value: String,
}
