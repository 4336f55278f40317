//! Profile domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user identity keyed by a unique, immutable username.
///
/// Profiles are created once and never mutated or deleted; the username is
/// the only identity invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new profile
///
/// Optional fields default to the empty string when absent. Validation
/// (username length and charset, non-empty display name) is the caller's
/// responsibility; the storage layer only enforces the unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfile {
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
