mod playlist;
mod profile;
mod song;

pub use playlist::{Playlist, PlaylistDetail, PlaylistTrack};
pub use profile::{CreateProfile, Profile};
pub use song::{SearchMode, Song, SongWithLike, Suggestion, SuggestionKind};
