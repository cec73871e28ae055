//! Song value type
//!
//! Stored playlists use the browser's field names, so `you_tube_id`
//! serializes as `youTubeId`.

use serde::{Deserialize, Serialize};

/// Title used for new songs and for edits that clear the title
pub const DEFAULT_TITLE: &str = "Untitled";

/// Artist used for new songs and for edits that clear the artist
pub const DEFAULT_ARTIST: &str = "unknown";

/// Media id used for new songs and for edits that clear the id
pub const DEFAULT_YOUTUBE_ID: &str = "dQw4w9WgXcQ";

/// A single playlist entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub you_tube_id: String,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            artist: DEFAULT_ARTIST.to_string(),
            you_tube_id: DEFAULT_YOUTUBE_ID.to_string(),
        }
    }
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, you_tube_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            you_tube_id: you_tube_id.into(),
        }
    }

    /// Build a song from user input, replacing empty fields with the defaults
    pub fn sanitized(title: &str, artist: &str, you_tube_id: &str) -> Self {
        Self {
            title: or_default(title, DEFAULT_TITLE),
            artist: or_default(artist, DEFAULT_ARTIST),
            you_tube_id: or_default(you_tube_id, DEFAULT_YOUTUBE_ID),
        }
    }

    /// Link to the song on YouTube
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.you_tube_id)
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
