use std::path::PathBuf;

use crate::playlist::Track;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Metadata recovered from a file's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Whole seconds; 0 means unknown.
    pub duration_secs: u64,
}

impl Default for TagMetadata {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
            duration_secs: 0,
        }
    }
}

impl TagMetadata {
    /// True when nothing was recovered from either tag.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn into_track(self, path: impl Into<PathBuf>) -> Track {
        Track {
            path: path.into(),
            title: self.title,
            artist: self.artist,
            album: self.album,
            duration_secs: self.duration_secs,
        }
    }
}
