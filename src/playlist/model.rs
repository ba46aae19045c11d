use std::path::PathBuf;
use std::time::Duration;

/// A playable entry. `path` doubles as the track's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Whole seconds; 0 means unknown.
    pub duration_secs: u64,
}

impl Track {
    pub fn duration(&self) -> Option<Duration> {
        (self.duration_secs > 0).then(|| Duration::from_secs(self.duration_secs))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Stop advancing at the end of the playback order.
    #[default]
    Off,
    /// Wrap around to the start of the playback order.
    All,
    /// Stay on the current track.
    One,
}

impl RepeatMode {
    /// `Off -> All -> One -> Off`.
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}
