//! Application model types: `App` and `PlaybackState`.
//!
//! `App` owns the playlist sequencer plus the list selection and the status
//! flags the UI renders. It never touches audio; the runtime reads the tracks
//! it returns and hands their paths to the player.

use std::time::Duration;

use crate::playlist::{PlaybackSequence, RepeatMode, Sequencer, Track};

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What removing the selected row means for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Nothing was removed.
    None,
    /// A track other than the current one was removed.
    Other,
    /// The current track was removed; this one replaces it (if any remain).
    Current(Option<Track>),
}

/// The main application model.
pub struct App {
    pub playlist: Sequencer,
    /// Highlighted row, as a storage index into the playlist.
    pub selected: usize,
    pub playback: PlaybackState,
    /// Last message worth showing in the status box (errors, end of list).
    pub message: Option<String>,
    /// Fixed seed for every shuffle, if configured.
    pub shuffle_seed: Option<u64>,
    pub current_dir: Option<String>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut playlist = Sequencer::new();
        for track in tracks {
            playlist.add(track);
        }

        Self {
            playlist,
            selected: 0,
            playback: PlaybackState::Stopped,
            message: None,
            shuffle_seed: None,
            current_dir: None,
        }
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// Record the current directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Move the highlight onto the current track.
    pub fn follow_current(&mut self) {
        if let Some(i) = self.playlist.current_index() {
            self.selected = i;
        }
    }

    /// Move selection to the next row, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.playlist.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous row, wrapping around.
    pub fn select_prev(&mut self) {
        let len = self.playlist.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn next_track(&mut self) -> Track {
        let track = self.playlist.next();
        self.follow_current();
        track
    }

    pub fn prev_track(&mut self) -> Track {
        let track = self.playlist.prev();
        self.follow_current();
        track
    }

    /// Make the highlighted row the current track and return it.
    pub fn play_selected(&mut self) -> Option<Track> {
        if self.selected >= self.playlist.len() {
            return None;
        }
        self.playlist.select(self.selected);
        Some(self.playlist.current())
    }

    /// Cycle the repeat mode `Off -> All -> One`.
    pub fn cycle_repeat(&mut self) {
        let mode = self.playlist.repeat_mode().cycle();
        self.playlist.set_repeat_mode(mode);
    }

    /// Toggle shuffle. `random_seed` is used unless a fixed seed is configured.
    /// Either way the cursor returns to the top of the new order.
    pub fn toggle_shuffle(&mut self, random_seed: u64) {
        if self.playlist.is_shuffled() {
            self.playlist.disable_shuffle();
        } else {
            self.playlist
                .shuffle(self.shuffle_seed.unwrap_or(random_seed));
        }
        self.follow_current();
    }

    /// Remove the highlighted row.
    ///
    /// When it was the current track, the replacement is the track now stored
    /// at the same row (or the new last row), and the cursor moves onto it.
    pub fn remove_selected(&mut self) -> Removal {
        let row = self.selected;
        if row >= self.playlist.len() {
            return Removal::None;
        }

        let removing_current = self.playlist.current_index() == Some(row);
        self.playlist.remove_at(row);

        let len = self.playlist.len();
        if len == 0 {
            self.selected = 0;
            return if removing_current {
                Removal::Current(None)
            } else {
                Removal::Other
            };
        }

        self.selected = row.min(len - 1);
        if removing_current {
            self.playlist.select(self.selected);
            Removal::Current(Some(self.playlist.current()))
        } else {
            Removal::Other
        }
    }

    /// What should play once the current track finishes on its own.
    ///
    /// `None` means playback ends here: repeat is off and the cursor is on
    /// the last track of the playback order.
    pub fn track_after_finish(&mut self) -> Option<Track> {
        if !self.has_tracks() {
            return None;
        }
        match self.playlist.repeat_mode() {
            RepeatMode::One => Some(self.playlist.current()),
            RepeatMode::Off if self.playlist.at_end() => None,
            _ => Some(self.next_track()),
        }
    }

    /// Position to seek to when scrubbing `step` away from `elapsed`.
    ///
    /// Never goes below zero, and never past the end of the current track
    /// when its length is known.
    pub fn scrub_target(&self, elapsed: Duration, step: Duration, forward: bool) -> Duration {
        if !forward {
            return elapsed.saturating_sub(step);
        }
        let target = elapsed.saturating_add(step);
        match self.playlist.current().duration() {
            Some(total) => target.min(total),
            None => target,
        }
    }
}
