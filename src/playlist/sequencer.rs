use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::model::{RepeatMode, Track};
use super::sequence::PlaybackSequence;

/// Owned track list plus the order it is visited in.
///
/// `order` is always a permutation of `0..tracks.len()`, and `cursor`
/// indexes into `order` (not into `tracks`). The current track is
/// `tracks[order[cursor]]`; `cursor` is `None` exactly when there are no
/// tracks.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    tracks: Vec<Track>,
    order: Vec<usize>,
    cursor: Option<usize>,
    repeat: RepeatMode,
    shuffled: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Storage indices in visit order.
    pub fn playback_order(&self) -> &[usize] {
        &self.order
    }

    /// Position of the cursor inside the playback order.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Storage index of the current track.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.map(|c| self.order[c])
    }

    /// True when the cursor sits on the last position of the playback order.
    pub fn at_end(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 == self.order.len())
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Remove the track at storage index `index`; out of range is a no-op.
    ///
    /// The remaining tracks keep their relative visit order. The cursor keeps
    /// its position, clamped to the new last position.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.tracks.len() {
            return;
        }

        self.tracks.remove(index);
        self.order.retain(|&i| i != index);
        for i in self.order.iter_mut() {
            if *i > index {
                *i -= 1;
            }
        }

        self.cursor = match self.cursor {
            _ if self.tracks.is_empty() => None,
            Some(c) => Some(c.min(self.order.len() - 1)),
            None => Some(0),
        };
    }

    /// Move the cursor onto the track stored at `index`; out of range is a no-op.
    pub fn select(&mut self, index: usize) {
        if let Some(pos) = self.order.iter().position(|&i| i == index) {
            self.cursor = Some(pos);
        }
    }

    /// Replace the playback order with a permutation derived from `seed`.
    ///
    /// The same seed over the same number of tracks always gives the same
    /// order. The cursor returns to the start.
    pub fn shuffle(&mut self, seed: u64) {
        self.rebuild_order();
        let mut rng = StdRng::seed_from_u64(seed);
        self.order.shuffle(&mut rng);
        self.reset_cursor();
        self.shuffled = true;
    }

    /// Restore storage order; the cursor returns to the first track.
    pub fn disable_shuffle(&mut self) {
        self.rebuild_order();
        self.reset_cursor();
        self.shuffled = false;
    }

    fn rebuild_order(&mut self) {
        self.order = (0..self.tracks.len()).collect();
    }

    fn reset_cursor(&mut self) {
        self.cursor = (!self.tracks.is_empty()).then_some(0);
    }

    fn track_at_cursor(&self) -> Track {
        self.current_index()
            .map(|i| self.tracks[i].clone())
            .unwrap_or_default()
    }
}

impl PlaybackSequence for Sequencer {
    /// Appending resets the playback order to storage order, dropping any
    /// shuffle. The cursor position is kept.
    fn add(&mut self, track: Track) {
        self.tracks.push(track);
        self.rebuild_order();
        self.shuffled = false;
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    fn at(&self, index: usize) -> Track {
        self.tracks.get(index).cloned().unwrap_or_default()
    }

    /// With repeat `Off` the cursor freezes on the last track instead of
    /// wrapping, so calling this at the end keeps returning that track.
    fn next(&mut self) -> Track {
        let Some(cursor) = self.cursor else {
            return Track::default();
        };
        if self.repeat == RepeatMode::One {
            return self.track_at_cursor();
        }

        let len = self.order.len();
        let mut next = (cursor + 1) % len;
        if next == 0 && self.repeat == RepeatMode::Off {
            next = len - 1;
        }
        self.cursor = Some(next);
        self.track_at_cursor()
    }

    fn prev(&mut self) -> Track {
        let Some(cursor) = self.cursor else {
            return Track::default();
        };
        if self.repeat == RepeatMode::One {
            return self.track_at_cursor();
        }

        let prev = match cursor.checked_sub(1) {
            Some(p) => p,
            None if self.repeat == RepeatMode::All => self.order.len() - 1,
            None => 0,
        };
        self.cursor = Some(prev);
        self.track_at_cursor()
    }

    fn current(&self) -> Track {
        self.track_at_cursor()
    }

    fn len(&self) -> usize {
        self.tracks.len()
    }
}
