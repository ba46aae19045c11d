use super::model::Track;

/// Something that hands out tracks in a playback order.
///
/// Accessors return owned copies; navigation on an empty sequence returns
/// `Track::default()`.
pub trait PlaybackSequence {
    /// Append a track.
    fn add(&mut self, track: Track);

    /// Track at storage index `index`, or the empty track when out of range.
    fn at(&self, index: usize) -> Track;

    /// Advance and return the new current track.
    fn next(&mut self) -> Track;

    /// Step back and return the new current track.
    fn prev(&mut self) -> Track;

    /// The track under the cursor.
    fn current(&self) -> Track;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
