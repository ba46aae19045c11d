//! Playlist sequencing: track storage, visit order, cursor and repeat policy.
//!
//! `PlaybackSequence` is the navigation contract the runtime drives;
//! `Sequencer` is its only implementation.

mod model;
mod sequence;
mod sequencer;

pub use model::*;
pub use sequence::PlaybackSequence;
pub use sequencer::Sequencer;

#[cfg(test)]
mod tests;
