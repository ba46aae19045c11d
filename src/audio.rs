//! Playback collaborator.
//!
//! Wraps a `rodio` output stream and a single sink. The player only knows
//! file paths; choosing what plays next is the playlist's job.

mod error;
mod player;

pub use error::AudioError;
pub use player::AudioPlayer;
