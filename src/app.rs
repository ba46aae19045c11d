//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist, the
//! highlighted row and playback related flags.

mod model;

pub use model::*;
