//! ID3 tag reader.
//!
//! `decode` pulls title, artist, album and duration out of a file's ID3v2
//! header and ID3v1 trailer. It never fails: anything unreadable leaves the
//! placeholder values of `TagMetadata::default()` in place.

mod error;
mod id3v1;
mod id3v2;
mod model;
mod text;

use std::fs::File;
use std::path::Path;

use tracing::debug;

pub use id3v2::synchsafe;
pub use model::*;

/// Read whatever tag metadata `path` carries.
///
/// ID3v2 values win; the ID3v1 trailer only fills fields that are still
/// placeholders afterwards.
pub fn decode(path: impl AsRef<Path>) -> TagMetadata {
    let path = path.as_ref();
    let mut meta = TagMetadata::default();

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot open file for tag reading");
            return meta;
        }
    };

    if let Err(e) = id3v2::read_into(&mut file, &mut meta) {
        debug!(path = %path.display(), error = %e, "ID3v2 tag unreadable");
    }

    if let Err(e) = id3v1::fill_placeholders(&mut file, &mut meta) {
        debug!(path = %path.display(), error = %e, "ID3v1 trailer unreadable");
    }

    meta
}
