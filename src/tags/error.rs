use std::io;

use thiserror::Error;

/// Reasons a tag region could not be read.
///
/// These never leave the `tags` module as failures: `decode` logs them and
/// keeps whatever it had parsed so far.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("short read: wanted {wanted} bytes, got {got}")]
    ShortRead { wanted: usize, got: usize },
}
