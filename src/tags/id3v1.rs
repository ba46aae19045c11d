//! ID3v1 trailer: the last 128 bytes of the file.

use std::io::{Read, Seek, SeekFrom};

use super::error::TagError;
use super::model::{TagMetadata, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE};
use super::text::{clean, latin1};

pub(super) const TRAILER_LEN: usize = 128;

fn field(trailer: &[u8], start: usize) -> String {
    let raw = latin1(&trailer[start..start + 30]);
    // C `isspace` also counts vertical tab.
    let trimmed =
        raw.trim_end_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B' || c == '\0');
    clean(trimmed)
}

fn fill(slot: &mut String, placeholder: &str, value: String) {
    if slot == placeholder {
        *slot = value;
    }
}

/// Copy ID3v1 title/artist/album into the fields of `meta` that still hold
/// their placeholder.
pub(super) fn fill_placeholders<R: Read + Seek>(
    reader: &mut R,
    meta: &mut TagMetadata,
) -> Result<(), TagError> {
    let len = reader.seek(SeekFrom::End(0))?;
    if len < TRAILER_LEN as u64 {
        return Ok(());
    }

    reader.seek(SeekFrom::End(-(TRAILER_LEN as i64)))?;
    let mut trailer = [0u8; TRAILER_LEN];
    reader.read_exact(&mut trailer)?;

    if &trailer[..3] != b"TAG" {
        return Ok(());
    }

    fill(&mut meta.title, UNKNOWN_TITLE, field(&trailer, 3));
    fill(&mut meta.artist, UNKNOWN_ARTIST, field(&trailer, 33));
    fill(&mut meta.album, UNKNOWN_ALBUM, field(&trailer, 63));
    Ok(())
}
