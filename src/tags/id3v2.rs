//! ID3v2.3 / ID3v2.4 header and text frame reader.

use std::io::Read;

use super::error::TagError;
use super::model::TagMetadata;
use super::text::{frame_text, length_secs};

const HEADER_LEN: usize = 10;
const FRAME_HEADER_LEN: usize = 10;
const FLAG_EXTENDED_HEADER: u8 = 0x40;

/// Decode a synchsafe integer: 7 significant bits per byte, big-endian.
pub fn synchsafe(bytes: &[u8; 4]) -> u32 {
    (u32::from(bytes[0]) << 21)
        | (u32::from(bytes[1]) << 14)
        | (u32::from(bytes[2]) << 7)
        | u32::from(bytes[3])
}

fn be_u32(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Read at most `limit` bytes, stopping early at end of input.
fn read_up_to<R: Read>(reader: &mut R, limit: usize) -> Result<Vec<u8>, TagError> {
    let mut buf = Vec::new();
    reader.by_ref().take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Parse an ID3v2 tag at the start of `reader` into `meta`.
///
/// Returns `Ok(())` without touching `meta` when no tag is present. Frames
/// already applied stay applied when a later read fails.
pub(super) fn read_into<R: Read>(reader: &mut R, meta: &mut TagMetadata) -> Result<(), TagError> {
    let header = read_up_to(reader, HEADER_LEN)?;
    if header.len() < HEADER_LEN {
        return Err(TagError::ShortRead {
            wanted: HEADER_LEN,
            got: header.len(),
        });
    }
    if &header[..3] != b"ID3" {
        return Ok(());
    }

    let version = header[3];
    let flags = header[5];
    let size = synchsafe(&[header[6], header[7], header[8], header[9]]) as usize;

    let body = read_up_to(reader, size)?;
    apply_frames(&body, version, flags, meta);
    Ok(())
}

/// Walk the frames of a tag body and copy the known text frames into `meta`.
fn apply_frames(body: &[u8], version: u8, flags: u8, meta: &mut TagMetadata) {
    let mut pos = 0usize;

    if flags & FLAG_EXTENDED_HEADER != 0 && body.len() >= 4 {
        let ext = synchsafe(&[body[0], body[1], body[2], body[3]]) as usize;
        // v2.3 excludes the size field itself from the extended header size.
        pos = if version == 3 { ext + 4 } else { ext };
    }

    while pos + FRAME_HEADER_LEN <= body.len() {
        if body[pos] == 0 {
            break;
        }

        let id = &body[pos..pos + 4];
        let size_bytes = [body[pos + 4], body[pos + 5], body[pos + 6], body[pos + 7]];
        let frame_size = if version == 3 {
            be_u32(&size_bytes)
        } else {
            synchsafe(&size_bytes)
        } as usize;

        let start = pos + FRAME_HEADER_LEN;
        if frame_size == 0 || frame_size > body.len() - start {
            break;
        }

        let value = frame_text(&body[start..start + frame_size]);
        match id {
            b"TIT2" => meta.title = value,
            b"TPE1" => meta.artist = value,
            b"TALB" => meta.album = value,
            b"TLEN" => meta.duration_secs = length_secs(&value),
            _ => {}
        }

        pos = start + frame_size;
    }
}
