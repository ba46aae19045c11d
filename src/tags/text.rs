//! Text frame decoding helpers.

/// Drop NUL characters, then trim leading and trailing ASCII spaces.
pub(super) fn clean(s: &str) -> String {
    let without_nul: String = s.chars().filter(|&c| c != '\0').collect();
    without_nul.trim_matches(' ').to_string()
}

/// Single-byte text: every byte maps to the Latin-1 code point of the same value.
pub(super) fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// UTF-16 text, keeping only code units below 128.
///
/// A leading `FF FE` selects little-endian, `FE FF` big-endian; without a
/// byte-order mark the data is read as big-endian. A trailing odd byte is
/// ignored.
pub(super) fn utf16_ascii(data: &[u8]) -> String {
    if data.len() < 2 {
        return String::new();
    }

    let (little_endian, body) = match (data[0], data[1]) {
        (0xFF, 0xFE) => (true, &data[2..]),
        (0xFE, 0xFF) => (false, &data[2..]),
        _ => (false, data),
    };

    let out: String = body
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .filter(|&unit| unit < 128)
        .map(|unit| unit as u8 as char)
        .collect();

    clean(&out)
}

/// Decode the payload of a text frame (encoding marker + text).
///
/// Payloads of one byte or less carry no text.
pub(super) fn frame_text(payload: &[u8]) -> String {
    if payload.len() <= 1 {
        return String::new();
    }

    let text = &payload[1..];
    match payload[0] {
        0 => clean(&latin1(text)),
        1 | 2 => utf16_ascii(text),
        3 => clean(&String::from_utf8_lossy(text)),
        _ => String::new(),
    }
}

/// Parse a TLEN value (milliseconds) into whole seconds.
///
/// Leading spaces and a `+` sign are accepted and anything after the first
/// run of digits is ignored. No digits, a negative value or an overflow all
/// give 0.
pub(super) fn length_secs(value: &str) -> u64 {
    let s = value.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    s[..digits_end]
        .parse::<u64>()
        .map(|ms| ms / 1000)
        .unwrap_or(0)
}
