//! Decoding raw file bytes into scannable text

use std::borrow::Cow;

/// Decode file bytes as UTF-8, replacing invalid sequences with U+FFFD
///
/// Host files are mostly binary, so nearly every input takes the lossy path.
/// Packet offsets are computed on the returned text, never on the bytes.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
