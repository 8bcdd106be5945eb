//! XMP packet location
//!
//! Finds the `<x:xmpmeta ...>...</x:xmpmeta>` element inside arbitrary
//! decoded file text. Offsets are byte offsets into the decoded `&str`.

use std::ops::Range;

/// Start marker of the XMP meta element
pub const XMP_START: &str = "<x:xmpmeta";
/// End marker of the XMP meta element
pub const XMP_END: &str = "</x:xmpmeta>";

/// Locate the first XMP packet in `text`
///
/// The end marker is searched from the start marker onwards, so an end marker
/// that only occurs before the start marker means there is no packet. A start
/// marker at offset 0 is a valid match.
pub fn locate_packet(text: &str) -> Option<Range<usize>> {
    let start = text.find(XMP_START)?;
    let end = start + text[start..].find(XMP_END)? + XMP_END.len();
    Some(start..end)
}

/// Return the packet markup (start marker through end marker, inclusive)
pub fn extract_packet(text: &str) -> Option<&str> {
    locate_packet(text).map(|range| &text[range])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_in_binary_noise() {
        let text = "\u{0}\u{1}JFIF<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"></x:xmpmeta>\u{ff}";
        let range = locate_packet(text).unwrap();
        assert_eq!(range.start, 6);
        assert_eq!(
            &text[range],
            "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"></x:xmpmeta>"
        );
    }

    #[test]
    fn test_start_at_offset_zero_is_found() {
        let text = "<x:xmpmeta></x:xmpmeta>";
        assert_eq!(locate_packet(text), Some(0..text.len()));
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(locate_packet(""), None);
        assert_eq!(locate_packet("no metadata here"), None);
        assert_eq!(locate_packet("<x:xmpmeta> unterminated"), None);
        assert_eq!(locate_packet("</x:xmpmeta> only the end"), None);
    }

    #[test]
    fn test_end_before_start_is_not_found() {
        assert_eq!(locate_packet("</x:xmpmeta> junk <x:xmpmeta>"), None);
    }

    #[test]
    fn test_first_packet_wins() {
        let text = "<x:xmpmeta>a</x:xmpmeta><x:xmpmeta>b</x:xmpmeta>";
        assert_eq!(extract_packet(text), Some("<x:xmpmeta>a</x:xmpmeta>"));
    }
}
