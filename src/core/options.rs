//! Options for scanning input for an XMP packet

/// Options controlling how input is scanned for an XMP packet.
///
/// Use the builder pattern to configure options.
///
/// # Example
///
/// ```rust
/// use xmpsift::{ScanOptions, XmpDocument};
///
/// let options = ScanOptions::default().strict().max_bytes(1 << 20);
/// let result = XmpDocument::from_text_with("<x:xmpmeta><broken></x:xmpmeta>", &options);
/// assert!(result.is_err());
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Report malformed packet XML as an error instead of an empty document
    pub strict: bool,
    /// Only scan this many leading bytes of the input
    pub max_bytes: Option<usize>,
}

impl ScanOptions {
    /// Report malformed packet XML as [`XmpError::ParseError`](crate::XmpError::ParseError).
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Degrade malformed packet XML to an empty document (default).
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Only scan the first `limit` bytes of the input.
    pub fn max_bytes(mut self, limit: usize) -> Self {
        self.max_bytes = Some(limit);
        self
    }

    /// Cut `text` to the configured limit, backing off to a char boundary
    pub(crate) fn clip<'a>(&self, text: &'a str) -> &'a str {
        let Some(limit) = self.max_bytes else {
            return text;
        };
        if limit >= text.len() {
            return text;
        }
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }

    /// Cut `bytes` to the configured limit
    pub(crate) fn clip_bytes<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        match self.max_bytes {
            Some(limit) if limit < bytes.len() => &bytes[..limit],
            _ => bytes,
        }
    }
}
