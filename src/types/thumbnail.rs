//! Thumbnail records

use crate::core::error::{XmpError, XmpResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A thumbnail embedded in an XMP packet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thumbnail {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Image format token, e.g. `JPEG`
    pub format: String,
    /// Base64 encoded image data (not a data URI)
    pub image: String,
}

impl Thumbnail {
    /// MIME type derived from the format token
    pub fn mime_type(&self) -> String {
        format!("image/{}", self.format.to_lowercase())
    }

    /// `data:image/<format>;base64,<image>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.image)
    }

    /// Decode the image payload
    ///
    /// Producers wrap long payloads across lines, so whitespace is ignored.
    pub fn decode_image(&self) -> XmpResult<Vec<u8>> {
        let compact: String = self
            .image
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(compact)
            .map_err(|e| XmpError::BadValue(format!("Invalid base64 thumbnail: {}", e)))
    }
}

/// A displayable reference to a thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbnailImage {
    /// Data URI of the image
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl From<&Thumbnail> for ThumbnailImage {
    fn from(thumbnail: &Thumbnail) -> Self {
        Self {
            src: thumbnail.data_uri(),
            width: thumbnail.width,
            height: thumbnail.height,
        }
    }
}
