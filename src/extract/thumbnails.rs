//! Thumbnail extraction
//!
//! `xmp:Thumbnails` entries come in two shapes. Either the `rdf:li` holds
//! child elements:
//!
//! ```xml
//! <rdf:li rdf:parseType="Resource">
//!   <xmpGImg:width>256</xmpGImg:width>
//!   <xmpGImg:height>256</xmpGImg:height>
//!   <xmpGImg:format>JPEG</xmpGImg:format>
//!   <xmpGImg:image>/9j/4AAQ...</xmpGImg:image>
//! </rdf:li>
//! ```
//!
//! or it carries the same fields as `xmpGImg` attributes and no child
//! elements. Both produce the same [`Thumbnail`].

use crate::core::document::XmpDocument;
use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::ns;
use crate::core::node::Element;
use crate::types::{Thumbnail, ThumbnailImage};

/// Query for thumbnail entries
pub const THUMBNAILS_PATH: &str = "//rdf:RDF/rdf:Description/xmp:Thumbnails/rdf:Alt/rdf:li";

/// Read one thumbnail entry
///
/// Returns `Ok(None)` when the entry has no image at all, and
/// [`XmpError::MalformedRecord`] when it has an image but a missing or
/// non-numeric companion field.
pub fn read_thumbnail(node: &Element) -> XmpResult<Option<Thumbnail>> {
    if node.has_child_elements() {
        let Some(image) = node.child_element("image") else {
            return Ok(None);
        };
        let field = |name: &str| {
            node.child_element(name)
                .map(|e| e.text())
                .ok_or_else(|| missing(name))
        };
        Ok(Some(Thumbnail {
            image: image.text(),
            format: field("format")?.trim().to_string(),
            width: parse_dimension("width", &field("width")?)?,
            height: parse_dimension("height", &field("height")?)?,
        }))
    } else {
        let Some(image) = node.attribute_ns(ns::XMP_IMAGE, "image") else {
            return Ok(None);
        };
        let field = |name: &str| {
            node.attribute_ns(ns::XMP_IMAGE, name)
                .ok_or_else(|| missing(name))
        };
        Ok(Some(Thumbnail {
            image: image.to_string(),
            format: field("format")?.trim().to_string(),
            width: parse_dimension("width", field("width")?)?,
            height: parse_dimension("height", field("height")?)?,
        }))
    }
}

fn missing(name: &str) -> XmpError {
    XmpError::MalformedRecord(format!("thumbnail has an image but no {}", name))
}

/// Plain decimal digits only; signs are rejected
fn parse_dimension(name: &str, text: &str) -> XmpResult<u32> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number(name, text));
    }
    digits.parse::<u32>().map_err(|_| not_a_number(name, text))
}

fn not_a_number(name: &str, text: &str) -> XmpError {
    XmpError::MalformedRecord(format!("thumbnail {} is not a number: {:?}", name, text))
}

/// Extract all thumbnails in document order
///
/// Malformed entries are logged and skipped.
#[tracing::instrument(skip_all)]
pub fn thumbnails(doc: &XmpDocument) -> Vec<Thumbnail> {
    doc.find_elements(THUMBNAILS_PATH)
        .enumerate()
        .filter_map(|(index, node)| match read_thumbnail(node) {
            Ok(thumbnail) => thumbnail,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping thumbnail");
                None
            }
        })
        .collect()
}

/// Thumbnails as displayable image references, in document order
pub fn thumbnail_images(doc: &XmpDocument) -> Vec<ThumbnailImage> {
    thumbnails(doc)
        .iter()
        .map(|thumbnail| {
            tracing::debug!(
                format = %thumbnail.format,
                width = thumbnail.width,
                height = thumbnail.height,
                "rendering image element for thumbnail"
            );
            ThumbnailImage::from(thumbnail)
        })
        .collect()
}
