//! Structured extractors
//!
//! Each extractor runs fixed queries against an [`XmpDocument`](crate::XmpDocument)
//! and turns the matches into records. Malformed records are logged and
//! skipped, and a document without a packet yields empty results.

pub mod fonts;
pub mod properties;
pub mod thumbnails;

pub use fonts::{fonts, fonts_with, FontMapper, StFntMapper, UnmappedFonts};
pub use properties::{creator, document_properties, title};
pub use thumbnails::{read_thumbnail, thumbnail_images, thumbnails};
