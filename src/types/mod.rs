//! Extracted record types
//!
//! This module defines the plain value records the extractors return.

pub mod font;
pub mod properties;
pub mod thumbnail;

pub use font::FontInfo;
pub use properties::DocumentProperties;
pub use thumbnail::{Thumbnail, ThumbnailImage};
