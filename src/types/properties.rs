//! Document-level properties

use crate::utils::datetime::XmpDateTime;

/// Known document properties of an XMP packet
///
/// `title` and `creator` are always present and empty when the packet does
/// not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentProperties {
    /// The document title (`dc:title`)
    pub title: String,
    /// The creator of this document (`dc:creator`)
    pub creator: String,
    /// When the document was created (`xmp:CreateDate`)
    pub created: Option<XmpDateTime>,
    /// When the document was last modified (`xmp:ModifyDate`)
    pub modified: Option<XmpDateTime>,
    /// Number of pages (`xmpTPg:NPages`)
    pub num_pages: Option<u32>,
    pub has_visible_overprint: Option<bool>,
    pub has_visible_transparency: Option<bool>,
    /// Application that created the document (`xmp:CreatorTool`)
    pub creator_tool: Option<String>,
    /// Rendition class (`xmpMM:RenditionClass`)
    pub rendition_class: Option<String>,
}
