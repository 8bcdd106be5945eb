//! Font records

/// A font listed in an XMP packet (`xmpTPg:Fonts`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontInfo {
    /// The font family
    pub family: String,
    /// The font face
    pub face: String,
    /// The font name
    pub name: String,
    /// The font type (e.g. `TrueType`, `Open Type`)
    pub font_type: Option<String>,
    /// The font version
    pub version: Option<String>,
    /// The file name of the font
    pub file_name: Option<String>,
}
