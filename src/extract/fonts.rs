//! Font list extraction
//!
//! Turning an `xmpTPg:Fonts` entry into a [`FontInfo`] goes through a
//! [`FontMapper`]. The default mapper, [`UnmappedFonts`], does not map
//! anything, so [`fonts`] returns an empty list unless a caller opts into
//! [`StFntMapper`] through [`fonts_with`].

use crate::core::document::XmpDocument;
use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::ns;
use crate::core::node::Element;
use crate::types::FontInfo;

/// Query for font entries
pub const FONTS_PATH: &str = "//rdf:RDF/rdf:Description/xmpTPg:Fonts/rdf:Bag/rdf:li";

/// Maps one font entry to a [`FontInfo`]
pub trait FontMapper {
    fn map_font(&self, node: &Element) -> XmpResult<FontInfo>;
}

/// Mapper that reports font mapping as unsupported
#[derive(Debug, Clone, Copy, Default)]
pub struct UnmappedFonts;

impl FontMapper for UnmappedFonts {
    fn map_font(&self, _node: &Element) -> XmpResult<FontInfo> {
        Err(XmpError::NotSupported(
            "font records are not mapped".to_string(),
        ))
    }
}

/// Mapper for the `stFnt` font structure
///
/// `fontFamily`, `fontFace` and `fontName` are required. Each field may be
/// written as a child element or as an attribute of the entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StFntMapper;

impl StFntMapper {
    fn field(node: &Element, name: &str) -> Option<String> {
        node.child_element_ns(ns::ST_FNT, name)
            .map(|e| e.text().trim().to_string())
            .or_else(|| node.attribute_ns(ns::ST_FNT, name).map(str::to_string))
    }

    fn required(node: &Element, name: &str) -> XmpResult<String> {
        Self::field(node, name)
            .ok_or_else(|| XmpError::MalformedRecord(format!("font entry has no stFnt:{}", name)))
    }
}

impl FontMapper for StFntMapper {
    fn map_font(&self, node: &Element) -> XmpResult<FontInfo> {
        Ok(FontInfo {
            family: Self::required(node, "fontFamily")?,
            face: Self::required(node, "fontFace")?,
            name: Self::required(node, "fontName")?,
            font_type: Self::field(node, "fontType"),
            version: Self::field(node, "versionString"),
            file_name: Self::field(node, "fontFileName"),
        })
    }
}

/// Extract fonts with the given mapper, in document order
///
/// [`XmpError::NotSupported`] from the mapper is returned as is. Any other
/// mapping error skips that entry.
#[tracing::instrument(skip_all)]
pub fn fonts_with<M: FontMapper + ?Sized>(doc: &XmpDocument, mapper: &M) -> XmpResult<Vec<FontInfo>> {
    let mut fonts = Vec::new();
    for (index, node) in doc.find_elements(FONTS_PATH).enumerate() {
        match mapper.map_font(node) {
            Ok(font) => fonts.push(font),
            Err(e @ XmpError::NotSupported(_)) => return Err(e),
            Err(e) => tracing::warn!(index, error = %e, "skipping font"),
        }
    }
    Ok(fonts)
}

/// Extract fonts with the default mapper
///
/// Always empty, since the default mapper does not map fonts.
pub fn fonts(doc: &XmpDocument) -> Vec<FontInfo> {
    fonts_with(doc, &UnmappedFonts).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "font extraction unavailable");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONTS_XMP: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
      xmlns:xmpTPg="http://ns.adobe.com/xap/1.0/t/pg/"
      xmlns:stFnt="http://ns.adobe.com/xap/1.0/sType/Font#">
   <xmpTPg:Fonts>
    <rdf:Bag>
     <rdf:li rdf:parseType="Resource">
      <stFnt:fontName>MyriadPro-Regular</stFnt:fontName>
      <stFnt:fontFamily>Myriad Pro</stFnt:fontFamily>
      <stFnt:fontFace>Regular</stFnt:fontFace>
      <stFnt:fontType>Open Type</stFnt:fontType>
      <stFnt:versionString>Version 2.106;PS 2.000;hotconv 1.0.70;makeotf.lib2.5.58329</stFnt:versionString>
      <stFnt:fontFileName>MyriadPro-Regular.otf</stFnt:fontFileName>
     </rdf:li>
     <rdf:li stFnt:fontName="Courier" stFnt:fontFamily="Courier" stFnt:fontFace="Medium"/>
     <rdf:li><stFnt:fontName>Orphan</stFnt:fontName></rdf:li>
    </rdf:Bag>
   </xmpTPg:Fonts>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>"#;

    #[test]
    fn test_default_fonts_are_empty() {
        let doc = XmpDocument::from_text(FONTS_XMP);
        assert!(fonts(&doc).is_empty());
        assert!(matches!(
            fonts_with(&doc, &UnmappedFonts),
            Err(XmpError::NotSupported(_))
        ));
    }

    #[test]
    fn test_stfnt_mapper() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let doc = XmpDocument::from_text(FONTS_XMP);
        let fonts = fonts_with(&doc, &StFntMapper).unwrap();
        assert_eq!(fonts.len(), 2);

        assert_eq!(fonts[0].family, "Myriad Pro");
        assert_eq!(fonts[0].face, "Regular");
        assert_eq!(fonts[0].name, "MyriadPro-Regular");
        assert_eq!(fonts[0].font_type.as_deref(), Some("Open Type"));
        assert_eq!(fonts[0].file_name.as_deref(), Some("MyriadPro-Regular.otf"));

        assert_eq!(
            fonts[1],
            FontInfo {
                family: "Courier".to_string(),
                face: "Medium".to_string(),
                name: "Courier".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_no_packet_has_no_fonts() {
        let doc = XmpDocument::empty();
        assert!(fonts_with(&doc, &StFntMapper).unwrap().is_empty());
        // nothing to map, so the unsupported mapper is never consulted
        assert!(fonts_with(&doc, &UnmappedFonts).unwrap().is_empty());
    }
}
