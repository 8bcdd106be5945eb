//! Document property extraction

use crate::core::document::XmpDocument;
use crate::core::namespace::ns;
use crate::types::DocumentProperties;
use crate::utils::datetime::XmpDateTime;

/// Query for the document title
pub const TITLE_PATH: &str = "//rdf:RDF/rdf:Description/dc:title/rdf:Alt/rdf:li";
/// Query for the document creator
pub const CREATOR_PATH: &str = "//rdf:RDF/rdf:Description/dc:creator/rdf:Alt/rdf:li";
const DESCRIPTION_PATH: &str = "//rdf:RDF/rdf:Description";

/// Gets the title of the document, or an empty string
pub fn title(doc: &XmpDocument) -> String {
    doc.element_value(TITLE_PATH)
}

/// Gets the creator of the document, or an empty string
///
/// Only the `rdf:Alt` form is read.
pub fn creator(doc: &XmpDocument) -> String {
    doc.element_value(CREATOR_PATH)
}

/// Read a simple property of any `rdf:Description`
///
/// XMP allows a simple property either as an attribute of the description or
/// as a child element; both are checked, attributes first.
pub fn simple_property(doc: &XmpDocument, namespace: &str, name: &str) -> Option<String> {
    doc.find_elements(DESCRIPTION_PATH).find_map(|desc| {
        desc.attribute_ns(namespace, name)
            .map(str::to_string)
            .or_else(|| {
                desc.child_element_ns(namespace, name)
                    .map(|e| e.text().trim().to_string())
            })
    })
}

/// Extract every known document property
pub fn document_properties(doc: &XmpDocument) -> DocumentProperties {
    DocumentProperties {
        title: title(doc),
        creator: creator(doc),
        created: date_property(doc, ns::XMP, "CreateDate"),
        modified: date_property(doc, ns::XMP, "ModifyDate"),
        num_pages: simple_property(doc, ns::XMP_PAGED, "NPages").and_then(|v| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| tracing::debug!(value = %v, "ignoring non-numeric xmpTPg:NPages"))
                .ok()
        }),
        has_visible_overprint: bool_property(doc, ns::XMP_PAGED, "HasVisibleOverprint"),
        has_visible_transparency: bool_property(doc, ns::XMP_PAGED, "HasVisibleTransparency"),
        creator_tool: simple_property(doc, ns::XMP, "CreatorTool"),
        rendition_class: simple_property(doc, ns::XMP_MM, "RenditionClass"),
    }
}

fn date_property(doc: &XmpDocument, namespace: &str, name: &str) -> Option<XmpDateTime> {
    let value = simple_property(doc, namespace, name)?;
    match XmpDateTime::parse(&value) {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::debug!(property = name, value = %value, error = %e, "ignoring unparsable date");
            None
        }
    }
}

fn bool_property(doc: &XmpDocument, namespace: &str, name: &str) -> Option<bool> {
    let value = simple_property(doc, namespace, name)?;
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => {
            tracing::debug!(property = name, value = %value, "ignoring non-boolean value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF_XMP: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
      xmlns:xmp="http://ns.adobe.com/xap/1.0/"
      xmp:CreatorTool="Adobe Illustrator CS6 (Windows)"
      xmp:CreateDate="2014-03-04T10:12:59+01:00">
   <xmp:ModifyDate>2014-03-05T09:00:00Z</xmp:ModifyDate>
  </rdf:Description>
  <rdf:Description rdf:about=""
      xmlns:dc="http://purl.org/dc/elements/1.1/"
      xmlns:xmpMM="http://ns.adobe.com/xap/1.0/mm/"
      xmlns:xmpTPg="http://ns.adobe.com/xap/1.0/t/pg/">
   <dc:title><rdf:Alt><rdf:li xml:lang="x-default">Poster</rdf:li></rdf:Alt></dc:title>
   <dc:creator><rdf:Seq><rdf:li>Ada</rdf:li><rdf:li>Grace</rdf:li></rdf:Seq></dc:creator>
   <xmpMM:RenditionClass>proof:pdf</xmpMM:RenditionClass>
   <xmpTPg:NPages>3</xmpTPg:NPages>
   <xmpTPg:HasVisibleOverprint>False</xmpTPg:HasVisibleOverprint>
   <xmpTPg:HasVisibleTransparency>True</xmpTPg:HasVisibleTransparency>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>"#;

    #[test]
    fn test_document_properties() {
        let doc = XmpDocument::from_text(PDF_XMP);
        let props = document_properties(&doc);
        assert_eq!(props.title, "Poster");
        assert_eq!(props.creator, "");
        assert_eq!(
            props.creator_tool.as_deref(),
            Some("Adobe Illustrator CS6 (Windows)")
        );
        assert_eq!(props.created.map(|d| d.to_string()).as_deref(), Some("2014-03-04T10:12:59+01:00"));
        assert_eq!(props.modified.map(|d| d.to_string()).as_deref(), Some("2014-03-05T09:00:00Z"));
        assert_eq!(props.num_pages, Some(3));
        assert_eq!(props.has_visible_overprint, Some(false));
        assert_eq!(props.has_visible_transparency, Some(true));
        assert_eq!(props.rendition_class.as_deref(), Some("proof:pdf"));
    }

    #[test]
    fn test_creator_alt_takes_precedence() {
        let doc = XmpDocument::from_text(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dc="http://purl.org/dc/elements/1.1/"><rdf:Description><dc:creator><rdf:Alt><rdf:li>Alt Author</rdf:li></rdf:Alt></dc:creator></rdf:Description></rdf:RDF></x:xmpmeta>"#,
        );
        assert_eq!(creator(&doc), "Alt Author");
        assert_eq!(title(&doc), "");
    }

    #[test]
    fn test_creator_seq_is_not_read() {
        let doc = XmpDocument::from_text(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dc="http://purl.org/dc/elements/1.1/"><rdf:Description><dc:creator><rdf:Seq><rdf:li>Ada</rdf:li></rdf:Seq></dc:creator></rdf:Description></rdf:RDF></x:xmpmeta>"#,
        );
        assert!(doc.has_packet());
        assert_eq!(creator(&doc), "");
    }

    #[test]
    fn test_unparsable_values_are_none() {
        let doc = XmpDocument::from_text(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmlns:xmpTPg="http://ns.adobe.com/xap/1.0/t/pg/" xmp:CreateDate="last tuesday" xmpTPg:NPages="many" xmpTPg:HasVisibleOverprint="maybe"/></rdf:RDF></x:xmpmeta>"#,
        );
        let props = document_properties(&doc);
        assert_eq!(props.created, None);
        assert_eq!(props.num_pages, None);
        assert_eq!(props.has_visible_overprint, None);
    }

    #[test]
    fn test_empty_document() {
        let props = document_properties(&XmpDocument::empty());
        assert_eq!(props, DocumentProperties::default());
    }
}
