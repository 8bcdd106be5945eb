//! XMP document
//!
//! [`XmpDocument`] wraps the parsed packet (or nothing, when no usable packet
//! was found) together with the namespace table its queries resolve against.

use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::NamespaceTable;
use crate::core::node::XmlDocument;
use crate::core::options::ScanOptions;
use crate::core::packet::extract_packet;
use crate::core::parser::parse_document;
use crate::core::serializer::serialize_element;
use crate::core::xpath::{evaluate, parse_query, Matches};
use crate::extract;
use crate::types::{DocumentProperties, FontInfo, Thumbnail, ThumbnailImage};
use std::str::FromStr;
use std::sync::Arc;

/// A queryable XMP packet
///
/// Construction never fails on the lenient paths: missing or malformed
/// packets produce a document with no content, and every query against it
/// comes back empty.
#[derive(Debug, Clone)]
pub struct XmpDocument {
    document: Option<XmlDocument>,
    namespaces: Arc<NamespaceTable>,
}

impl XmpDocument {
    /// Wrap a parsed document using the standard namespace table
    pub fn new(document: Option<XmlDocument>) -> Self {
        Self::with_namespaces(document, NamespaceTable::shared())
    }

    /// Wrap a parsed document using a caller supplied namespace table
    pub fn with_namespaces(document: Option<XmlDocument>, namespaces: Arc<NamespaceTable>) -> Self {
        Self {
            document,
            namespaces,
        }
    }

    /// A document with no packet
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Locate and parse the packet in decoded file text
    ///
    /// Missing markers and malformed XML both yield an empty document.
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, &ScanOptions::default()).unwrap_or_else(|_| Self::empty())
    }

    /// Locate and parse the packet in decoded file text with options
    ///
    /// Only a strict scan of malformed packet XML returns an error; a missing
    /// packet is never an error here.
    pub fn from_text_with(text: &str, options: &ScanOptions) -> XmpResult<Self> {
        let text = options.clip(text);
        let Some(packet) = extract_packet(text) else {
            tracing::debug!("XMP packet not found");
            return Ok(Self::empty());
        };
        tracing::debug!(len = packet.len(), "XMP packet located");

        match parse_document(packet) {
            Ok(document) => Ok(Self::new(Some(document))),
            Err(e) if options.strict => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "XMP packet is not well-formed XML");
                Ok(Self::empty())
            }
        }
    }

    /// Parse packet markup directly (no marker search)
    pub fn parse_packet(xml: &str) -> XmpResult<Self> {
        parse_document(xml).map(|document| Self::new(Some(document)))
    }

    /// The parsed XML, if a packet was found and parsed
    pub fn document(&self) -> Option<&XmlDocument> {
        self.document.as_ref()
    }

    /// The namespace table queries resolve against
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Whether the document holds a parsed packet
    pub fn has_packet(&self) -> bool {
        self.document.is_some()
    }

    /// Find the elements matched by a location path
    ///
    /// An invalid expression or an unknown prefix matches nothing.
    pub fn find_elements(&self, query: &str) -> Matches<'_> {
        let Some(document) = &self.document else {
            return Matches::empty();
        };
        match parse_query(query) {
            Ok(parsed) => evaluate(&parsed, document, self.namespaces.as_ref()),
            Err(e) => {
                tracing::debug!(query, error = %e, "ignoring bad query");
                Matches::empty()
            }
        }
    }

    /// Text content of the first match, or an empty string
    pub fn element_value(&self, query: &str) -> String {
        self.find_elements(query)
            .next()
            .map(|element| element.text())
            .unwrap_or_default()
    }

    /// Markup of the root element, or an empty string without a packet
    pub fn document_text(&self) -> String {
        let Some(document) = &self.document else {
            return String::new();
        };
        serialize_element(document.root()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to serialize XMP document");
            String::new()
        })
    }

    /// Document title (`dc:title`)
    pub fn title(&self) -> String {
        extract::properties::title(self)
    }

    /// Document creator (`dc:creator`)
    pub fn creator(&self) -> String {
        extract::properties::creator(self)
    }

    /// All document-level properties
    pub fn properties(&self) -> DocumentProperties {
        extract::properties::document_properties(self)
    }

    /// Embedded thumbnails in document order
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        extract::thumbnails::thumbnails(self)
    }

    /// Embedded thumbnails as displayable image references
    pub fn thumbnail_images(&self) -> Vec<ThumbnailImage> {
        extract::thumbnails::thumbnail_images(self)
    }

    /// Fonts listed in the packet
    pub fn fonts(&self) -> Vec<FontInfo> {
        extract::fonts::fonts(self)
    }
}

impl Default for XmpDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for XmpDocument {
    type Err = XmpError;

    /// Strict parse: the text must contain a well-formed packet
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let packet = extract_packet(s)
            .ok_or_else(|| XmpError::NotFound("No XMP packet in input".to_string()))?;
        Self::parse_packet(packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::ns;

    const TEXT: &str = r#"%PDF-1.6 binary junk <x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
          xmlns:dc="http://purl.org/dc/elements/1.1/">
  <rdf:Description rdf:about="">
   <dc:title><rdf:Alt><rdf:li xml:lang="x-default">Report</rdf:li></rdf:Alt></dc:title>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta> trailing junk"#;

    #[test]
    fn test_from_text_finds_packet() {
        let doc = XmpDocument::from_text(TEXT);
        assert!(doc.has_packet());
        assert_eq!(
            doc.element_value("//rdf:RDF/rdf:Description/dc:title/rdf:Alt/rdf:li"),
            "Report"
        );
        assert_eq!(doc.find_elements("//rdf:li").count(), 1);
    }

    #[test]
    fn test_missing_packet_degrades_to_empty() {
        let doc = XmpDocument::from_text("plain text file");
        assert!(!doc.has_packet());
        assert_eq!(doc.find_elements("//rdf:li").count(), 0);
        assert_eq!(doc.element_value("//rdf:li"), "");
        assert_eq!(doc.document_text(), "");
    }

    #[test]
    fn test_malformed_packet_degrades_to_empty() {
        let doc = XmpDocument::from_text("<x:xmpmeta><a></b></x:xmpmeta>");
        assert!(!doc.has_packet());

        let strict = ScanOptions::default().strict();
        let result = XmpDocument::from_text_with("<x:xmpmeta><a></b></x:xmpmeta>", &strict);
        assert!(matches!(result, Err(XmpError::ParseError(_))));
    }

    #[test]
    fn test_bad_queries_match_nothing() {
        let doc = XmpDocument::from_text(TEXT);
        assert_eq!(doc.find_elements("//[").count(), 0);
        assert_eq!(doc.find_elements("//nope:li").count(), 0);
        assert_eq!(doc.element_value(""), "");
    }

    #[test]
    fn test_max_bytes_cuts_off_packet() {
        let options = ScanOptions::default().max_bytes(40);
        let doc = XmpDocument::from_text_with(TEXT, &options).unwrap();
        assert!(!doc.has_packet());
    }

    #[test]
    fn test_document_text_serializes_root() {
        let doc = XmpDocument::from_text(TEXT);
        let text = doc.document_text();
        assert!(text.starts_with("<x:xmpmeta"));
        assert!(text.ends_with("</x:xmpmeta>"));
        assert!(!text.contains("junk"));
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!(TEXT.parse::<XmpDocument>().is_ok());
        assert!(matches!(
            "nothing".parse::<XmpDocument>(),
            Err(XmpError::NotFound(_))
        ));
    }

    #[test]
    fn test_custom_namespace_table() {
        let table = Arc::new(NamespaceTable::from_pairs([("r", ns::RDF)]));
        let parsed = XmpDocument::from_text(TEXT);
        let doc = XmpDocument::with_namespaces(parsed.document().cloned(), table);
        assert_eq!(doc.find_elements("//r:li").count(), 1);
        assert_eq!(doc.find_elements("//rdf:li").count(), 0);
    }
}
