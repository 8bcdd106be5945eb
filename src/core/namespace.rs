//! Namespace table for XMP queries
//!
//! Queries name elements with short prefixes (`dc:title`, `rdf:li`). Those
//! prefixes are resolved against a fixed table rather than against the
//! declarations found in each packet, so a query means the same thing for
//! every file regardless of how the producer spelled its `xmlns` attributes.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

// Process-wide table, built once and shared read-only
static XMP_NAMESPACES: OnceLock<Arc<NamespaceTable>> = OnceLock::new();

/// Namespaces known to the extractors
pub mod ns {
    /// Dublin Core namespace
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Adobe Illustrator namespace
    pub const ILLUSTRATOR: &str = "http://ns.adobe.com/illustrator/1.0/";
    /// PDF namespace
    pub const PDF: &str = "http://ns.adobe.com/pdf/1.3/";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// Dimensions structure namespace
    pub const ST_DIM: &str = "http://ns.adobe.com/xap/1.0/sType/Dimensions#";
    /// ResourceEvent structure namespace
    pub const ST_EVT: &str = "http://ns.adobe.com/xap/1.0/sType/ResourceEvent#";
    /// Font structure namespace
    pub const ST_FNT: &str = "http://ns.adobe.com/xap/1.0/sType/Font#";
    /// ResourceRef structure namespace
    pub const ST_REF: &str = "http://ns.adobe.com/xap/1.0/sType/ResourceRef#";
    /// XMP Basic namespace
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";
    /// XMP Graphics namespace
    pub const XMP_GRAPHICS: &str = "http://ns.adobe.com/xap/1.0/g/";
    /// XMP Image namespace
    pub const XMP_IMAGE: &str = "http://ns.adobe.com/xap/1.0/g/img/";
    /// XMP Media Management namespace
    pub const XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";
    /// XMP PagedText namespace
    pub const XMP_PAGED: &str = "http://ns.adobe.com/xap/1.0/t/pg/";

    /// Dublin Core prefix
    pub const DC_PREFIX: &str = "dc";
    /// Adobe Illustrator prefix
    pub const ILLUSTRATOR_PREFIX: &str = "illustrator";
    /// PDF prefix
    pub const PDF_PREFIX: &str = "pdf";
    /// RDF prefix
    pub const RDF_PREFIX: &str = "rdf";
    /// Dimensions prefix
    pub const ST_DIM_PREFIX: &str = "stDim";
    /// ResourceEvent prefix
    pub const ST_EVT_PREFIX: &str = "stEvt";
    /// Font prefix
    pub const ST_FNT_PREFIX: &str = "stFnt";
    /// ResourceRef prefix
    pub const ST_REF_PREFIX: &str = "stRef";
    /// XMP Basic prefix
    pub const XMP_PREFIX: &str = "xmp";
    /// XMP Graphics prefix
    pub const XMP_GRAPHICS_PREFIX: &str = "xmpG";
    /// XMP Image prefix
    pub const XMP_IMAGE_PREFIX: &str = "xmpGImg";
    /// XMP Media Management prefix
    pub const XMP_MM_PREFIX: &str = "xmpMM";
    /// XMP PagedText prefix
    pub const XMP_PAGED_PREFIX: &str = "xmpTPg";

    /// Every (prefix, URI) pair in the default table
    pub const ALL: &[(&str, &str)] = &[
        (DC_PREFIX, DC),
        (ILLUSTRATOR_PREFIX, ILLUSTRATOR),
        (PDF_PREFIX, PDF),
        (RDF_PREFIX, RDF),
        (ST_DIM_PREFIX, ST_DIM),
        (ST_EVT_PREFIX, ST_EVT),
        (ST_FNT_PREFIX, ST_FNT),
        (ST_REF_PREFIX, ST_REF),
        (XMP_PREFIX, XMP),
        (XMP_GRAPHICS_PREFIX, XMP_GRAPHICS),
        (XMP_IMAGE_PREFIX, XMP_IMAGE),
        (XMP_MM_PREFIX, XMP_MM),
        (XMP_PAGED_PREFIX, XMP_PAGED),
    ];
}

/// Resolves a query prefix to a namespace URI
///
/// An unknown prefix resolves to the empty string, which matches nothing.
pub trait PrefixResolver {
    /// Return the URI bound to `prefix`, or `""` if there is none
    fn resolve(&self, prefix: &str) -> &str;
}

/// Immutable prefix to URI table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    prefix_to_uri: HashMap<String, String>,
}

impl NamespaceTable {
    /// Build a table from (prefix, uri) pairs
    ///
    /// A prefix listed twice keeps the last URI.
    pub fn from_pairs<I, P, U>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        Self {
            prefix_to_uri: pairs
                .into_iter()
                .map(|(prefix, uri)| (prefix.into(), uri.into()))
                .collect(),
        }
    }

    /// Table holding the standard XMP namespaces
    pub fn xmp() -> Self {
        Self::from_pairs(ns::ALL.iter().copied())
    }

    /// Shared handle to the process-wide standard table
    pub fn shared() -> Arc<NamespaceTable> {
        Arc::clone(XMP_NAMESPACES.get_or_init(|| Arc::new(NamespaceTable::xmp())))
    }

    /// Get the URI for a namespace prefix
    pub fn get_uri(&self, prefix: &str) -> Option<&str> {
        self.prefix_to_uri.get(prefix).map(|s| s.as_str())
    }

    /// Get the prefix for a namespace URI
    pub fn get_prefix(&self, uri: &str) -> Option<&str> {
        self.prefix_to_uri
            .iter()
            .find(|(_, u)| u.as_str() == uri)
            .map(|(p, _)| p.as_str())
    }

    /// Check if a namespace prefix is present
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefix_to_uri.contains_key(prefix)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.prefix_to_uri.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.prefix_to_uri.is_empty()
    }
}

impl PrefixResolver for NamespaceTable {
    fn resolve(&self, prefix: &str) -> &str {
        self.get_uri(prefix).unwrap_or("")
    }
}
