//! Error types for XMP extraction
//!
//! Most of the extraction surface is lenient and never returns these errors;
//! they are produced by the strict entry points and logged by the lenient ones.

use thiserror::Error;

/// Error types for XMP operations
#[derive(Debug, Error)]
pub enum XmpError {
    /// Bad value (e.g., an unparsable date or number)
    #[error("Bad value: {0}")]
    BadValue(String),

    /// Bad query expression
    #[error("Bad XPath: {0}")]
    BadXPath(String),

    /// Parse error (the packet is not well-formed XML)
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// No XMP packet in the input
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Operation not supported
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// A matched record (thumbnail, font) lacks required fields
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl From<quick_xml::Error> for XmpError {
    fn from(err: quick_xml::Error) -> Self {
        XmpError::ParseError(format!("XML parsing error: {}", err))
    }
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;
