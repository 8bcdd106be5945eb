//! WebAssembly error handling

use crate::core::error::XmpError as RustXmpError;
use wasm_bindgen::prelude::*;

/// WebAssembly error type
///
/// # Example
///
/// ```javascript
/// import { XmpErrorKind } from './pkg/xmpsift.js';
/// try {
///     file.from_bytes(data, options);
/// } catch (error) {
///     if (error.kind === XmpErrorKind.ParseError) {
///         console.log("Malformed packet:", error.message);
///     }
/// }
/// ```
#[wasm_bindgen]
pub struct XmpError {
    kind: XmpErrorKind,
    message: String,
}

impl std::fmt::Display for XmpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// XMP Error kinds (exported enum for JavaScript)
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmpErrorKind {
    BadValue,
    BadXPath,
    ParseError,
    SerializationError,
    IoError,
    NotFound,
    NotSupported,
    MalformedRecord,
}

#[wasm_bindgen]
impl XmpError {
    /// Get the error kind enum value
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> XmpErrorKind {
        self.kind
    }

    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<RustXmpError> for XmpError {
    fn from(err: RustXmpError) -> Self {
        let kind = match &err {
            RustXmpError::BadValue(_) => XmpErrorKind::BadValue,
            RustXmpError::BadXPath(_) => XmpErrorKind::BadXPath,
            RustXmpError::ParseError(_) => XmpErrorKind::ParseError,
            RustXmpError::SerializationError(_) => XmpErrorKind::SerializationError,
            RustXmpError::IoError(_) => XmpErrorKind::IoError,
            RustXmpError::NotFound(_) => XmpErrorKind::NotFound,
            RustXmpError::NotSupported(_) => XmpErrorKind::NotSupported,
            RustXmpError::MalformedRecord(_) => XmpErrorKind::MalformedRecord,
        };
        XmpError {
            kind,
            message: err.to_string(),
        }
    }
}

/// JSON encode a record for JavaScript
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, XmpError> {
    serde_json::to_string(value)
        .map_err(|e| RustXmpError::SerializationError(e.to_string()).into())
}
