//! WebAssembly bindings for loading files

use crate::core::options::ScanOptions as RustScanOptions;
use crate::files::file::read_bytes;
use crate::wasm::document::XmpDocument;
use crate::wasm::error::XmpError;
use wasm_bindgen::prelude::*;

/// Options for scanning file bytes (WebAssembly)
///
/// # Example
///
/// ```javascript
/// const options = new ScanOptions();
/// options.strict();
/// options.max_bytes(1 << 20);
/// const doc = read_xmp(data, options);
/// ```
#[derive(Default)]
#[wasm_bindgen]
pub struct ScanOptions {
    inner: RustScanOptions,
}

#[wasm_bindgen]
impl ScanOptions {
    /// Create default (lenient, unlimited) options
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScanOptions {
        ScanOptions::default()
    }

    /// Report malformed packet XML as an error
    pub fn strict(&mut self) {
        self.inner = self.inner.strict();
    }

    /// Only scan the first `limit` bytes
    pub fn max_bytes(&mut self, limit: usize) {
        self.inner = self.inner.max_bytes(limit);
    }
}

/// Scan file bytes for an XMP packet
///
/// ```javascript
/// import init, { read_xmp } from './pkg/xmpsift.js';
/// await init();
/// const doc = read_xmp(new Uint8Array(buffer));
/// console.log(doc.title);
/// ```
#[wasm_bindgen]
pub fn read_xmp(data: &[u8], options: Option<ScanOptions>) -> Result<XmpDocument, XmpError> {
    let options = options.map(|o| o.inner).unwrap_or_default();
    Ok(XmpDocument::from(read_bytes(data, &options)?))
}
