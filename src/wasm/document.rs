//! WebAssembly bindings for XmpDocument

use crate::core::document::XmpDocument as RustXmpDocument;
use crate::extract::fonts::{fonts_with, StFntMapper};
use crate::wasm::error::{to_json, XmpError};
use crate::wasm::thumbnail::ThumbnailImage;
use wasm_bindgen::prelude::*;

/// A parsed XMP packet (WebAssembly)
///
/// Records are handed to JavaScript as JSON strings, except thumbnail images
/// which come back as an array of [`ThumbnailImage`] objects.
///
/// ```javascript
/// const doc = XmpDocument.from_text(text);
/// const props = JSON.parse(doc.properties_json());
/// for (const img of doc.thumbnail_images()) {
///     const el = new Image(img.width, img.height);
///     el.src = img.src;
/// }
/// ```
#[wasm_bindgen]
pub struct XmpDocument {
    inner: RustXmpDocument,
}

#[wasm_bindgen]
impl XmpDocument {
    /// Locate and parse the packet in decoded text
    pub fn from_text(text: &str) -> XmpDocument {
        XmpDocument {
            inner: RustXmpDocument::from_text(text),
        }
    }

    /// Whether a packet was found and parsed
    #[wasm_bindgen(getter)]
    pub fn has_packet(&self) -> bool {
        self.inner.has_packet()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title()
    }

    #[wasm_bindgen(getter)]
    pub fn creator(&self) -> String {
        self.inner.creator()
    }

    /// Text content of the first match of `query`
    pub fn element_value(&self, query: &str) -> String {
        self.inner.element_value(query)
    }

    /// Serialized packet root
    pub fn document_text(&self) -> String {
        self.inner.document_text()
    }

    /// Document properties as JSON
    pub fn properties_json(&self) -> Result<String, XmpError> {
        to_json(&self.inner.properties())
    }

    /// Thumbnails as a JSON array
    pub fn thumbnails_json(&self) -> Result<String, XmpError> {
        to_json(&self.inner.thumbnails())
    }

    /// Thumbnails as displayable image references
    pub fn thumbnail_images(&self) -> js_sys::Array {
        self.inner
            .thumbnail_images()
            .into_iter()
            .map(|image| JsValue::from(ThumbnailImage::from(image)))
            .collect()
    }

    /// Fonts as a JSON array, mapped from `stFnt` entries
    pub fn fonts_json(&self) -> Result<String, XmpError> {
        to_json(&fonts_with(&self.inner, &StFntMapper)?)
    }
}

impl From<RustXmpDocument> for XmpDocument {
    fn from(inner: RustXmpDocument) -> Self {
        Self { inner }
    }
}
