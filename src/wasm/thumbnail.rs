//! WebAssembly thumbnail image references

use crate::types::ThumbnailImage as RustThumbnailImage;
use wasm_bindgen::prelude::*;

/// A thumbnail ready to be used as an `<img>` source
#[wasm_bindgen]
pub struct ThumbnailImage {
    inner: RustThumbnailImage,
}

#[wasm_bindgen]
impl ThumbnailImage {
    /// Data URI of the image
    #[wasm_bindgen(getter)]
    pub fn src(&self) -> String {
        self.inner.src.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl From<RustThumbnailImage> for ThumbnailImage {
    fn from(inner: RustThumbnailImage) -> Self {
        Self { inner }
    }
}
