//! WebAssembly JavaScript bindings for xmpsift
//!
//! Enable the `wasm` feature and build with:
//! ```bash
//! wasm-pack build --target web --out-dir pkg -- --features wasm
//! ```
//!
//! Use in JavaScript:
//! ```javascript
//! import init, { read_xmp } from './pkg/xmpsift.js';
//! await init();
//! const doc = read_xmp(new Uint8Array(await file.arrayBuffer()));
//! console.log(doc.title, JSON.parse(doc.thumbnails_json()));
//! ```

mod document;
mod error;
mod file;
mod thumbnail;

pub use document::XmpDocument;
pub use error::{XmpError, XmpErrorKind};
pub use file::{read_xmp, ScanOptions};
pub use thumbnail::ThumbnailImage;
