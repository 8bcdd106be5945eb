//! # xmpsift
//!
//! Find the XMP packet embedded in an arbitrary file and read document
//! properties, thumbnails and fonts out of it.
//!
//! The file format is never parsed. The bytes are decoded as text, the first
//! `<x:xmpmeta ... </x:xmpmeta>` span is cut out and parsed as XML, and fixed
//! namespace-qualified queries pull the records out of it.
//!
//! Missing or malformed packets never fail the lenient entry points; they
//! give an empty document whose extractors return empty results.
//!
//! ## Quick start
//!
//! ```rust
//! use xmpsift::XmpDocument;
//!
//! let text = r#"%PDF-1.6 ... <x:xmpmeta xmlns:x="adobe:ns:meta/">
//!   <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!            xmlns:dc="http://purl.org/dc/elements/1.1/">
//!     <rdf:Description>
//!       <dc:title><rdf:Alt><rdf:li xml:lang="x-default">Annual Report</rdf:li></rdf:Alt></dc:title>
//!     </rdf:Description>
//!   </rdf:RDF>
//! </x:xmpmeta> ..."#;
//!
//! let doc = XmpDocument::from_text(text);
//! assert_eq!(doc.title(), "Annual Report");
//! assert!(doc.thumbnails().is_empty());
//! ```
//!
//! ## Features
//!
//! - `files` (default): load from paths, readers and byte slices
//! - `async`: tokio based async file loading
//! - `serde`: `Serialize`/`Deserialize` on the extracted records
//! - `wasm`: JavaScript bindings through wasm-bindgen

pub mod core;
pub mod extract;
#[cfg(feature = "files")]
pub mod files;
pub mod types;
pub mod utils;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::document::XmpDocument;
pub use crate::core::error::{XmpError, XmpResult};
pub use crate::core::namespace::{ns, NamespaceTable, PrefixResolver};
pub use crate::core::options::ScanOptions;
pub use extract::{FontMapper, StFntMapper, UnmappedFonts};
pub use types::{DocumentProperties, FontInfo, Thumbnail, ThumbnailImage};
pub use utils::datetime::XmpDateTime;

#[cfg(all(feature = "files", not(target_arch = "wasm32")))]
pub use files::{load_with_callback, read_file};
#[cfg(feature = "async")]
pub use files::read_file_async;
#[cfg(feature = "files")]
pub use files::{read_bytes, XmpFile};
