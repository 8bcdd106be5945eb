//! File loading for XMP
//!
//! Files are never parsed by format. Their bytes are decoded as text and the
//! packet markers are searched for directly, which works for images, PDFs
//! and anything else that embeds an uncompressed packet.

#[cfg(feature = "async")]
pub mod async_file;
pub mod decode;
pub mod file;

#[cfg(feature = "async")]
pub use async_file::{read_file_async, read_from_async};
pub use decode::decode_text;
#[cfg(not(target_arch = "wasm32"))]
pub use file::{load_with_callback, read_file};
pub use file::{read_bytes, read_from, XmpFile};
