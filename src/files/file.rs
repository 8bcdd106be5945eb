//! XMP File API
//!
//! Loads a host file (image, PDF, anything) into an [`XmpDocument`]. The file
//! format is never inspected: the bytes are decoded as text and scanned for
//! the packet markers.

use crate::core::document::XmpDocument;
use crate::core::error::XmpResult;
use crate::core::options::ScanOptions;
use crate::files::decode::decode_text;
use std::io::Read;

/// Scan raw file bytes for an XMP packet
///
/// Fails only when `options` is strict and the packet is malformed.
#[tracing::instrument(skip_all, fields(len = data.len()))]
pub fn read_bytes(data: &[u8], options: &ScanOptions) -> XmpResult<XmpDocument> {
    let text = decode_text(options.clip_bytes(data));
    // already clipped; a second cut on the decoded text would drop replacement chars
    let options = ScanOptions {
        max_bytes: None,
        ..*options
    };
    XmpDocument::from_text_with(&text, &options)
}

/// Read everything from `reader` (up to the byte limit) and scan it
pub fn read_from<R: Read>(reader: R, options: &ScanOptions) -> XmpResult<XmpDocument> {
    let mut data = Vec::new();
    match options.max_bytes {
        Some(limit) => reader.take(limit as u64).read_to_end(&mut data)?,
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut data)?
        }
    };
    read_bytes(&data, options)
}

/// Open a file from a path and scan it (native platforms only)
#[cfg(not(target_arch = "wasm32"))]
pub fn read_file<P: AsRef<std::path::Path>>(path: P, options: &ScanOptions) -> XmpResult<XmpDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading file");
    let file = std::fs::File::open(path)?;
    read_from(file, options)
}

/// Load a file and hand the document to `on_loaded`
///
/// `on_loaded` runs exactly once when the file was read and scanned, and
/// never when reading fails; the failure is returned instead.
///
/// # Example
///
/// ```rust,no_run
/// use xmpsift::{load_with_callback, ScanOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// load_with_callback("poster.pdf", &ScanOptions::default(), |doc| {
///     println!("title: {}", doc.title());
/// })?;
/// # Ok(())
/// # }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn load_with_callback<P, F>(path: P, options: &ScanOptions, on_loaded: F) -> XmpResult<()>
where
    P: AsRef<std::path::Path>,
    F: FnOnce(XmpDocument),
{
    let document = read_file(path, options)?;
    on_loaded(document);
    Ok(())
}

/// High-level API for reading XMP from files
///
/// # Platform Support
///
/// - **Native platforms**: use [`XmpFile::open`]
/// - **Wasm**: use [`XmpFile::from_bytes`] or [`XmpFile::from_reader`] with in-memory data
///
/// # Example
///
/// ```rust,no_run
/// use xmpsift::XmpFile;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut file = XmpFile::new();
/// file.open("photo.jpg")?;
///
/// if let Some(doc) = file.get_xmp() {
///     for thumb in doc.thumbnails() {
///         println!("{} {}x{}", thumb.format, thumb.width, thumb.height);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmpFile {
    document: Option<XmpDocument>,
    options: ScanOptions,
    /// Path of the last opened file
    #[cfg(not(target_arch = "wasm32"))]
    file_path: Option<std::path::PathBuf>,
}

impl XmpFile {
    /// Create a new empty XmpFile
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty XmpFile that scans with `options`
    pub fn with_options(options: ScanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Open a file from a path (native platforms only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open<P: AsRef<std::path::Path>>(&mut self, path: P) -> XmpResult<()> {
        let path = path.as_ref();
        self.document = Some(read_file(path, &self.options)?);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load from bytes (all platforms, including Wasm)
    pub fn from_bytes(&mut self, data: &[u8]) -> XmpResult<()> {
        self.document = Some(read_bytes(data, &self.options)?);
        Ok(())
    }

    /// Load from a reader
    pub fn from_reader<R: Read>(&mut self, reader: R) -> XmpResult<()> {
        self.document = Some(read_from(reader, &self.options)?);
        Ok(())
    }

    /// The loaded document, or `None` if nothing was loaded yet
    ///
    /// A loaded file without a packet still yields a document; it is simply
    /// empty.
    pub fn get_xmp(&self) -> Option<&XmpDocument> {
        self.document.as_ref()
    }

    /// Take the loaded document, leaving the file empty
    pub fn take_xmp(&mut self) -> Option<XmpDocument> {
        self.document.take()
    }

    /// Options used for scanning
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Path of the last opened file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file_path.as_deref()
    }

    /// Drop the loaded document
    pub fn close(&mut self) {
        self.document = None;
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.file_path = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::XmpError;

    const PACKET: &[u8] = br#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dc="http://purl.org/dc/elements/1.1/"><rdf:Description><dc:title><rdf:Alt><rdf:li>Scan</rdf:li></rdf:Alt></dc:title></rdf:Description></rdf:RDF></x:xmpmeta>"#;

    fn jpeg_like() -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x80, 0xC3];
        data.extend_from_slice(PACKET);
        data.extend_from_slice(&[0xFF, 0xD9]);
        data
    }

    #[test]
    fn test_new() {
        let file = XmpFile::new();
        assert!(file.get_xmp().is_none());
        assert_eq!(*file.options(), ScanOptions::default());
    }

    #[test]
    fn test_from_bytes_binary_host() {
        let mut file = XmpFile::new();
        file.from_bytes(&jpeg_like()).unwrap();
        assert_eq!(file.get_xmp().unwrap().title(), "Scan");
    }

    #[test]
    fn test_from_bytes_empty() {
        let mut file = XmpFile::new();
        file.from_bytes(&[]).unwrap();
        let doc = file.get_xmp().unwrap();
        assert!(!doc.has_packet());
        assert!(doc.thumbnails().is_empty());
    }

    #[test]
    fn test_max_bytes_cuts_off_packet() {
        let data = jpeg_like();
        let doc = read_bytes(&data, &ScanOptions::default().max_bytes(20)).unwrap();
        assert!(!doc.has_packet());

        let doc = read_from(&data[..], &ScanOptions::default().max_bytes(data.len())).unwrap();
        assert_eq!(doc.title(), "Scan");
    }

    #[test]
    fn test_strict_reports_malformed_packet() {
        let data = b"\x00<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"><a></x:xmpmeta>";
        assert!(read_bytes(data, &ScanOptions::default()).is_ok());
        assert!(matches!(
            read_bytes(data, &ScanOptions::default().strict()),
            Err(XmpError::ParseError(_))
        ));
    }

    #[test]
    fn test_take_and_close() {
        let mut file = XmpFile::new();
        file.from_reader(&jpeg_like()[..]).unwrap();
        assert!(file.take_xmp().is_some());
        assert!(file.get_xmp().is_none());

        file.from_bytes(PACKET).unwrap();
        file.close();
        assert!(file.get_xmp().is_none());
    }
}
