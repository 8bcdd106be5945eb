//! Async file loading backed by tokio

use crate::core::document::XmpDocument;
use crate::core::error::XmpResult;
use crate::core::options::ScanOptions;
use crate::files::file::read_bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read everything from an async reader (up to the byte limit) and scan it
pub async fn read_from_async<R: AsyncRead + Unpin>(
    reader: R,
    options: &ScanOptions,
) -> XmpResult<XmpDocument> {
    let mut data = Vec::new();
    match options.max_bytes {
        Some(limit) => reader.take(limit as u64).read_to_end(&mut data).await?,
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut data).await?
        }
    };
    read_bytes(&data, options)
}

/// Open a file from a path and scan it without blocking the runtime
pub async fn read_file_async<P: AsRef<std::path::Path>>(
    path: P,
    options: &ScanOptions,
) -> XmpResult<XmpDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading file");
    let file = tokio::fs::File::open(path).await?;
    read_from_async(file, options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_from_async() {
        let data: &[u8] = b"\x89PNG\r\n<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"/>";
        let doc = read_from_async(data, &ScanOptions::default()).await.unwrap();
        assert!(doc.has_packet());

        let doc = read_from_async(data, &ScanOptions::default().max_bytes(8))
            .await
            .unwrap();
        assert!(!doc.has_packet());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = read_file_async("/nonexistent/xmpsift/file.pdf", &ScanOptions::default()).await;
        assert!(matches!(result, Err(crate::XmpError::IoError(_))));
    }
}
