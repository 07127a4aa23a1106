//! Image ingestion: user file → inlined data URI.
//!
//! The encoded string goes straight into an image slot, so the exported page
//! never needs a second fetch. This is the only suspension point in the
//! system; the document is not touched until the encoded result is applied
//! through the ordinary mutation path.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image file is empty: {0}")]
    EmptyPayload(PathBuf),
}

/// Read an image file and encode it as a `data:` URI.
///
/// Fails on unreadable or empty files; no retry, the caller re-selects the
/// file. A failure leaves the document untouched.
pub async fn ingest_image(path: &Path) -> Result<String, IngestError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(IngestError::EmptyPayload(path.to_path_buf()));
    }

    Ok(format!(
        "data:{};base64,{}",
        sniff_media_type(&bytes),
        STANDARD.encode(&bytes)
    ))
}

/// Media type from magic bytes; extension is not trusted.
fn sniff_media_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if bytes.starts_with(b"<") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_ingest_png_produces_data_uri() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&PNG_HEADER).unwrap();
        file.write_all(&[0u8; 16]).unwrap();
        file.flush().unwrap();

        let uri = ingest_image(file.path()).await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_ingest_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ingest_image(file.path()).await.unwrap_err();
        assert!(matches!(err, IngestError::EmptyPayload(_)));
    }

    #[tokio::test]
    async fn test_ingest_missing_file_fails() {
        let err = ingest_image(Path::new("/nonexistent/image.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_media_type_sniffing() {
        assert_eq!(sniff_media_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_media_type(b"GIF89a..."), "image/gif");
        assert_eq!(sniff_media_type(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff_media_type(b"<svg xmlns=\"x\"/>"), "image/svg+xml");
        assert_eq!(sniff_media_type(b"plain"), "application/octet-stream");
    }
}
