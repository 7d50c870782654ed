// crates/library/src/extractor.rs
//! Timeout-bounded metadata extraction

use crate::error::{IntakeError, Result};
use bookdrop_epub_meta::{BookMetadata, EpubFile};
use log::debug;
use std::path::Path;
use std::time::Duration;
use tokio::task;
use tokio::time;

/// Default deadline for a single extraction
pub const DEFAULT_EXTRACT_TIMEOUT_MS: u64 = 5000;

/// Extracts metadata from e-book files, bounded by a fixed deadline.
///
/// The zip/XML parse is synchronous, so it runs on the blocking pool and
/// races the deadline; whichever finishes first wins. A parse that loses
/// the race keeps running on the pool until it returns, but its result is
/// discarded and the file is reported as timed out.
pub struct MetadataExtractor {
    timeout: Duration,
}

impl MetadataExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Reads metadata from the file at `path`.
    ///
    /// Parser errors and deadline expiry are both extraction failures for
    /// the caller; the error variant keeps the cause distinguishable.
    pub async fn extract(&self, path: &Path) -> Result<BookMetadata> {
        let parse_path = path.to_path_buf();
        let parse = task::spawn_blocking(move || EpubFile::read_metadata(&parse_path));

        match time::timeout(self.timeout, parse).await {
            Err(_elapsed) => Err(IntakeError::ExtractionTimeout {
                path: path.to_path_buf(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
            Ok(Err(join_err)) => Err(IntakeError::ExtractionTask {
                path: path.to_path_buf(),
                message: join_err.to_string(),
            }),
            Ok(Ok(Err(parse_err))) => Err(IntakeError::Extraction {
                path: path.to_path_buf(),
                source: parse_err,
            }),
            Ok(Ok(Ok(metadata))) => {
                debug!("Metadata extracted from {}: {:?}", path.display(), metadata);
                Ok(metadata)
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_EXTRACT_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_extract_invalid_file_is_extraction_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.epub");
        fs::write(&path, b"definitely not a zip").unwrap();

        let extractor = MetadataExtractor::default();
        let result = extractor.extract(&path).await;
        assert!(matches!(result, Err(IntakeError::Extraction { .. })));
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_extraction_error() {
        let extractor = MetadataExtractor::default();
        let result = extractor.extract(Path::new("/nonexistent/book.epub")).await;
        assert!(matches!(result, Err(IntakeError::Extraction { .. })));
    }

    #[tokio::test]
    async fn test_zero_timeout_reports_timeout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("any.epub");
        fs::write(&path, b"content").unwrap();

        // A zero deadline always loses the race, whatever the file holds
        let extractor = MetadataExtractor::new(Duration::from_millis(0));
        let result = extractor.extract(&path).await;
        assert!(matches!(
            result,
            Err(IntakeError::ExtractionTimeout { timeout_ms: 0, .. })
        ));
    }
}
