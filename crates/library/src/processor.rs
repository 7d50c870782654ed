// crates/library/src/processor.rs
//! Per-file processing pipeline

use crate::error::Result;
use crate::extractor::MetadataExtractor;
use crate::mover::Mover;
use crate::planner::PathPlanner;
use bookdrop_epub_meta::EbookFormat;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Terminal result of one file's processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File relocated to the returned destination path
    Moved(PathBuf),
    /// File left in place; not a recognized e-book
    Skipped,
}

/// Runs one file through extension check, extraction, planning, and move.
///
/// Stages short-circuit on the first failure and nothing is retried; a
/// failed file stays at its original path and is reported through the
/// returned error. Failures never cross file boundaries: each call is an
/// isolated run against a shared extractor and mover.
pub struct FileProcessor {
    root: PathBuf,
    extractor: MetadataExtractor,
    mover: Mover,
}

impl FileProcessor {
    pub fn new(root: PathBuf, extract_timeout: Duration) -> Self {
        Self {
            root,
            extractor: MetadataExtractor::new(extract_timeout),
            mover: Mover::new(),
        }
    }

    /// Processes a single file to a terminal outcome.
    pub async fn process(&self, path: &Path) -> Result<Outcome> {
        let Some(format) = EbookFormat::from_path(path) else {
            debug!("Ignoring non-ebook file: {}", path.display());
            return Ok(Outcome::Skipped);
        };

        info!("Processing file: {}", path.display());

        let metadata = self.extractor.extract(path).await?;
        let plan = PathPlanner::plan(&metadata, format);
        debug!(
            "Planned destination: {}/{}",
            plan.folder_name, plan.file_name
        );

        let dest = self.mover.move_into_place(path, &plan, &self.root).await?;
        Ok(Outcome::Moved(dest))
    }

    /// Root directory files are organized under
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use std::fs;
    use tempfile::TempDir;

    fn processor(root: &TempDir) -> FileProcessor {
        FileProcessor::new(root.path().to_path_buf(), Duration::from_millis(5000))
    }

    #[tokio::test]
    async fn test_unrecognized_extension_skipped_and_untouched() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("notes.txt");
        fs::write(&path, b"text").unwrap();

        let outcome = processor(&root).process(&path).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_extraction_failure_leaves_file_in_place() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("corrupt.epub");
        fs::write(&path, b"not actually an epub").unwrap();

        let result = processor(&root).process(&path).await;
        assert!(matches!(result, Err(IntakeError::Extraction { .. })));
        assert!(path.is_file());
        // nothing was created under the root
        let entries: Vec<_> = fs::read_dir(root.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
