// crates/library/src/error.rs

use bookdrop_epub_meta::EpubError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Metadata extraction failed for {}: {source}", .path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: EpubError,
    },

    #[error("Metadata extraction timed out after {timeout_ms} ms for {}", .path.display())]
    ExtractionTimeout { path: PathBuf, timeout_ms: u64 },

    #[error("Extraction task failed for {}: {message}", .path.display())]
    ExtractionTask { path: PathBuf, message: String },

    #[error("Failed to create folder {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A file already exists at destination {}", .path.display())]
    DestinationExists { path: PathBuf },

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to watch directory {}: {source}", .path.display())]
    WatchSetup {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, IntakeError>;
pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

impl IntakeError {
    /// True for failures that leave the source file in place for a later
    /// sweep; false only for conditions that abort the calling phase.
    pub fn is_per_file(&self) -> bool {
        !matches!(self, Self::ListDir { .. } | Self::WatchSetup { .. })
    }
}
