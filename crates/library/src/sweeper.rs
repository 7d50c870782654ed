// crates/library/src/sweeper.rs
//! One-shot startup sweep of the root directory

use crate::error::{IntakeError, Result};
use crate::processor::{FileProcessor, Outcome};
use log::{error, info};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Counts from a completed sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Files relocated
    pub moved: usize,
    /// Entries left alone (wrong extension, or a subdirectory)
    pub skipped: usize,
    /// Files that hit a per-file failure and stayed in place
    pub failed: usize,
}

/// Processes every file directly inside `root`, one at a time, in listing
/// order. Subdirectories are ignored entirely.
///
/// The listing is taken once, up front, so folders created by the moves
/// themselves never enter the sweep. Failing to list `root` aborts with
/// `ListDir`; per-file failures are logged and counted, never propagated.
pub async fn sweep(processor: &FileProcessor, root: &Path) -> Result<SweepSummary> {
    info!("Sweeping existing files in {}", root.display());

    let mut summary = SweepSummary::default();
    let files = list_files(root, &mut summary).await?;

    for path in files {
        match processor.process(&path).await {
            Ok(Outcome::Moved(_)) => summary.moved += 1,
            Ok(Outcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                error!("{}", e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Sweep completed: {} moved, {} skipped, {} failed",
        summary.moved, summary.skipped, summary.failed
    );
    Ok(summary)
}

/// Takes the one-shot listing of direct children, keeping files only
async fn list_files(root: &Path, summary: &mut SweepSummary) -> Result<Vec<PathBuf>> {
    let list_err = |source| IntakeError::ListDir {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(root).await.map_err(list_err)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let path = entry.path();
        match entry.file_type().await {
            Ok(file_type) if file_type.is_file() => files.push(path),
            Ok(_) => summary.skipped += 1,
            Err(e) => {
                error!("Could not stat {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(files)
}
