// crates/library/src/mover.rs
//! Move execution with a serialized, reject-on-collision policy

use crate::error::{IntakeError, Result};
use crate::planner::DestinationPlan;
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Relocates files into their planned destination.
///
/// All renames go through one async lock, and inside the critical section
/// an existing destination is rejected with
/// [`IntakeError::DestinationExists`]. Two concurrent files that plan the
/// same destination therefore produce exactly one move and one
/// deterministic rejection; nothing is ever overwritten and the rejected
/// source stays where it was.
pub struct Mover {
    move_lock: Mutex<()>,
}

impl Mover {
    pub fn new() -> Self {
        Self {
            move_lock: Mutex::new(()),
        }
    }

    /// Moves `source` to `<root>/<folder_name>/<file_name>` and returns
    /// the destination path.
    ///
    /// The destination folder is created if absent (already existing is
    /// success). On any failure the source file is untouched; no partial
    /// state exists before the rename.
    pub async fn move_into_place(
        &self,
        source: &Path,
        plan: &DestinationPlan,
        root: &Path,
    ) -> Result<PathBuf> {
        let dest_folder = root.join(&plan.folder_name);
        fs::create_dir_all(&dest_folder)
            .await
            .map_err(|source| IntakeError::CreateDir {
                path: dest_folder.clone(),
                source,
            })?;
        debug!("Destination folder ready: {}", dest_folder.display());

        let dest_file = dest_folder.join(&plan.file_name);

        let _guard = self.move_lock.lock().await;

        match fs::metadata(&dest_file).await {
            Ok(_) => {
                return Err(IntakeError::DestinationExists {
                    path: dest_file.clone(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(IntakeError::Io(e)),
        }

        fs::rename(source, &dest_file)
            .await
            .map_err(|source_err| IntakeError::Move {
                from: source.to_path_buf(),
                to: dest_file.clone(),
                source: source_err,
            })?;

        info!(
            "File moved: {} -> {}",
            source.display(),
            dest_file.display()
        );
        Ok(dest_file)
    }
}

impl Default for Mover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn plan(folder: &str, file: &str) -> DestinationPlan {
        DestinationPlan {
            folder_name: folder.to_string(),
            file_name: file.to_string(),
        }
    }

    #[tokio::test]
    async fn test_moves_file_and_creates_folder() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("incoming.epub");
        std_fs::write(&source, b"book").unwrap();

        let mover = Mover::new();
        let dest = mover
            .move_into_place(&source, &plan("Frank_Herbert", "Dune_Frank_Herbert.epub"), root.path())
            .await
            .unwrap();

        assert_eq!(
            dest,
            root.path().join("Frank_Herbert").join("Dune_Frank_Herbert.epub")
        );
        assert!(dest.is_file());
        assert!(!source.exists());
    }

    #[tokio::test]
    async fn test_existing_folder_is_success() {
        let root = TempDir::new().unwrap();
        std_fs::create_dir(root.path().join("Author")).unwrap();
        let source = root.path().join("a.epub");
        std_fs::write(&source, b"book").unwrap();

        let mover = Mover::new();
        let result = mover
            .move_into_place(&source, &plan("Author", "a.epub"), root.path())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_collision_rejected_source_untouched() {
        let root = TempDir::new().unwrap();
        std_fs::create_dir(root.path().join("Author")).unwrap();
        std_fs::write(root.path().join("Author").join("b.epub"), b"existing").unwrap();

        let source = root.path().join("b.epub");
        std_fs::write(&source, b"newcomer").unwrap();

        let mover = Mover::new();
        let result = mover
            .move_into_place(&source, &plan("Author", "b.epub"), root.path())
            .await;

        assert!(matches!(result, Err(IntakeError::DestinationExists { .. })));
        assert!(source.is_file());
        let existing = std_fs::read(root.path().join("Author").join("b.epub")).unwrap();
        assert_eq!(existing, b"existing");
    }

    #[tokio::test]
    async fn test_concurrent_same_destination_one_winner() {
        let root = TempDir::new().unwrap();
        let first = root.path().join("one.epub");
        let second = root.path().join("two.epub");
        std_fs::write(&first, b"one").unwrap();
        std_fs::write(&second, b"two").unwrap();

        let mover = std::sync::Arc::new(Mover::new());
        let the_plan = plan("Author", "same.epub");

        let (r1, r2) = tokio::join!(
            mover.move_into_place(&first, &the_plan, root.path()),
            mover.move_into_place(&second, &the_plan, root.path()),
        );

        let winners = [&r1, &r2].iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        let loser = if r1.is_err() { r1 } else { r2 };
        assert!(matches!(loser, Err(IntakeError::DestinationExists { .. })));
        // loser's source file is still present
        assert_eq!(
            [first.exists(), second.exists()].iter().filter(|b| **b).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_missing_source_is_move_error() {
        let root = TempDir::new().unwrap();
        let mover = Mover::new();
        let result = mover
            .move_into_place(
                &root.path().join("ghost.epub"),
                &plan("Author", "ghost.epub"),
                root.path(),
            )
            .await;
        assert!(matches!(result, Err(IntakeError::Move { .. })));
    }
}
