// crates/library/src/watcher.rs
//! Event-driven intake of newly added files

use crate::error::{IntakeError, Result};
use crate::processor::FileProcessor;
use log::{debug, error, info};
use notify::{Error as NotifyError, Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const CHANNEL_BUFFER_SIZE: usize = 100;

/// Default wait between an add notification and processing, so a file
/// still being written by the producing application has time to settle
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// True when `path` sits directly inside `root` (no further separator
/// below the root)
fn is_direct_child(root: &Path, path: &Path) -> bool {
    match path.strip_prefix(root) {
        Ok(relative) => relative.components().count() == 1,
        Err(_) => false,
    }
}

/// Watches `root` for newly added direct children and schedules each for
/// processing after `settle_delay`.
///
/// Every qualifying add event becomes an independent task; runs may
/// interleave at their await points and the mover's destination lock is
/// the only serialization between them. The watch is long-lived: this
/// function only returns on a watch setup failure or if the underlying
/// watcher shuts down.
pub async fn watch(
    processor: Arc<FileProcessor>,
    root: PathBuf,
    settle_delay: Duration,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<PathBuf>(CHANNEL_BUFFER_SIZE);

    let setup_err = |source| IntakeError::WatchSetup {
        path: root.clone(),
        source,
    };

    let filter_root = root.clone();
    let mut watcher =
        notify::recommended_watcher(move |res: std::result::Result<Event, NotifyError>| {
            match res {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Create(_)) {
                        return;
                    }
                    for path in event.paths {
                        if is_direct_child(&filter_root, &path) {
                            let _ = tx.blocking_send(path);
                        }
                    }
                }
                Err(e) => error!("Watch error: {}", e),
            }
        })
        .map_err(setup_err)?;

    // Non-recursive: subdirectory activity is invisible, not just filtered
    watcher
        .watch(&root, RecursiveMode::NonRecursive)
        .map_err(setup_err)?;

    info!("Watching for new EPUB files in {}", root.display());

    while let Some(path) = rx.recv().await {
        info!("New file detected: {}", path.display());
        let processor = processor.clone();
        tokio::spawn(async move {
            tokio::time::sleep(settle_delay).await;

            // The entry may be a directory, or gone again by now
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                _ => {
                    debug!("Skipping non-file event target: {}", path.display());
                    return;
                }
            }

            if let Err(e) = processor.process(&path).await {
                error!("{}", e);
            }
        });
    }

    Ok(())
}
