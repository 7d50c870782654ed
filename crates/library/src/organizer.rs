// crates/library/src/organizer.rs
//! High-level intake facade: sweep once, then watch

use crate::error::Result;
use crate::extractor::DEFAULT_EXTRACT_TIMEOUT_MS;
use crate::processor::FileProcessor;
use crate::sweeper::{self, SweepSummary};
use crate::watcher::{self, DEFAULT_SETTLE_DELAY_MS};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Intake configuration
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Directory that is both the intake location and the container for
    /// per-author/per-series output folders
    pub root_dir: PathBuf,
    /// Deadline for a single metadata extraction
    pub extract_timeout: Duration,
    /// Wait between an add notification and processing
    pub settle_delay: Duration,
}

impl OrganizerConfig {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            extract_timeout: Duration::from_millis(DEFAULT_EXTRACT_TIMEOUT_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }

    pub fn with_extract_timeout(mut self, timeout: Duration) -> Self {
        self.extract_timeout = timeout;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Owns the shared per-file processor and drives both intake triggers.
///
/// No state is shared between file runs beyond the filesystem itself and
/// the processor's move lock; restarts simply re-sweep whatever is still
/// in the root.
pub struct Organizer {
    config: OrganizerConfig,
    processor: Arc<FileProcessor>,
}

impl Organizer {
    pub fn new(config: OrganizerConfig) -> Self {
        let processor = Arc::new(FileProcessor::new(
            config.root_dir.clone(),
            config.extract_timeout,
        ));
        Self { config, processor }
    }

    /// One-shot sequential pass over files already in the root directory
    pub async fn sweep(&self) -> Result<SweepSummary> {
        sweeper::sweep(&self.processor, &self.config.root_dir).await
    }

    /// Watches the root directory indefinitely, processing each newly
    /// added direct child after the settle delay
    pub async fn watch(&self) -> Result<()> {
        watcher::watch(
            self.processor.clone(),
            self.config.root_dir.clone(),
            self.config.settle_delay,
        )
        .await
    }

    /// Startup flow: sweep to completion, then watch until shutdown.
    /// A sweep-level listing failure is logged and does not prevent the
    /// watch phase from starting.
    pub async fn run(&self) -> Result<()> {
        info!("Root directory: {}", self.config.root_dir.display());

        if let Err(e) = self.sweep().await {
            log::error!("Initial sweep failed: {}", e);
        }

        self.watch().await
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OrganizerConfig::new("/books");
        assert_eq!(config.root_dir, PathBuf::from("/books"));
        assert_eq!(config.extract_timeout, Duration::from_millis(5000));
        assert_eq!(config.settle_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_config_builder() {
        let config = OrganizerConfig::new("/books")
            .with_extract_timeout(Duration::from_millis(250))
            .with_settle_delay(Duration::from_millis(10));

        assert_eq!(config.extract_timeout, Duration::from_millis(250));
        assert_eq!(config.settle_delay, Duration::from_millis(10));
    }
}
