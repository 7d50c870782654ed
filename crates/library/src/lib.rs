//! Bookdrop intake pipeline
//!
//! Orchestrates the file-intake flow: sweep the root directory once for
//! pre-existing files, then watch it for new arrivals. Each file runs
//! through extension check, timeout-bounded metadata extraction,
//! destination planning, and an atomic move into
//! `<root>/<series-or-author>/<title>_<author>.epub`.
//!
//! Failures are contained per file: a book that cannot be read or moved
//! stays in the root directory for a later sweep or manual handling.

pub mod error;
pub mod extractor;
pub mod mover;
pub mod organizer;
pub mod planner;
pub mod processor;
pub mod sanitize;
pub mod sweeper;
pub mod watcher;

pub use error::{IntakeError, IntakeResult};
pub use extractor::{MetadataExtractor, DEFAULT_EXTRACT_TIMEOUT_MS};
pub use mover::Mover;
pub use organizer::{Organizer, OrganizerConfig};
pub use planner::{DestinationPlan, PathPlanner};
pub use processor::{FileProcessor, Outcome};
pub use sanitize::sanitize;
pub use sweeper::SweepSummary;
pub use watcher::DEFAULT_SETTLE_DELAY_MS;
