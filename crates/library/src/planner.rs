// crates/library/src/planner.rs
//! Destination path planning

use crate::sanitize::sanitize;
use bookdrop_epub_meta::{BookMetadata, EbookFormat};

const UNKNOWN_TITLE: &str = "Unknown_Title";
const UNKNOWN_AUTHOR: &str = "Unknown_Author";

/// A planned destination, relative to the root directory.
///
/// Both components are safe path segments: no separators, no reserved
/// characters, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    /// Folder directly under the root (series name, else author)
    pub folder_name: String,
    /// File name inside the folder (`<title>_<author>.<ext>`)
    pub file_name: String,
}

/// Derives destination names from metadata
pub struct PathPlanner;

impl PathPlanner {
    /// Plans the destination for a book. Pure and total: every field is
    /// optional and has a fallback, so planning cannot fail.
    ///
    /// Resolution order:
    /// - title: `metadata.title`, else `Unknown_Title`
    /// - author: `metadata.creator`, else `metadata.author`, else
    ///   `Unknown_Author`
    /// - folder: series when present and non-empty, otherwise author
    pub fn plan(metadata: &BookMetadata, format: EbookFormat) -> DestinationPlan {
        let title = metadata.title.as_deref().unwrap_or(UNKNOWN_TITLE);
        let author = metadata
            .creator
            .as_deref()
            .or(metadata.author.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR);
        let series = metadata.series.as_deref().filter(|s| !s.is_empty());

        let sanitized_title = sanitize(title);
        let sanitized_author = sanitize(author);

        let file_name = format!(
            "{}_{}.{}",
            sanitized_title,
            sanitized_author,
            format.extension()
        );
        let folder_name = match series {
            Some(series) => sanitize(series),
            None => sanitized_author,
        };

        DestinationPlan {
            folder_name,
            file_name,
        }
    }
}
