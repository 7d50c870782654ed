//! Bibliographic metadata record

use serde::{Deserialize, Serialize};

/// Metadata extracted from an EPUB package document.
///
/// Every field is optional; producers disagree wildly on which tags they
/// emit. Whitespace-only values are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Book title (`dc:title`)
    pub title: Option<String>,
    /// Primary creator (`dc:creator`)
    pub creator: Option<String>,
    /// Author from the nonstandard `dc:author` element
    pub author: Option<String>,
    /// Series name (`calibre:series` meta or `belongs-to-collection`)
    pub series: Option<String>,
}

impl BookMetadata {
    /// Returns true if no field carries a value
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.creator.is_none()
            && self.author.is_none()
            && self.series.is_none()
    }

    /// Stores a value for the given field, discarding blanks.
    ///
    /// Earlier values win so the first occurrence of a repeated element
    /// (e.g. multiple `dc:creator` entries) is the one kept.
    pub(crate) fn set_field(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let slot = match field {
            "title" => &mut self.title,
            "creator" => &mut self.creator,
            "author" => &mut self.author,
            "series" => &mut self.series,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }
}
