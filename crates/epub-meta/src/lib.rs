// crates/epub-meta/src/lib.rs
//! EPUB container and metadata reading
//!
//! This crate reads the bibliographic metadata Bookdrop files books by:
//! - `dc:title`
//! - `dc:creator` (plus the nonstandard `dc:author` some producers emit)
//! - series, from the `calibre:series` OPF meta or an EPUB 3
//!   `belongs-to-collection` entry
//!
//! An EPUB is a zip archive whose `META-INF/container.xml` points at an
//! OPF package document; only those two entries are ever read, the spine
//! and manifest are never touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bookdrop_epub_meta::EpubFile;
//!
//! let metadata = EpubFile::read_metadata(Path::new("book.epub")).expect("Failed to read EPUB");
//! println!("title: {:?}, creator: {:?}", metadata.title, metadata.creator);
//! ```

mod container;
mod error;
mod format;
mod metadata;
mod opf;

pub use container::EpubFile;
pub use error::{EpubError, EpubResult};
pub use format::EbookFormat;
pub use metadata::BookMetadata;
