// crates/epub-meta/src/container.rs
//! EPUB zip container access

use crate::error::{EpubError, EpubResult};
use crate::metadata::BookMetadata;
use crate::opf;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const CONTAINER_ENTRY: &str = "META-INF/container.xml";

/// Read-only view of an EPUB container.
///
/// Only the two entries needed for metadata are ever decompressed; the
/// spine, manifest, and content documents are never read.
pub struct EpubFile;

impl EpubFile {
    /// Reads the bibliographic metadata from the EPUB at `path`.
    ///
    /// Fails if the file is not a zip archive, the container declares no
    /// OPF rootfile, the declared rootfile entry is absent, or either XML
    /// document is malformed.
    pub fn read_metadata(path: &Path) -> EpubResult<BookMetadata> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let container_xml = read_entry(&mut archive, CONTAINER_ENTRY)?;
        let opf_path = opf::parse_rootfile_path(&container_xml, CONTAINER_ENTRY)?;

        let opf_xml = read_entry(&mut archive, &opf_path)?;
        opf::parse_metadata(&opf_xml, &opf_path)
    }
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> EpubResult<String> {
    let mut entry = archive.by_name(name).map_err(|err| match err {
        zip::result::ZipError::FileNotFound => EpubError::MissingEntry(name.to_string()),
        other => EpubError::from(other),
    })?;

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}
