// crates/epub-meta/src/opf.rs
//! Package document (OPF) and container.xml parsing

use crate::error::{EpubError, EpubResult};
use crate::metadata::BookMetadata;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Strips any namespace prefix from an element name (`dc:title` -> `title`)
fn local_name(raw: &[u8]) -> String {
    let name = String::from_utf8_lossy(raw);
    match name.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.to_string(),
    }
}

fn xml_error(entry: &str, err: impl std::fmt::Display) -> EpubError {
    EpubError::XmlParse {
        entry: entry.to_string(),
        message: err.to_string(),
    }
}

/// Extracts the OPF rootfile path from `META-INF/container.xml`.
///
/// When several rootfiles are declared the first one wins, matching how
/// reading systems pick the default rendition.
pub(crate) fn parse_rootfile_path(content: &str, entry: &str) -> EpubResult<String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if local_name(e.name().as_ref()) == "rootfile" {
                    for attr in e.attributes().flatten() {
                        if local_name(attr.key.as_ref()) == "full-path" {
                            let value = String::from_utf8_lossy(&attr.value).trim().to_string();
                            if !value.is_empty() {
                                return Ok(value);
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(entry, e)),
            _ => {}
        }
        buf.clear();
    }

    Err(EpubError::MissingRootfile)
}

/// Parses the `<metadata>` fields Bookdrop cares about out of an OPF
/// package document.
///
/// Unknown elements are skipped and missing fields stay `None`; a package
/// document with no metadata at all is not an error.
pub(crate) fn parse_metadata(content: &str, entry: &str) -> EpubResult<BookMetadata> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut metadata = BookMetadata::default();
    let mut text_buffer = String::new();
    // Set while inside a <meta property="belongs-to-collection"> element,
    // whose series name arrives as text content rather than an attribute.
    let mut in_collection_meta = false;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if local_name(e.name().as_ref()) == "meta" {
                    in_collection_meta = meta_property(&e)
                        .map(|p| p == "belongs-to-collection")
                        .unwrap_or(false);
                }
                text_buffer.clear();
            }
            Ok(Event::Empty(e)) => {
                // Calibre emits series as a self-closing meta:
                // <meta name="calibre:series" content="..."/>
                if local_name(e.name().as_ref()) == "meta" {
                    if let Some(series) = calibre_series(&e) {
                        metadata.set_field("series", &series);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                text_buffer = e.unescape().map(|s| s.to_string()).unwrap_or_default();
            }
            Ok(Event::End(e)) => {
                let element_name = local_name(e.name().as_ref());

                match element_name.as_str() {
                    "title" => metadata.set_field("title", &text_buffer),
                    "creator" => metadata.set_field("creator", &text_buffer),
                    "author" => metadata.set_field("author", &text_buffer),
                    "meta" => {
                        if in_collection_meta {
                            metadata.set_field("series", &text_buffer);
                            in_collection_meta = false;
                        }
                    }
                    "metadata" => break,
                    _ => {}
                }

                text_buffer.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(entry, e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(metadata)
}

fn meta_property(e: &BytesStart<'_>) -> Option<String> {
    for attr in e.attributes().flatten() {
        if local_name(attr.key.as_ref()) == "property" {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}

/// Returns the series name if this meta element is a calibre:series entry
fn calibre_series(e: &BytesStart<'_>) -> Option<String> {
    let mut name = None;
    let mut content = None;

    for attr in e.attributes().flatten() {
        let key = local_name(attr.key.as_ref());
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match key.as_str() {
            "name" => name = Some(value),
            "content" => content = Some(value),
            _ => {}
        }
    }

    match name.as_deref() {
        Some("calibre:series") => content,
        _ => None,
    }
}
