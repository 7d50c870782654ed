//! E-book format types

use std::fmt;
use std::path::Path;

/// Recognized e-book formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EbookFormat {
    /// EPUB - zip container with an OPF package document
    Epub,
}

impl EbookFormat {
    /// Returns all recognized formats
    pub fn all() -> Vec<Self> {
        vec![Self::Epub]
    }

    /// Detects format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "epub" => Some(Self::Epub),
            _ => None,
        }
    }

    /// Detects format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the canonical lowercase file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Epub => "epub",
        }
    }
}

impl fmt::Display for EbookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epub => write!(f, "EPUB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(EbookFormat::from_extension("epub"), Some(EbookFormat::Epub));
        assert_eq!(EbookFormat::from_extension(".epub"), Some(EbookFormat::Epub));
        assert_eq!(EbookFormat::from_extension("EPUB"), Some(EbookFormat::Epub));
        assert_eq!(EbookFormat::from_extension("mobi"), None);
        assert_eq!(EbookFormat::from_extension(""), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            EbookFormat::from_path(Path::new("/books/dune.epub")),
            Some(EbookFormat::Epub)
        );
        assert_eq!(
            EbookFormat::from_path(Path::new("/books/dune.EPUB")),
            Some(EbookFormat::Epub)
        );
        assert_eq!(EbookFormat::from_path(Path::new("/books/dune.pdf")), None);
        assert_eq!(EbookFormat::from_path(Path::new("/books/noext")), None);
    }

    #[test]
    fn test_extension_is_lowercase() {
        for format in EbookFormat::all() {
            assert_eq!(format.extension(), format.extension().to_lowercase());
        }
    }
}
