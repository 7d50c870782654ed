// crates/epub-meta/src/error.rs
//! Error types for EPUB reading

use thiserror::Error;

/// Result type for EPUB operations
pub type EpubResult<T> = Result<T, EpubError>;

/// Errors that can occur while reading an EPUB container
#[derive(Debug, Error)]
pub enum EpubError {
    /// The file is not a readable zip archive
    #[error("Not a valid EPUB archive: {0}")]
    InvalidArchive(String),

    /// A required container entry is missing
    #[error("Missing archive entry: {0}")]
    MissingEntry(String),

    /// The container.xml has no usable rootfile reference
    #[error("No OPF rootfile declared in META-INF/container.xml")]
    MissingRootfile,

    /// XML parsing error
    #[error("XML parsing error in {entry}: {message}")]
    XmlParse { entry: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for EpubError {
    fn from(err: zip::result::ZipError) -> Self {
        EpubError::InvalidArchive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EpubError::MissingEntry("META-INF/container.xml".to_string());
        assert!(format!("{}", err).contains("container.xml"));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err = EpubError::from(zip::result::ZipError::FileNotFound);
        assert!(matches!(err, EpubError::InvalidArchive(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = EpubError::from(io_err);
        assert!(matches!(err, EpubError::Io(_)));
    }
}
