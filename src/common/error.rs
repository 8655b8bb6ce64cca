//! Unified error types for moddoc.
//!
//! Every fallible operation in the crate (catalog loading, configuration,
//! package serialization and the final write) reports through [`Error`].
use thiserror::Error;

/// Main error type for moddoc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A catalog entry was rejected by validation
    #[error("Invalid entity #{index} ({name:?}): {reason}")]
    InvalidEntity {
        /// 1-based position in the catalog
        index: usize,
        name: String,
        reason: String,
    },

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Package part not found while reading back
    #[error("Part not found: {0}")]
    PartNotFound(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// Result type for moddoc operations.
pub type Result<T> = std::result::Result<T, Error>;
