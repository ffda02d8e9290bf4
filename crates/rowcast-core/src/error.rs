//! Error types for rowcast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening documents or coercing cell values.
///
/// A file that does not exist on a path-based open is not represented here:
/// the loader reports it as `Ok(None)`. Likewise, out-of-range indices and
/// sparse/missing cells are `None` results, never errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Password missing or incorrect for a protected document
    #[error("Encrypted document: {0}")]
    EncryptedDocument(String),

    /// Content does not match any supported container format
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected a recognized container
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error while reading a source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A strict typed accessor was invoked against a cell with a different tag
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A field accessor failed while mapping a row range
    #[error("Row mapping failed at row {row}, column {column}: {source}")]
    FieldAccess {
        row: i64,
        column: i64,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an accessor failure with the coordinates it occurred at.
    pub fn at(self, row: i64, column: i64) -> Self {
        Error::FieldAccess {
            row,
            column,
            source: Box::new(self),
        }
    }
}
