//! Error types for CSV export.

use thiserror::Error;

/// Errors that can occur while building or delivering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Export filenames must be a bare file name, never a path.
    #[error("invalid export filename '{0}'")]
    InvalidFilename(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
