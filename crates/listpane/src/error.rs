//! Error types for views and configuration.

use std::path::PathBuf;

use listpane_export::ExportError;
use listpane_seeker::SeekerError;
use thiserror::Error;

/// Errors raised by [`ListView`](crate::view::ListView) operations.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The field is not one of the view's select filters.
    #[error("'{field}' is not a filter of the {view} view")]
    UnknownFilter { view: String, field: String },

    /// A range was selected on a view without a range filter.
    #[error("the {view} view has no range filter")]
    NoRangeFilter { view: String },

    #[error(transparent)]
    Seeker(#[from] SeekerError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while loading configuration or data files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("page size for {view} must be at least 1")]
    InvalidPageSize { view: String },
}
