//! Error types for tagkit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagkit library
///
/// Malformed tag text is never an error (the parser degrades to treating
/// input as literal tags); only category table loading is fallible.
#[derive(Debug, Error)]
pub enum TagkitError {
    #[error("Category table not found: {0}")]
    TableNotFound(PathBuf),

    #[error("Category table {path} is not valid JSON: {source}")]
    TableParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using TagkitError
pub type Result<T> = std::result::Result<T, TagkitError>;
