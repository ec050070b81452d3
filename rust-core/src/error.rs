//! Error types for catalogue export and import.
//!
//! Numeric degeneracies are never errors: they surface as `+∞` or as skipped
//! records. Only file and document handling can fail.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while writing or reading a catalogue document.
#[derive(Debug, Error)]
pub enum FrequencyError {
    /// Reading or writing the file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but is not a nested object of numbers.
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// What was wrong with the document
        message: String,
    },
}

impl FrequencyError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}
