//! Structured error types for the suite.
//!
//! `StoreError` covers persistence failures of the record store.
//! `SuiteError` is what the individual utilities return to the menu.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading or writing a record slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot file exists but does not hold a JSON array of records.
    #[error("record file {} is corrupted: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any filesystem failure (permission denied, disk full, ...).
    #[error("cannot access record file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn corrupt(path: &Path, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the file was readable but its content could not be parsed.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Error returned by the task list, time log, organizer and note search.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{} is not an existing directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("index {index} is out of range (1..={len})")]
    OutOfRange { index: usize, len: usize },

    #[error("{0} is not supported yet")]
    Unsupported(&'static str),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SuiteError {
    // Convenience constructors

    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::invalid_value(field, format!("{} is required", field))
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for suite operations.
pub type SuiteResult<T> = std::result::Result<T, SuiteError>;
