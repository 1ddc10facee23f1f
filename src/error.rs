//! Error types for PisoPiso
//!
//! Every fallible ledger operation returns a [`PisoError`]. The variants line
//! up with the ways a caller can get a ledger operation wrong (validation,
//! out-of-range positions) and the ways the filesystem can let it down.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for PisoPiso operations
#[derive(Error, Debug)]
pub enum PisoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// General file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entry-time rejection of user input; nothing was changed
    #[error("Validation error: {0}")]
    Validation(String),

    /// A position outside the current ledger bounds; nothing was changed
    #[error("Index {index} is out of range for a ledger of {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The backing file could not be rewritten.
    ///
    /// The in-memory mutation that triggered the write has already been
    /// applied and is not rolled back.
    #[error("Failed to persist ledger to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but could not be read
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PisoError {
    /// Create an out-of-range error for the given index and ledger length
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

impl From<std::io::Error> for PisoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PisoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PisoPiso operations
pub type PisoResult<T> = Result<T, PisoError>;
