//! Error types for scanning note trees
//!
//! Every condition the scanner cannot make sense of is fatal for the whole
//! run, so these errors carry enough location detail to fix the offending
//! note by hand.

use std::path::PathBuf;
use thiserror::Error;

/// Why a `TODO` line could not be turned into a prioritized entry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoLineError {
    /// Line ends before the priority column
    #[error("line is too short to carry a priority digit at column {column}")]
    MissingPriority { column: usize },

    /// Priority column holds something other than 0, 1 or 2
    #[error("expected priority digit 0, 1 or 2 at column {column}, found {found:?}")]
    InvalidPriority { column: usize, found: char },

    /// No `:` separating the label from the entry text
    #[error("missing ':' before the TODO text")]
    MissingColon,
}

/// Errors raised while walking and scanning a note tree
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading a file or listing a directory failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `TODO` line is malformed
    #[error("{}:{line}: {source}", path.display())]
    Todo {
        path: PathBuf,
        line: usize,
        #[source]
        source: TodoLineError,
    },

    /// A note file name does not follow `<prefix>-<index>.<ext>`
    #[error("note file name {name:?} has no numeric index (expected <prefix>-<index>.<ext>)")]
    NoteIndex { name: String },

    /// A file or directory name is not valid UTF-8
    #[error("path {} is not valid UTF-8", path.display())]
    NonUtf8Name { path: PathBuf },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
