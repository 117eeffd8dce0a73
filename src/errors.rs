/*!
 * Error types for the docsync application.
 *
 * This module contains custom error types for the different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Expected per-file conditions (a document that already has frontmatter, a missing
 * English counterpart, ...) are not errors; they are reported as
 * [`SkipReason`](crate::pipeline::report::SkipReason) values instead.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking a document tree
#[derive(Error, Debug)]
pub enum WalkError {
    /// The root (or a directory below it) is missing or unreadable
    #[error("Cannot access directory {path:?}: {reason}")]
    DirectoryAccess {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },
}

impl WalkError {
    /// Path of the directory the walk failed on
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::DirectoryAccess { path, .. } => path,
        }
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(PathBuf::from).unwrap_or_default();
        Self::DirectoryAccess {
            path,
            reason: error.to_string(),
        }
    }
}

/// Errors that can occur while processing a single document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Reading or writing the document failed
    #[error("I/O failure on {path:?}: {source}")]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while validating the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A language code is not a valid ISO 639 code
    #[error("Invalid language code for {field}: {code}")]
    InvalidLanguage { field: &'static str, code: String },

    /// Source and target locale denote the same language
    #[error("Source and target language must differ (both are {0})")]
    SameLanguage(String),

    /// A directory setting is empty
    #[error("Directory setting '{0}' must not be empty")]
    EmptyDirectory(&'static str),

    /// Concurrency must allow at least one file in flight
    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// Per-document failure escalated by a caller
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
