/*!
 * Error types for the newsdesk application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::fmt;

use thiserror::Error;

/// Errors that can occur while publishing a record through the feed pipeline
#[derive(Error, Debug)]
pub enum FeedError {
    /// The expiration date of an ad could not be parsed
    #[error("Invalid expiration date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The record text was empty after normalization
    #[error("Record text is empty")]
    EmptyText,

    /// Error from the record store
    #[error("Store error: {0}")]
    Store(String),

    /// Error from the append log or statistics output
    #[error("Log error: {0}")]
    Log(String),
}

/// Errors that can occur while importing records from a file
#[derive(Error, Debug)]
pub enum ImportError {
    /// The source file could not be parsed at all; the file is preserved
    #[error("Malformed {format} source: {message}")]
    MalformedSource {
        /// Name of the source format ("text", "json", "xml")
        format: &'static str,
        /// Parser error detail
        message: String,
    },

    /// Error reading or deleting the source file
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecoverable pipeline error while processing a record
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Reason a single record was skipped during import.
///
/// Per-record skips never abort the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Delimited-text or XML record with an unrecognized kind
    UnknownRecordType,
    /// JSON record with an unrecognized publication_type
    UnknownPublicationType,
    /// A required field is missing or blank
    MissingField,
    /// An ad expiration date that does not parse as YYYY-MM-DD
    InvalidDate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownRecordType => write!(f, "unknown record type"),
            SkipReason::UnknownPublicationType => write!(f, "unknown publication type"),
            SkipReason::MissingField => write!(f, "missing field"),
            SkipReason::InvalidDate => write!(f, "invalid date"),
        }
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for FeedError {
    fn from(error: anyhow::Error) -> Self {
        Self::Store(error.to_string())
    }
}

impl From<std::io::Error> for FeedError {
    fn from(error: std::io::Error) -> Self {
        Self::Log(error.to_string())
    }
}
