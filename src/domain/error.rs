//! Error types for the journal list generator.
//!
//! This module defines the centralized error type [`JournalListError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for journal list generation.
///
/// Any variant returned from a generation run aborts that run. There is no
/// per-file recovery: the first failure propagates to the process boundary.
///
/// # Examples
///
/// ```
/// use journal_list::JournalListError;
///
/// fn decode_store() -> Result<(), JournalListError> {
///     Err(JournalListError::Storage("unexpected end of stream".to_string()))
/// }
///
/// assert!(decode_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum JournalListError {
    /// Storage operation failed.
    ///
    /// Occurs when the store file cannot be decoded or encoded. The string
    /// describes what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An abbreviation list could not be parsed as CSV.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        /// File that failed to parse.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// A specialized `Result` type for journal list operations.
pub type Result<T> = std::result::Result<T, JournalListError>;
