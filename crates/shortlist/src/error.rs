//! Error types for the shortlist crate.

use thiserror::Error;

/// Errors that can occur when constructing datasets.
#[derive(Debug, Error)]
pub enum ShortlistError {
    /// A dataset entry is missing the field used as the filter key.
    ///
    /// A well-formed dataset is a precondition for filtering, so this is
    /// surfaced once, at construction time, rather than skipped per-record
    /// at query time.
    #[error("record at index {index} has no filter key")]
    MalformedRecord {
        /// Position of the offending record in the input sequence.
        index: usize,
    },
}

/// Result type for shortlist operations.
pub type Result<T> = std::result::Result<T, ShortlistError>;
