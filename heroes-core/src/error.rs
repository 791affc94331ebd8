//! Error types for record store operations

/// Errors that can occur while loading or addressing hero records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// IO error while reading the backing resource
    #[error("IO error: {0}")]
    Io(String),

    /// The document could not be parsed at all
    #[error("Malformed record document: {0}")]
    Malformed(String),

    /// The document parsed but its top level is not an array
    #[error("Record document must be an array, got {0}")]
    NotAnArray(String),

    /// One element of the array failed to deserialize
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the offending element in the array.
        index: usize,
        /// Why the element was rejected.
        reason: String,
    },

    /// Sort key name not recognised
    #[error("Unknown power stat: {0}")]
    UnknownStat(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
