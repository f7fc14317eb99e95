//! Error types for listsync

/// Result type alias using listsync's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Update/delete target outside the current list bounds
    #[error("index {index} out of bounds for list of length {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl Error {
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }
}
