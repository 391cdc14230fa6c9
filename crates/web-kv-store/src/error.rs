//! Storage Errors
//!
//! Everything that can go wrong between a typed value and the browser store.

/// Why a read or write against the key-value store did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No window, storage disabled, or access denied by the browser
    Unavailable,
    /// The backend refused the read
    Read(String),
    /// The backend refused the write (quota exceeded, security error)
    Write(String),
    /// The stored text is not valid for the requested type
    Decode(String),
    /// The value could not be turned into text
    Encode(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Decode(msg) => write!(f, "Malformed stored value: {}", msg),
            StorageError::Encode(msg) => write!(f, "Cannot encode value: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for raw backend access
pub type StorageResult<T> = Result<T, StorageError>;
