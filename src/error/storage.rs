use thiserror::Error;

/// Errors raised by the key-value backends behind the theme store.
///
/// None of these reach callers of the store: reads fall back to the default
/// theme and writes are logged.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (no window, storage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl StorageError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }

    pub fn deserialization(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}
