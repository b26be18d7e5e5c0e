use thiserror::Error;

/// Key custody errors
#[derive(Error, Debug)]
pub enum Error {
    /// The storage root could not be determined or created
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Persisting a key failed
    #[error("Failed to write key '{identifier}': {source}")]
    StorageWriteError {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    /// No key is stored under the identifier
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// A stored key could not be decoded or failed validation
    #[error("Key '{identifier}' is corrupted: {reason}")]
    KeyCorrupted { identifier: String, reason: String },

    /// The identifier cannot name a key slot
    #[error("Invalid key identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] hwcrypto_crypto::Error),
}

impl Error {
    pub(crate) fn write(identifier: &impl std::fmt::Display, source: std::io::Error) -> Self {
        Error::StorageWriteError {
            identifier: identifier.to_string(),
            source,
        }
    }

    pub(crate) fn corrupted(
        identifier: &impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        Error::KeyCorrupted {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
