//! Boundary error type and stable error codes

use std::fmt;

use thiserror::Error;

/// Errors returned by [`HardwareCrypto`](crate::HardwareCrypto)
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Key(#[from] hwcrypto_key::Error),

    #[error(transparent)]
    Crypto(#[from] hwcrypto_crypto::Error),

    /// The operation did not finish in time; nothing was returned
    #[error("{operation} aborted: {reason}")]
    OperationAborted {
        operation: &'static str,
        reason: String,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Stable numeric identity of every error kind
///
/// The numbers are part of the C ABI and the CLI exit status; never reuse one.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    StorageUnavailable = 1,
    StorageWriteError = 2,
    KeyNotFound = 3,
    KeyCorrupted = 4,
    KeyGenerationFailed = 5,
    SigningFailed = 6,
    InvalidSignatureEncoding = 7,
    InvalidIdentifier = 8,
    InvalidKeyEncoding = 9,
    OperationAborted = 10,
    Configuration = 11,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::StorageUnavailable,
        ErrorCode::StorageWriteError,
        ErrorCode::KeyNotFound,
        ErrorCode::KeyCorrupted,
        ErrorCode::KeyGenerationFailed,
        ErrorCode::SigningFailed,
        ErrorCode::InvalidSignatureEncoding,
        ErrorCode::InvalidIdentifier,
        ErrorCode::InvalidKeyEncoding,
        ErrorCode::OperationAborted,
        ErrorCode::Configuration,
    ];

    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::StorageUnavailable => "storage_unavailable",
            ErrorCode::StorageWriteError => "storage_write_error",
            ErrorCode::KeyNotFound => "key_not_found",
            ErrorCode::KeyCorrupted => "key_corrupted",
            ErrorCode::KeyGenerationFailed => "key_generation_failed",
            ErrorCode::SigningFailed => "signing_failed",
            ErrorCode::InvalidSignatureEncoding => "invalid_signature_encoding",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::InvalidKeyEncoding => "invalid_key_encoding",
            ErrorCode::OperationAborted => "operation_aborted",
            ErrorCode::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Key(e) => key_error_code(e),
            ApiError::Crypto(e) => crypto_error_code(e),
            ApiError::OperationAborted { .. } => ErrorCode::OperationAborted,
            ApiError::Configuration(_) => ErrorCode::Configuration,
        }
    }

    pub(crate) fn aborted(operation: &'static str, reason: impl Into<String>) -> Self {
        ApiError::OperationAborted {
            operation,
            reason: reason.into(),
        }
    }
}

fn key_error_code(error: &hwcrypto_key::Error) -> ErrorCode {
    use hwcrypto_key::Error;

    match error {
        Error::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
        Error::StorageWriteError { .. } => ErrorCode::StorageWriteError,
        Error::KeyNotFound(_) => ErrorCode::KeyNotFound,
        Error::KeyCorrupted { .. } => ErrorCode::KeyCorrupted,
        Error::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
        Error::Crypto(e) => crypto_error_code(e),
    }
}

fn crypto_error_code(error: &hwcrypto_crypto::Error) -> ErrorCode {
    use hwcrypto_crypto::Error;

    match error {
        Error::KeyGenerationFailed(_) => ErrorCode::KeyGenerationFailed,
        Error::SigningFailed(_) => ErrorCode::SigningFailed,
        Error::InvalidSignatureEncoding(_) => ErrorCode::InvalidSignatureEncoding,
        Error::ValidationFailed(_)
        | Error::InvalidKeyEncoding(_)
        | Error::Pkcs8Error(_)
        | Error::SpkiError(_) => ErrorCode::InvalidKeyEncoding,
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
